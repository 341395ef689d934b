//! Data models for the booking wizard.
//!
//! This module contains the core domain models for the Skipper booking
//! system: the fixed step sequence, the waste and skip enumerations, the
//! hire catalog, and the accumulated order record. Display implementations
//! for these models are located in [`crate::display::models`] to maintain
//! clean separation between data structures and presentation logic.
//!
//! # Display Architecture
//!
//! The models follow a dual-display approach:
//!
//! 1. **Model Display**: Display implementations in
//!    [`crate::display::models`] for standalone formatting
//! 2. **Wrapper Display**: Specialized wrappers in [`crate::display`] for
//!    contextual formatting (order summaries, the progress stepper, the
//!    hire catalog)
//!
//! # Examples
//!
//! ```rust
//! use skipper_core::models::{Skip, SkipSize, Step};
//!
//! // Steps carry their order and display titles
//! assert_eq!(Step::Location.position(), 0);
//! assert_eq!(Step::PermitCheck.title(), "Skip Location");
//! assert_eq!(Step::Payment.next(), None);
//!
//! // The hire catalog is fixed
//! let eight = Skip::for_size(SkipSize::Yard8);
//! assert_eq!(eight.price, 331);
//! ```

pub mod order;
pub mod skip;
pub mod step;
pub mod waste;


// Re-export all public types at the models level
pub use order::{collection_for, OrderDetails, HIRE_DAYS, VAT_RATE_PERCENT};
pub use skip::{Skip, SkipLocation, SkipSize, HIRE_PERIOD, ROAD_WARNING};
pub use step::Step;
pub use waste::WasteType;
