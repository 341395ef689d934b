//! Core library for the Skipper skip-hire booking wizard.
//!
//! This crate provides the business logic for a six-step booking session:
//! the step sequence and its navigation state machine, the accumulated
//! order record, the fixed hire catalog, the remote postcode lookup, and
//! display formatting for all of it.
//!
//! # Architecture
//!
//! - **Flow** ([`flow`]): the [`BookingFlow`] state machine owning the
//!   current step, the high-water mark of progress, and the order record.
//!   All mutation funnels through its operations; views never touch raw
//!   fields.
//! - **Models** ([`models`]): the step sequence, waste and skip
//!   enumerations, hire catalog, and order record.
//! - **Display** ([`display`]): Display implementations and newtype
//!   wrappers producing markdown for the terminal renderer.
//! - **Lookup** ([`lookup`]): the one external interface, an HTTP
//!   postcode lookup behind the [`LocationLookup`] trait.
//!
//! # Quick Start
//!
//! ```rust
//! use skipper_core::{BookingFlow, params::OrderUpdate, models::Step};
//!
//! let mut flow = BookingFlow::new();
//!
//! // Capture the address, then advance
//! flow.update_order_details(&OrderUpdate {
//!     postcode: Some("NR32 1AB".to_string()),
//!     city: Some("Lowestoft".to_string()),
//!     street: Some("High Street".to_string()),
//!     house_number: Some("12".to_string()),
//!     ..OrderUpdate::default()
//! });
//! assert!(flow.is_complete(Step::Location));
//! assert!(flow.go_to_next_step());
//! assert_eq!(flow.current_step(), Step::WasteType);
//! ```

pub mod display;
pub mod error;
pub mod flow;
pub mod lookup;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use display::{LocationResults, LocalDate, OrderSummary, Pounds, SkipCatalog, StepperLine};
pub use error::{BookingError, Result};
pub use flow::BookingFlow;
pub use lookup::{HttpLocationLookup, Location, LocationLookup, DEFAULT_LOOKUP_URL};
pub use models::{
    collection_for, OrderDetails, Skip, SkipLocation, SkipSize, Step, WasteType,
};
pub use params::{LookupQuery, OrderUpdate, MIN_LOOKUP_LEN};
