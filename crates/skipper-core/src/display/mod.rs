//! Display formatting for booking state.
//!
//! This module provides Display implementations on domain models plus
//! newtype wrappers for contextual formatting, enabling consistent output
//! across the wizard's views.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display Wrappers│    │   Formatted     │
//! │ (Step, Order…)  │───▶│ (OrderSummary,  │───▶│    Output       │
//! │                 │    │  StepperLine…)  │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for the domain enums
//! - [`summary`]: The running order summary and money formatting
//! - [`stepper`]: The one-line progress stepper
//! - [`collections`]: The hire catalog and lookup result lists
//! - [`datetime`]: Long-form civil date formatting
//!
//! All wrappers produce markdown for rich terminal rendering; wrappers
//! hold references rather than owned data where practical.
//!
//! # Examples
//!
//! ```rust
//! use skipper_core::{
//!     display::{OrderSummary, SkipCatalog},
//!     models::{OrderDetails, Skip},
//! };
//!
//! let order = OrderDetails {
//!     skip_price: Some(331),
//!     ..OrderDetails::default()
//! };
//! let summary = format!("{}", OrderSummary(&order));
//! assert!(summary.contains("**Total**: £397.20"));
//!
//! let catalog = format!("{}", SkipCatalog(Skip::catalog()));
//! assert!(catalog.contains("£252"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod stepper;
pub mod summary;

// Re-export commonly used types for convenience
pub use collections::{LocationResults, SkipCatalog};
pub use datetime::LocalDate;
pub use stepper::StepperLine;
pub use summary::{OrderSummary, Pounds};
