//! Parameter structures for Skipper operations.
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (the interactive CLI today, other shells later)
//! without framework-specific derives or dependencies. Interface layers
//! build these from their own argument types and pass them to the core.
//!
//! The central structure is [`OrderUpdate`], a partial mirror of
//! [`OrderDetails`](crate::models::OrderDetails): every field is optional,
//! and [`BookingFlow::update_order_details`](crate::flow::BookingFlow::update_order_details)
//! merges only the fields that are present. No validation happens at this
//! layer; step views validate before building an update.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{SkipLocation, SkipSize, WasteType};

/// Partial update to the accumulated order record.
///
/// Unset fields leave the corresponding order fields untouched. Fields
/// that are set overwrite at field granularity; in particular
/// `waste_types` replaces the stored selection rather than appending to
/// it. The collection date is never supplied directly: it is derived from
/// the delivery date by the flow, which keeps the fourteen-day offset
/// invariant structural.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    /// New delivery postcode
    #[serde(default)]
    pub postcode: Option<String>,
    /// New delivery city
    #[serde(default)]
    pub city: Option<String>,
    /// New delivery street name
    #[serde(default)]
    pub street: Option<String>,
    /// New delivery house or flat number
    #[serde(default)]
    pub house_number: Option<String>,
    /// Replacement waste category selection
    #[serde(default)]
    pub waste_types: Option<Vec<WasteType>>,
    /// New skip size
    #[serde(default)]
    pub skip_size: Option<SkipSize>,
    /// New skip price in whole pounds
    #[serde(default)]
    pub skip_price: Option<u32>,
    /// New skip placement location
    #[serde(default)]
    pub skip_location: Option<SkipLocation>,
    /// Placement photo marker
    #[serde(default)]
    pub placement_photo: Option<String>,
    /// New delivery date; the collection date follows automatically
    #[serde(default)]
    pub delivery_date: Option<Date>,
}

impl OrderUpdate {
    /// Whether the update carries no fields at all.
    pub fn is_empty(&self) -> bool {
        *self == OrderUpdate::default()
    }
}

/// Minimum partial-postcode length before a lookup is attempted.
pub const MIN_LOOKUP_LEN: usize = 4;

/// Parameters for a remote location lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupQuery {
    /// Partial postcode or area string typed so far
    pub partial: String,
}

impl LookupQuery {
    /// Build a query from a partial postcode string.
    pub fn new(partial: impl Into<String>) -> Self {
        Self { partial: partial.into() }
    }

    /// Whether the partial is long enough to be worth sending.
    pub fn is_searchable(&self) -> bool {
        self.partial.trim().len() >= MIN_LOOKUP_LEN
    }
}
