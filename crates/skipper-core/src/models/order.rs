//! The accumulated order record for one booking session.

use jiff::civil::Date;
use jiff::ToSpan;
use serde::{Deserialize, Serialize};

use super::{SkipLocation, SkipSize, WasteType};

/// Number of days between delivery and collection.
pub const HIRE_DAYS: i64 = 14;

/// VAT rate applied to the skip price, in percent.
pub const VAT_RATE_PERCENT: u64 = 20;

/// The accumulated record of all user selections across steps.
///
/// Fields are only ever added or overwritten as the user progresses;
/// nothing is removed except by an explicit reset of the whole session.
/// This record is the final order payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    /// Delivery postcode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,

    /// Delivery city
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Delivery street name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,

    /// Delivery house or flat number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,

    /// Selected waste categories
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub waste_types: Vec<WasteType>,

    /// Selected skip size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_size: Option<SkipSize>,

    /// Price of the selected skip in whole pounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_price: Option<u32>,

    /// Skip placement location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_location: Option<SkipLocation>,

    /// Marker recording that a placement photo was provided
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_photo: Option<String>,

    /// Requested delivery date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<Date>,

    /// Collection date, always [`HIRE_DAYS`] after delivery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_date: Option<Date>,
}

/// Collection date for a given delivery date.
///
/// Calendar-correct, including month and year rollover: a delivery on
/// 20 December collects on 3 January of the following year.
pub fn collection_for(delivery: Date) -> Date {
    delivery.saturating_add(HIRE_DAYS.days())
}

impl OrderDetails {
    /// Whether every address field has been captured.
    pub fn address_complete(&self) -> bool {
        self.postcode.is_some()
            && self.city.is_some()
            && self.street.is_some()
            && self.house_number.is_some()
    }

    /// Formatted single-line delivery address, once complete.
    pub fn formatted_address(&self) -> Option<String> {
        match (&self.house_number, &self.street, &self.city) {
            (Some(house), Some(street), Some(city)) => Some(format!("{house} {street}, {city}")),
            _ => None,
        }
    }

    /// Skip price in pence, before VAT.
    pub fn subtotal_pence(&self) -> Option<u64> {
        self.skip_price.map(|p| u64::from(p) * 100)
    }

    /// VAT due on the skip price, in pence.
    pub fn vat_pence(&self) -> Option<u64> {
        self.subtotal_pence().map(|p| p * VAT_RATE_PERCENT / 100)
    }

    /// Total payable including VAT, in pence.
    pub fn total_pence(&self) -> Option<u64> {
        match (self.subtotal_pence(), self.vat_pence()) {
            (Some(net), Some(vat)) => Some(net + vat),
            _ => None,
        }
    }

    /// Serialize the order as the JSON submission payload.
    pub fn payload_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
