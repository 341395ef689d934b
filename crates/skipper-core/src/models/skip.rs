//! Skip sizes, placement locations, and the fixed hire catalog.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of available skip sizes, in cubic yards.
///
/// Serialized as the bare yardage string ("4" through "14") to match the
/// order payload format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkipSize {
    #[serde(rename = "4")]
    Yard4,
    #[serde(rename = "6")]
    Yard6,
    #[serde(rename = "8")]
    Yard8,
    #[serde(rename = "10")]
    Yard10,
    #[serde(rename = "12")]
    Yard12,
    #[serde(rename = "14")]
    Yard14,
}

impl FromStr for SkipSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "4" => Ok(SkipSize::Yard4),
            "6" => Ok(SkipSize::Yard6),
            "8" => Ok(SkipSize::Yard8),
            "10" => Ok(SkipSize::Yard10),
            "12" => Ok(SkipSize::Yard12),
            "14" => Ok(SkipSize::Yard14),
            _ => Err(format!("Invalid skip size: {s}")),
        }
    }
}

impl SkipSize {
    /// Capacity in cubic yards.
    pub const fn yards(&self) -> u8 {
        match self {
            SkipSize::Yard4 => 4,
            SkipSize::Yard6 => 6,
            SkipSize::Yard8 => 8,
            SkipSize::Yard10 => 10,
            SkipSize::Yard12 => 12,
            SkipSize::Yard14 => 14,
        }
    }

    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipSize::Yard4 => "4",
            SkipSize::Yard6 => "6",
            SkipSize::Yard8 => "8",
            SkipSize::Yard10 => "10",
            SkipSize::Yard12 => "12",
            SkipSize::Yard14 => "14",
        }
    }

    /// Whether highway regulations allow this size on a public road.
    ///
    /// Skips larger than 8 yards must be placed on private property.
    pub const fn road_legal(&self) -> bool {
        self.yards() <= 8
    }

    /// Approximate capacity in black refuse bags, shown as guidance.
    pub fn capacity_hint(&self) -> &'static str {
        match self {
            SkipSize::Yard4 => "approximately 40-45 black bags",
            SkipSize::Yard6 => "approximately 60-65 black bags",
            SkipSize::Yard8 => "approximately 80-85 black bags",
            SkipSize::Yard10 => "approximately 100-110 black bags",
            SkipSize::Yard12 => "approximately 120-130 black bags",
            SkipSize::Yard14 => "approximately 140-150 black bags",
        }
    }
}

/// Where the skip will be placed, which determines the permit requirement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkipLocation {
    /// Skip placed fully within private property boundaries
    Private,

    /// Skip placed on a public road
    Public,
}

impl FromStr for SkipLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "private" => Ok(SkipLocation::Private),
            "public" => Ok(SkipLocation::Public),
            _ => Err(format!("Invalid skip location: {s}")),
        }
    }
}

impl SkipLocation {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipLocation::Private => "private",
            SkipLocation::Public => "public",
        }
    }

    /// Whether a council permit is required for this placement.
    pub fn permit_required(&self) -> bool {
        matches!(self, SkipLocation::Public)
    }
}

/// One entry in the fixed hire catalog.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Skip {
    /// Skip size
    pub size: SkipSize,

    /// Hire price in whole pounds
    pub price: u32,

    /// Hire period description
    pub period: &'static str,

    /// Placement restriction warning, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
}

/// Warning attached to catalog entries too large for public roads.
pub const ROAD_WARNING: &str = "Not Allowed On The Road";

/// Hire period shared by every catalog entry.
pub const HIRE_PERIOD: &str = "14 day hire period";

impl Skip {
    /// The fixed six-entry hire catalog with current prices.
    pub fn catalog() -> &'static [Skip] {
        const fn entry(size: SkipSize, price: u32) -> Skip {
            Skip {
                size,
                price,
                period: HIRE_PERIOD,
                warning: if size.road_legal() { None } else { Some(ROAD_WARNING) },
            }
        }

        const CATALOG: [Skip; 6] = [
            entry(SkipSize::Yard4, 252),
            entry(SkipSize::Yard6, 303),
            entry(SkipSize::Yard8, 331),
            entry(SkipSize::Yard10, 377),
            entry(SkipSize::Yard12, 411),
            entry(SkipSize::Yard14, 442),
        ];
        &CATALOG
    }

    /// Look up the catalog entry for a size.
    pub fn for_size(size: SkipSize) -> &'static Skip {
        // The catalog covers every SkipSize variant.
        Skip::catalog()
            .iter()
            .find(|s| s.size == size)
            .unwrap_or(&Skip::catalog()[0])
    }
}
