//! Waste category enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of waste categories.
///
/// A booking may carry any combination of these; selection is replaced
/// wholesale on every update rather than merged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WasteType {
    /// General household items and furniture
    Household,

    /// Building materials and renovation debris
    Construction,

    /// Green waste and landscaping materials
    Garden,

    /// Business, office, and shop waste
    Commercial,
}

impl FromStr for WasteType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "household" => Ok(WasteType::Household),
            "construction" => Ok(WasteType::Construction),
            "garden" => Ok(WasteType::Garden),
            "commercial" => Ok(WasteType::Commercial),
            _ => Err(format!("Invalid waste type: {s}")),
        }
    }
}

impl WasteType {
    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            WasteType::Household => "household",
            WasteType::Construction => "construction",
            WasteType::Garden => "garden",
            WasteType::Commercial => "commercial",
        }
    }

    /// Card title shown during waste selection.
    pub fn label(&self) -> &'static str {
        match self {
            WasteType::Household => "Household Waste",
            WasteType::Construction => "Construction Waste",
            WasteType::Garden => "Garden Waste",
            WasteType::Commercial => "Commercial Waste",
        }
    }

    /// One-line description shown during waste selection.
    pub fn description(&self) -> &'static str {
        match self {
            WasteType::Household => "General household items and furniture",
            WasteType::Construction => "Building materials and renovation debris",
            WasteType::Garden => "Green waste and landscaping materials",
            WasteType::Commercial => "Commercial waste and office clearances",
        }
    }

    /// Example items for the category.
    pub fn examples(&self) -> &'static [&'static str] {
        match self {
            WasteType::Household => {
                &["Furniture", "Garden waste", "Appliances", "General household items"]
            }
            WasteType::Construction => &["Bricks", "Concrete", "Timber", "Plasterboard"],
            WasteType::Garden => &["Soil", "Plants", "Branches", "Grass cuttings"],
            WasteType::Commercial => &["Office furniture", "Equipment", "Shop fittings", "Packaging"],
        }
    }
}
