//! Display implementations for domain models.
//!
//! Kept separate from the model definitions to maintain the split between
//! data structures and presentation.

use std::fmt;

use crate::models::{SkipLocation, SkipSize, Step, WasteType};

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl fmt::Display for WasteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for SkipSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Yard Skip", self.yards())
    }
}

impl fmt::Display for SkipLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipLocation::Private => write!(f, "Private Property (No permit required)"),
            SkipLocation::Public => write!(f, "Public Road (Permit required)"),
        }
    }
}
