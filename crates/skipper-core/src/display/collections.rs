//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::lookup::Location;
use crate::models::Skip;

/// Newtype wrapper for displaying the fixed hire catalog.
///
/// Renders each catalog entry as a markdown list item with its price,
/// hire period, capacity guidance, and any road-placement warning.
pub struct SkipCatalog<'a>(pub &'a [Skip]);

impl fmt::Display for SkipCatalog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No skips available.");
        }
        for skip in self.0 {
            write!(
                f,
                "- **{}** - £{} ({}, holds {})",
                skip.size, skip.price, skip.period, skip.size.capacity_hint()
            )?;
            if let Some(warning) = skip.warning {
                write!(f, " ⚠ {warning}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying deduplicated lookup results.
///
/// An empty result set renders its own "no matches" line, so callers
/// print the wrapper unconditionally.
pub struct LocationResults(pub Vec<Location>);

impl fmt::Display for LocationResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No matching locations found.");
        }
        for location in &self.0 {
            if location.area.is_empty() {
                writeln!(f, "- {}", location.postcode)?;
            } else {
                writeln!(f, "- {} ({})", location.postcode, location.area)?;
            }
        }
        Ok(())
    }
}
