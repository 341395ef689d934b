//! The running order summary shown back to the user.

use std::fmt;

use crate::models::{OrderDetails, Skip, VAT_RATE_PERCENT};

use super::datetime::LocalDate;

/// Money amount in pence, displayed as pounds with two decimal places.
pub struct Pounds(pub u64);

impl fmt::Display for Pounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "£{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Markdown summary of everything captured so far in the order.
///
/// Only sections with data are rendered, so the summary grows as the user
/// progresses through the steps. Used both as the running footer summary
/// and as the final order review at payment.
pub struct OrderSummary<'a>(pub &'a OrderDetails);

impl fmt::Display for OrderSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = self.0;
        writeln!(f, "# Order Summary")?;

        if let Some(address) = order.formatted_address() {
            writeln!(f)?;
            writeln!(f, "**Delivery Address**: {address}")?;
            if let Some(postcode) = &order.postcode {
                writeln!(f, "**Postcode**: {postcode}")?;
            }
        } else if let Some(postcode) = &order.postcode {
            writeln!(f)?;
            writeln!(f, "**Postcode**: {postcode}")?;
        }

        if !order.waste_types.is_empty() {
            let names: Vec<String> =
                order.waste_types.iter().map(|w| w.label().to_string()).collect();
            writeln!(f)?;
            writeln!(f, "**Waste Types**: {}", names.join(", "))?;
        }

        if let Some(size) = order.skip_size {
            let skip = Skip::for_size(size);
            writeln!(f)?;
            match order.skip_price {
                Some(price) => writeln!(f, "**Skip**: {size} - £{price} ({})", skip.period)?,
                None => writeln!(f, "**Skip**: {size} ({})", skip.period)?,
            }
        }

        if let Some(location) = order.skip_location {
            writeln!(f)?;
            writeln!(f, "**Placement**: {location}")?;
        }

        if let Some(delivery) = &order.delivery_date {
            writeln!(f)?;
            writeln!(f, "**Delivery Date**: {}", LocalDate(delivery))?;
            if let Some(collection) = &order.collection_date {
                writeln!(f, "**Collection Date**: {}", LocalDate(collection))?;
            }
        }

        if let (Some(net), Some(vat), Some(total)) =
            (order.subtotal_pence(), order.vat_pence(), order.total_pence())
        {
            writeln!(f)?;
            writeln!(f, "**Subtotal**: {}", Pounds(net))?;
            writeln!(f, "**VAT ({VAT_RATE_PERCENT}%)**: {}", Pounds(vat))?;
            writeln!(f, "**Total**: {}", Pounds(total))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use crate::models::{collection_for, SkipLocation, SkipSize, WasteType};

    use super::*;

    #[test]
    fn test_pounds_formatting() {
        assert_eq!(format!("{}", Pounds(39_720)), "£397.20");
        assert_eq!(format!("{}", Pounds(33_100)), "£331.00");
        assert_eq!(format!("{}", Pounds(5)), "£0.05");
    }

    #[test]
    fn test_empty_order_renders_header_only() {
        let order = OrderDetails::default();
        let output = format!("{}", OrderSummary(&order));
        assert!(output.contains("# Order Summary"));
        assert!(!output.contains("**Skip**"));
        assert!(!output.contains("**Total**"));
    }

    #[test]
    fn test_full_order_summary() {
        let delivery = date(2026, 12, 20);
        let order = OrderDetails {
            postcode: Some("NR32 1AB".to_string()),
            city: Some("Lowestoft".to_string()),
            street: Some("High Street".to_string()),
            house_number: Some("12".to_string()),
            waste_types: vec![WasteType::Household, WasteType::Garden],
            skip_size: Some(SkipSize::Yard8),
            skip_price: Some(331),
            skip_location: Some(SkipLocation::Private),
            placement_photo: None,
            delivery_date: Some(delivery),
            collection_date: Some(collection_for(delivery)),
        };

        let output = format!("{}", OrderSummary(&order));
        assert!(output.contains("**Delivery Address**: 12 High Street, Lowestoft"));
        assert!(output.contains("**Waste Types**: Household Waste, Garden Waste"));
        assert!(output.contains("**Skip**: 8 Yard Skip - £331 (14 day hire period)"));
        assert!(output.contains("**Placement**: Private Property (No permit required)"));
        assert!(output.contains("**Delivery Date**: Sunday, 20 December 2026"));
        assert!(output.contains("**Collection Date**: Sunday, 3 January 2027"));
        assert!(output.contains("**VAT (20%)**: £66.20"));
        assert!(output.contains("**Total**: £397.20"));
    }
}
