//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around a civil [`Date`] that provides long-form formatting
/// via the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern used throughout the wizard's
/// date summaries: `Weekday, D Month YYYY`, for example
/// `Sunday, 20 December 2026`.
pub struct LocalDate<'a>(pub &'a Date);

impl fmt::Display for LocalDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} {} {}",
            self.0.strftime("%A"),
            self.0.day(),
            self.0.strftime("%B"),
            self.0.year()
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_local_date_format() {
        let d = date(2026, 12, 20);
        assert_eq!(format!("{}", LocalDate(&d)), "Sunday, 20 December 2026");
    }

    #[test]
    fn test_local_date_single_digit_day_is_unpadded() {
        let d = date(2027, 1, 3);
        assert_eq!(format!("{}", LocalDate(&d)), "Sunday, 3 January 2027");
    }
}
