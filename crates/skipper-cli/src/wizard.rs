//! Wizard command grammar and per-step prompts.
//!
//! This module defines what the user can type at the wizard prompt and
//! how each step presents itself. The step-to-prompt dispatch is an
//! exhaustive match over [`Step`], so adding a step forces every dispatch
//! site to be updated at compile time.
//!
//! Input validation happens here, at the view seam: the flow's
//! `update_order_details` deliberately accepts any partial update, so
//! anything that needs checking (dates in the bookable window, known
//! waste types, known skip sizes) is checked before an update is built.

use std::str::FromStr;

use jiff::civil::Date;
use jiff::ToSpan;
use skipper_core::{
    display::SkipCatalog,
    error::{BookingError, Result},
    models::{Skip, SkipLocation, SkipSize, Step, WasteType},
    BookingFlow, OrderSummary,
};

/// How far ahead of today a delivery may be booked, in days.
pub const MAX_ADVANCE_DAYS: i64 = 60;

/// Address fields settable on the location step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Postcode,
    City,
    Street,
    HouseNumber,
}

impl FromStr for AddressField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postcode" => Ok(AddressField::Postcode),
            "city" => Ok(AddressField::City),
            "street" => Ok(AddressField::Street),
            "house" | "housenumber" | "house_number" => Ok(AddressField::HouseNumber),
            _ => Err(format!("Invalid address field: {s}")),
        }
    }
}

/// One command typed at the wizard prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank line; ignored
    Noop,
    /// Advance to the next step
    Next,
    /// Return to the previous step
    Back,
    /// Jump directly to an already-reached step
    Goto(Step),
    /// Set one address field
    Set { field: AddressField, value: String },
    /// Replace the waste type selection
    Waste(Vec<WasteType>),
    /// Select a skip size from the catalog
    Skip(SkipSize),
    /// Choose the placement location, optionally noting a placement photo
    Place { location: SkipLocation, photo: bool },
    /// Choose the delivery date
    Date(Date),
    /// Look up location candidates for a partial postcode
    Lookup(String),
    /// Show the running order summary
    Summary,
    /// Complete the order at the payment step
    Pay,
    /// Discard the session and start over
    Reset,
    /// Show available commands
    Help,
    /// End the session
    Quit,
}

impl Command {
    /// Parse one input line into a command.
    pub fn parse(line: &str) -> Result<Command> {
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            return Ok(Command::Noop);
        };
        let rest: Vec<&str> = parts.collect();

        match keyword.to_lowercase().as_str() {
            "next" | "n" | "continue" => Ok(Command::Next),
            "back" | "b" => Ok(Command::Back),
            "goto" => {
                let name = rest.first().ok_or_else(|| {
                    BookingError::invalid_input("step").with_reason("Usage: goto <step>")
                })?;
                let step = Step::from_str(name)
                    .map_err(|e| BookingError::invalid_input("step").with_reason(e))?;
                Ok(Command::Goto(step))
            }
            "set" => {
                let (field, value) = match rest.split_first() {
                    Some((field, value)) if !value.is_empty() => (field, value.join(" ")),
                    _ => {
                        return Err(BookingError::invalid_input("field")
                            .with_reason("Usage: set <postcode|city|street|house> <value>"));
                    }
                };
                let field = AddressField::from_str(field)
                    .map_err(|e| BookingError::invalid_input("field").with_reason(e))?;
                Ok(Command::Set { field, value })
            }
            "waste" => {
                let csv = rest.first().ok_or_else(|| {
                    BookingError::invalid_input("wasteTypes")
                        .with_reason("Usage: waste <household,construction,garden,commercial>")
                })?;
                let types = csv
                    .split(',')
                    .filter(|s| !s.is_empty())
                    .map(WasteType::from_str)
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(|e| BookingError::invalid_input("wasteTypes").with_reason(e))?;
                Ok(Command::Waste(types))
            }
            "skip" => {
                let size = rest.first().ok_or_else(|| {
                    BookingError::invalid_input("skipSize")
                        .with_reason("Usage: skip <4|6|8|10|12|14>")
                })?;
                let size = SkipSize::from_str(size)
                    .map_err(|e| BookingError::invalid_input("skipSize").with_reason(e))?;
                Ok(Command::Skip(size))
            }
            "place" => {
                let location = rest.first().ok_or_else(|| {
                    BookingError::invalid_input("skipLocation")
                        .with_reason("Usage: place <private|public> [photo]")
                })?;
                let location = SkipLocation::from_str(location)
                    .map_err(|e| BookingError::invalid_input("skipLocation").with_reason(e))?;
                let photo = rest.get(1).is_some_and(|s| s.eq_ignore_ascii_case("photo"));
                Ok(Command::Place { location, photo })
            }
            "date" => {
                let raw = rest.first().ok_or_else(|| {
                    BookingError::invalid_input("deliveryDate")
                        .with_reason("Usage: date <YYYY-MM-DD>")
                })?;
                let date = raw.parse::<Date>().map_err(|e| {
                    BookingError::invalid_input("deliveryDate").with_reason(e.to_string())
                })?;
                Ok(Command::Date(date))
            }
            "lookup" => {
                let partial = rest.join(" ");
                if partial.is_empty() {
                    return Err(BookingError::invalid_input("postcode")
                        .with_reason("Usage: lookup <partial postcode>"));
                }
                Ok(Command::Lookup(partial))
            }
            "summary" | "sum" => Ok(Command::Summary),
            "pay" => Ok(Command::Pay),
            "reset" => Ok(Command::Reset),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(BookingError::invalid_input("command")
                .with_reason(format!("Unknown command: {other}. Type 'help' for a list."))),
        }
    }
}

/// Check a delivery date against the bookable window.
///
/// Deliveries must be today or later, and no more than
/// [`MAX_ADVANCE_DAYS`] days out.
pub fn validate_delivery_date(delivery: Date, today: Date) -> Result<Date> {
    if delivery < today {
        return Err(BookingError::invalid_input("deliveryDate")
            .with_reason("Delivery date cannot be in the past"));
    }
    if delivery > today.saturating_add(MAX_ADVANCE_DAYS.days()) {
        return Err(BookingError::invalid_input("deliveryDate").with_reason(format!(
            "Delivery date must be within {MAX_ADVANCE_DAYS} days of today"
        )));
    }
    Ok(delivery)
}

/// Render the prompt for the current step.
///
/// The match is exhaustive over [`Step`]; each arm presents the step's
/// heading and the commands that apply to it.
pub fn step_prompt(flow: &BookingFlow) -> String {
    match flow.current_step() {
        Step::Location => {
            let mut out = String::from(
                "## Enter your location\n\n\
                 Search for your postcode, then fill in the address:\n\
                 - `lookup <partial postcode>` - search for matching locations\n\
                 - `set postcode <value>` / `set city <value>` / `set street <value>` / `set house <value>`\n\
                 - `next` once all four address fields are filled\n",
            );
            if flow.order().address_complete() {
                out.push_str("\nAddress captured. Type `next` to continue.\n");
            }
            out
        }
        Step::WasteType => {
            let mut out = String::from(
                "## Which type of waste best describes what you are disposing of?\n\n\
                 You can select multiple waste types:\n",
            );
            for waste in [
                WasteType::Household,
                WasteType::Construction,
                WasteType::Garden,
                WasteType::Commercial,
            ] {
                out.push_str(&format!(
                    "- **{}** ({}) - {}\n",
                    waste.label(),
                    waste.as_str(),
                    waste.description()
                ));
            }
            out.push_str("\nUse `waste <types,csv>`, e.g. `waste household,garden`, then `next`.\n");
            out
        }
        Step::SkipSize => {
            format!(
                "## Choose Your Skip Size\n\n{}\n\
                 Use `skip <size>`, e.g. `skip 8`, then `next`.\n",
                SkipCatalog(Skip::catalog())
            )
        }
        Step::PermitCheck => String::from(
            "## Where will the skip be placed?\n\n\
             This helps us determine if you need a permit for your skip:\n\
             - **private** - Private Property (No permit required)\n\
             - **public** - Public Road (Permit required)\n\n\
             Use `place <private|public> [photo]`, then `next`.\n",
        ),
        Step::ChooseDate => format!(
            "## Choose Your Delivery Date\n\n\
             We aim to deliver between 7am and 6pm on your chosen day. The\n\
             skip is collected 14 days after delivery.\n\n\
             Use `date <YYYY-MM-DD>` with a date up to {MAX_ADVANCE_DAYS} days from today,\n\
             then `next`.\n",
        ),
        Step::Payment => format!(
            "## Complete Your Order\n\n{}\n\
             Type `pay` to complete your order, or `back` to make changes.\n",
            OrderSummary(flow.order())
        ),
    }
}

/// Help text listing every wizard command.
pub fn help_text() -> &'static str {
    "## Commands\n\n\
     - `next` / `back` - move between steps\n\
     - `goto <step>` - jump to an already-reached step\n\
     - `lookup <partial postcode>` - search locations\n\
     - `set <postcode|city|street|house> <value>` - address fields\n\
     - `waste <types,csv>` - select waste types\n\
     - `skip <4|6|8|10|12|14>` - select a skip size\n\
     - `place <private|public> [photo]` - skip placement\n\
     - `date <YYYY-MM-DD>` - delivery date\n\
     - `summary` - show the order so far\n\
     - `pay` - complete the order (payment step only)\n\
     - `reset` - discard the session and start over\n\
     - `quit` - end the session\n"
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(Command::parse("next").unwrap(), Command::Next);
        assert_eq!(Command::parse("n").unwrap(), Command::Next);
        assert_eq!(Command::parse("back").unwrap(), Command::Back);
        assert_eq!(Command::parse("goto skip").unwrap(), Command::Goto(Step::SkipSize));
        assert_eq!(Command::parse("").unwrap(), Command::Noop);
        assert_eq!(Command::parse("   ").unwrap(), Command::Noop);
    }

    #[test]
    fn test_parse_set_preserves_multi_word_values() {
        assert_eq!(
            Command::parse("set street High Street").unwrap(),
            Command::Set {
                field: AddressField::Street,
                value: "High Street".to_string()
            }
        );
    }

    #[test]
    fn test_parse_set_requires_field_and_value() {
        assert!(Command::parse("set").is_err());
        assert!(Command::parse("set postcode").is_err());
        assert!(Command::parse("set county Suffolk").is_err());
    }

    #[test]
    fn test_parse_waste_csv() {
        assert_eq!(
            Command::parse("waste household,garden").unwrap(),
            Command::Waste(vec![WasteType::Household, WasteType::Garden])
        );
        assert!(Command::parse("waste nuclear").is_err());
    }

    #[test]
    fn test_parse_skip_and_place() {
        assert_eq!(Command::parse("skip 8").unwrap(), Command::Skip(SkipSize::Yard8));
        assert!(Command::parse("skip 5").is_err());
        assert_eq!(
            Command::parse("place public photo").unwrap(),
            Command::Place {
                location: SkipLocation::Public,
                photo: true
            }
        );
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            Command::parse("date 2026-12-20").unwrap(),
            Command::Date(date(2026, 12, 20))
        );
        assert!(Command::parse("date 20/12/2026").is_err());
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = Command::parse("frobnicate").unwrap_err();
        assert!(err.to_string().contains("Unknown command"));
    }

    #[test]
    fn test_delivery_date_window() {
        let today = date(2026, 6, 1);

        assert!(validate_delivery_date(date(2026, 6, 1), today).is_ok());
        assert!(validate_delivery_date(date(2026, 7, 15), today).is_ok());
        assert!(validate_delivery_date(date(2026, 5, 31), today).is_err());
        assert!(validate_delivery_date(date(2026, 8, 15), today).is_err());
    }

    #[test]
    fn test_prompt_dispatch_covers_each_step() {
        let flow = BookingFlow::new();
        assert!(step_prompt(&flow).contains("Enter your location"));

        let mut flow = BookingFlow::new();
        for _ in 0..5 {
            flow.go_to_next_step();
        }
        assert!(step_prompt(&flow).contains("Complete Your Order"));
    }
}
