//! The fixed six-step booking sequence.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One stage of the fixed booking sequence.
///
/// The order of the variants is significant: it is the order in which a
/// booking session progresses, and [`Step::position`] reflects it. Serde
/// tags match the wire names used by the original order payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    /// Postcode and address capture
    #[default]
    #[serde(rename = "postcode")]
    Location,

    /// Waste category selection
    WasteType,

    /// Skip size and price selection
    SkipSize,

    /// Skip placement and permit check
    PermitCheck,

    /// Delivery date selection
    ChooseDate,

    /// Payment and order confirmation
    Payment,
}

impl Step {
    /// All steps in booking order.
    pub const ALL: [Step; 6] = [
        Step::Location,
        Step::WasteType,
        Step::SkipSize,
        Step::PermitCheck,
        Step::ChooseDate,
        Step::Payment,
    ];

    /// Position of this step in the booking order (0-indexed).
    pub fn position(&self) -> usize {
        match self {
            Step::Location => 0,
            Step::WasteType => 1,
            Step::SkipSize => 2,
            Step::PermitCheck => 3,
            Step::ChooseDate => 4,
            Step::Payment => 5,
        }
    }

    /// The step following this one, if any.
    pub fn next(&self) -> Option<Step> {
        Step::ALL.get(self.position() + 1).copied()
    }

    /// The step preceding this one, if any.
    pub fn previous(&self) -> Option<Step> {
        self.position().checked_sub(1).map(|i| Step::ALL[i])
    }

    /// Whether this is the first step of the sequence.
    pub fn is_first(&self) -> bool {
        self.previous().is_none()
    }

    /// Whether this is the last step of the sequence.
    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Fixed display title for the step.
    pub fn title(&self) -> &'static str {
        match self {
            Step::Location => "Confirm Postcode",
            Step::WasteType => "Waste Types",
            Step::SkipSize => "Skip Size",
            Step::PermitCheck => "Skip Location",
            Step::ChooseDate => "Selected Date",
            Step::Payment => "Payment",
        }
    }

    /// Convert to the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Location => "postcode",
            Step::WasteType => "wasteType",
            Step::SkipSize => "skipSize",
            Step::PermitCheck => "permitCheck",
            Step::ChooseDate => "chooseDate",
            Step::Payment => "payment",
        }
    }
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postcode" | "location" => Ok(Step::Location),
            "wastetype" | "waste_type" | "waste" => Ok(Step::WasteType),
            "skipsize" | "skip_size" | "skip" => Ok(Step::SkipSize),
            "permitcheck" | "permit_check" | "permit" => Ok(Step::PermitCheck),
            "choosedate" | "choose_date" | "date" => Ok(Step::ChooseDate),
            "payment" | "pay" => Ok(Step::Payment),
            _ => Err(format!("Invalid step: {s}")),
        }
    }
}
