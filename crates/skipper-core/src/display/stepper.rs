//! The one-line progress stepper.

use std::fmt;

use crate::models::Step;

/// One-line progress indicator over the six step titles.
///
/// Steps before the current one are shown with a completion mark, the
/// current step with an arrow, and later steps with an open circle,
/// mirroring the status icons used elsewhere in the output.
pub struct StepperLine {
    pub current: Step,
    pub highest: Step,
}

impl StepperLine {
    /// Build a stepper line for the given position and high-water mark.
    pub fn new(current: Step, highest: Step) -> Self {
        Self { current, highest }
    }

    fn icon(&self, step: Step) -> &'static str {
        if step == self.current {
            "➤"
        } else if step.position() < self.current.position() {
            "✓"
        } else {
            "○"
        }
    }
}

impl fmt::Display for StepperLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in Step::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{} {}", self.icon(*step), step.title())?;
        }
        // Reachable-but-not-current steps after a backward jump
        if self.highest.position() > self.current.position() {
            write!(f, "  (reached: {})", self.highest.title())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepper_marks_current_and_completed() {
        let line = format!("{}", StepperLine::new(Step::SkipSize, Step::SkipSize));
        assert!(line.contains("✓ Confirm Postcode"));
        assert!(line.contains("✓ Waste Types"));
        assert!(line.contains("➤ Skip Size"));
        assert!(line.contains("○ Payment"));
        assert!(!line.contains("(reached:"));
    }

    #[test]
    fn test_stepper_notes_high_water_after_going_back() {
        let line = format!("{}", StepperLine::new(Step::SkipSize, Step::Payment));
        assert!(line.contains("➤ Skip Size"));
        assert!(line.contains("(reached: Payment)"));
    }
}
