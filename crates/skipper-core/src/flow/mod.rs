//! The booking flow state machine.
//!
//! This module provides the main [`BookingFlow`] interface for one booking
//! session. The flow owns the ordered step sequence, the current step
//! pointer, the high-water mark of progress, and the accumulated order
//! record; every view reads from it and funnels all mutation through the
//! operations defined here.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Step Views    │    │   BookingFlow   │    │  OrderDetails   │
//! │ (prompt/render) │───▶│ (navigation +   │───▶│ (accumulated    │
//! │                 │    │  merge rules)   │    │  order payload) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Navigation rules
//!
//! - Forward movement is one step at a time and only while the current
//!   step is at or behind the high-water mark.
//! - Backward movement is unconditional (except at the first step) and
//!   never lowers the high-water mark, so a user who went back may
//!   re-advance through steps already reached.
//! - Direct jumps land anywhere at or behind the high-water mark; a jump
//!   ahead of it is rejected as a no-op, which keeps the
//!   `current <= highest` invariant structural instead of relying on
//!   caller discipline.
//!
//! All operations are total: invalid invocations (advancing past the last
//! step, retreating from the first) do nothing rather than fail.
//!
//! # Examples
//!
//! ```rust
//! use skipper_core::{flow::BookingFlow, models::Step, params::OrderUpdate};
//!
//! let mut flow = BookingFlow::new();
//! assert_eq!(flow.current_step(), Step::Location);
//!
//! flow.update_order_details(&OrderUpdate {
//!     postcode: Some("NR32 1AB".to_string()),
//!     ..OrderUpdate::default()
//! });
//! assert!(flow.go_to_next_step());
//! assert_eq!(flow.current_step(), Step::WasteType);
//!
//! // Going back never loses progress
//! assert!(flow.go_to_previous_step());
//! assert_eq!(flow.highest_step_reached(), Step::WasteType);
//! assert!(flow.can_move_forward());
//! ```

use log::{debug, warn};

use crate::models::{collection_for, OrderDetails, SkipLocation, Step, WasteType};
use crate::params::OrderUpdate;


/// State container for one booking session.
///
/// Created empty at session start, mutated throughout, and discarded when
/// the session ends; there is no persistence.
#[derive(Debug, Clone, Default)]
pub struct BookingFlow {
    current_step: Step,
    highest_step_reached: Step,
    order: OrderDetails,
    // Convenience mirrors of subsets of `order`, replaced on every update
    // that carries them.
    waste_types: Vec<WasteType>,
    skip_location: Option<SkipLocation>,
}

impl BookingFlow {
    /// Creates a new session at the first step with an empty order.
    pub fn new() -> Self {
        Self::default()
    }

    /// The step the user is currently on.
    pub fn current_step(&self) -> Step {
        self.current_step
    }

    /// The furthest-forward step ever reached this session.
    pub fn highest_step_reached(&self) -> Step {
        self.highest_step_reached
    }

    /// The accumulated order record.
    pub fn order(&self) -> &OrderDetails {
        &self.order
    }

    /// Mirrored waste category selection.
    pub fn waste_types(&self) -> &[WasteType] {
        &self.waste_types
    }

    /// Mirrored skip placement location.
    pub fn skip_location(&self) -> Option<SkipLocation> {
        self.skip_location
    }

    /// Whether the user may currently advance.
    ///
    /// True iff the current step is at or behind the high-water mark.
    pub fn can_move_forward(&self) -> bool {
        self.current_step.position() <= self.highest_step_reached.position()
    }

    /// Jump directly to a step.
    ///
    /// Intended for step-indicator navigation to already-completed steps.
    /// A jump ahead of the high-water mark is rejected as a no-op; returns
    /// whether the jump was taken.
    pub fn set_current_step(&mut self, step: Step) -> bool {
        if step.position() > self.highest_step_reached.position() {
            warn!(
                "Rejected jump to {} ahead of highest step {}",
                step.as_str(),
                self.highest_step_reached.as_str()
            );
            return false;
        }
        debug!("Jump to step {}", step.as_str());
        self.current_step = step;
        true
    }

    /// Merge a partial update into the order record.
    ///
    /// Unset fields are untouched; set fields overwrite at field
    /// granularity. A supplied waste-type selection replaces the stored
    /// one (and its mirror) rather than merging, and likewise for the
    /// placement location. A supplied delivery date also sets the
    /// collection date exactly fourteen days later. No validation is
    /// performed here; callers validate before building the update.
    pub fn update_order_details(&mut self, update: &OrderUpdate) {
        if let Some(postcode) = &update.postcode {
            self.order.postcode = Some(postcode.clone());
        }
        if let Some(city) = &update.city {
            self.order.city = Some(city.clone());
        }
        if let Some(street) = &update.street {
            self.order.street = Some(street.clone());
        }
        if let Some(house_number) = &update.house_number {
            self.order.house_number = Some(house_number.clone());
        }
        if let Some(waste_types) = &update.waste_types {
            self.order.waste_types = waste_types.clone();
            self.waste_types = waste_types.clone();
        }
        if let Some(skip_size) = update.skip_size {
            self.order.skip_size = Some(skip_size);
        }
        if let Some(skip_price) = update.skip_price {
            self.order.skip_price = Some(skip_price);
        }
        if let Some(skip_location) = update.skip_location {
            self.order.skip_location = Some(skip_location);
            self.skip_location = Some(skip_location);
        }
        if let Some(placement_photo) = &update.placement_photo {
            self.order.placement_photo = Some(placement_photo.clone());
        }
        if let Some(delivery_date) = update.delivery_date {
            self.order.delivery_date = Some(delivery_date);
            self.order.collection_date = Some(collection_for(delivery_date));
        }
    }

    /// Advance to the next step in the fixed order.
    ///
    /// Advances only if a next step exists and forward movement is
    /// currently allowed; silently does nothing otherwise. On a successful
    /// advance the high-water mark is raised if the new step passes it.
    /// Returns whether the step changed.
    pub fn go_to_next_step(&mut self) -> bool {
        let Some(next) = self.current_step.next() else {
            return false;
        };
        if !self.can_move_forward() {
            return false;
        }

        debug!("Advance from {} to {}", self.current_step.as_str(), next.as_str());
        self.current_step = next;
        if next.position() > self.highest_step_reached.position() {
            self.highest_step_reached = next;
        }
        true
    }

    /// Move back to the immediately preceding step.
    ///
    /// Does nothing at the first step, and never changes the high-water
    /// mark. Returns whether the step changed.
    pub fn go_to_previous_step(&mut self) -> bool {
        let Some(previous) = self.current_step.previous() else {
            return false;
        };
        debug!(
            "Retreat from {} to {}",
            self.current_step.as_str(),
            previous.as_str()
        );
        self.current_step = previous;
        true
    }

    /// Whether the order carries everything a step is responsible for.
    ///
    /// `Payment` never reports complete: the system does not model a
    /// post-payment state.
    pub fn is_complete(&self, step: Step) -> bool {
        match step {
            Step::Location => self.order.address_complete(),
            Step::WasteType => !self.order.waste_types.is_empty(),
            Step::SkipSize => self.order.skip_size.is_some() && self.order.skip_price.is_some(),
            Step::PermitCheck => self.order.skip_location.is_some(),
            Step::ChooseDate => self.order.delivery_date.is_some(),
            Step::Payment => false,
        }
    }

    /// Discard all session state and return to the first step.
    pub fn reset(&mut self) {
        debug!("Session reset");
        *self = Self::default();
    }
}
