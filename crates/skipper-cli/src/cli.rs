//! The interactive wizard shell.
//!
//! [`Wizard`] owns the booking flow, the terminal renderer, and the
//! location lookup client, and maps each parsed [`Command`] to a flow
//! operation. Selection commands are only honored on the step they belong
//! to, mirroring how each step view owns its own controls; validation of
//! user input happens here before any order update is built, and lookup
//! failures are shown inline rather than ending the session.

use std::io::BufRead;

use anyhow::{Context, Result};
use jiff::Zoned;
use log::{debug, info, warn};
use skipper_core::{
    display::{LocalDate, LocationResults, StepperLine},
    models::{Skip, SkipLocation, SkipSize, Step, WasteType},
    BookingFlow, LocationLookup, LookupQuery, OrderSummary, OrderUpdate,
};

use crate::renderer::TerminalRenderer;
use crate::wizard::{help_text, step_prompt, validate_delivery_date, AddressField, Command};

/// Interactive booking wizard session.
pub struct Wizard {
    flow: BookingFlow,
    renderer: TerminalRenderer,
    lookup: Box<dyn LocationLookup + Send + Sync>,
}

impl Wizard {
    /// Create a wizard over a fresh or existing flow.
    pub fn new(
        flow: BookingFlow,
        renderer: TerminalRenderer,
        lookup: Box<dyn LocationLookup + Send + Sync>,
    ) -> Self {
        Self {
            flow,
            renderer,
            lookup,
        }
    }

    /// Run the wizard loop until `quit` or end of input.
    pub async fn run(&mut self, reader: impl BufRead) -> Result<()> {
        self.render_state()?;

        for line in reader.lines() {
            let line = line.context("Failed to read command input")?;
            match Command::parse(&line) {
                Ok(Command::Noop) => {}
                Ok(Command::Quit) => {
                    self.render("Session ended. Your booking was not saved.\n")?;
                    break;
                }
                Ok(command) => {
                    self.dispatch(command).await?;
                    self.render_state()?;
                }
                Err(e) => self.render(&format!("Error: {e}\n"))?,
            }
        }

        info!("Wizard session finished");
        Ok(())
    }

    fn render(&self, markdown: &str) -> Result<()> {
        self.renderer.render(markdown)
    }

    /// Redraw the stepper and the current step's prompt.
    fn render_state(&self) -> Result<()> {
        let stepper = StepperLine::new(
            self.flow.current_step(),
            self.flow.highest_step_reached(),
        );
        self.render(&format!("\n{stepper}\n\n{}", step_prompt(&self.flow)))
    }

    /// Selection commands only apply on the step that owns them.
    fn on_step(&self, step: Step) -> Result<bool> {
        if self.flow.current_step() == step {
            Ok(true)
        } else {
            self.render(&format!(
                "That command belongs to the {} step (you are on {}).\n",
                step.title(),
                self.flow.current_step().title()
            ))?;
            Ok(false)
        }
    }

    async fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Noop | Command::Quit => Ok(()),
            Command::Next => self.handle_next(),
            Command::Back => self.handle_back(),
            Command::Goto(step) => self.handle_goto(step),
            Command::Set { field, value } => self.handle_set(field, value),
            Command::Waste(types) => self.handle_waste(types),
            Command::Skip(size) => self.handle_skip(size),
            Command::Place { location, photo } => self.handle_place(location, photo),
            Command::Date(date) => self.handle_date(date),
            Command::Lookup(partial) => self.handle_lookup(partial).await,
            Command::Summary => self.render(&format!("{}", OrderSummary(self.flow.order()))),
            Command::Pay => self.handle_pay(),
            Command::Reset => {
                self.flow.reset();
                self.render("Session reset. Starting a new booking.\n")
            }
            Command::Help => self.render(help_text()),
        }
    }

    fn handle_next(&mut self) -> Result<()> {
        let current = self.flow.current_step();
        if current.is_last() {
            return self.render("Already at the final step.\n");
        }
        if !self.flow.is_complete(current) {
            return self.render("Please make a selection to continue.\n");
        }
        if !self.flow.go_to_next_step() {
            // Unreachable through this shell, but the flow keeps it total.
            return self.render("You cannot proceed as you've gone back from a later step.\n");
        }
        Ok(())
    }

    fn handle_back(&mut self) -> Result<()> {
        if !self.flow.go_to_previous_step() {
            return self.render("Already at the first step.\n");
        }
        Ok(())
    }

    fn handle_goto(&mut self, step: Step) -> Result<()> {
        if !self.flow.set_current_step(step) {
            return self.render(&format!("You haven't reached {} yet.\n", step.title()));
        }
        Ok(())
    }

    fn handle_set(&mut self, field: AddressField, value: String) -> Result<()> {
        if !self.on_step(Step::Location)? {
            return Ok(());
        }

        let mut update = OrderUpdate::default();
        match field {
            AddressField::Postcode => update.postcode = Some(value.to_uppercase()),
            AddressField::City => update.city = Some(value),
            AddressField::Street => update.street = Some(value),
            AddressField::HouseNumber => update.house_number = Some(value),
        }
        self.flow.update_order_details(&update);
        Ok(())
    }

    fn handle_waste(&mut self, types: Vec<WasteType>) -> Result<()> {
        if !self.on_step(Step::WasteType)? {
            return Ok(());
        }
        if types.is_empty() {
            return self.render("Select at least one waste type.\n");
        }

        let labels: Vec<&str> = types.iter().map(|w| w.label()).collect();
        self.flow.update_order_details(&OrderUpdate {
            waste_types: Some(types),
            ..OrderUpdate::default()
        });
        self.render(&format!("Selected: {}\n", labels.join(", ")))
    }

    fn handle_skip(&mut self, size: SkipSize) -> Result<()> {
        if !self.on_step(Step::SkipSize)? {
            return Ok(());
        }

        let skip = Skip::for_size(size);
        self.flow.update_order_details(&OrderUpdate {
            skip_size: Some(skip.size),
            skip_price: Some(skip.price),
            ..OrderUpdate::default()
        });

        let mut message = format!("Selected {} - £{} ({}).\n", skip.size, skip.price, skip.period);
        if let Some(warning) = skip.warning {
            message.push_str(&format!(
                "⚠ {warning}: this size must be placed on private property.\n"
            ));
        }
        self.render(&message)
    }

    fn handle_place(&mut self, location: SkipLocation, photo: bool) -> Result<()> {
        if !self.on_step(Step::PermitCheck)? {
            return Ok(());
        }

        self.flow.update_order_details(&OrderUpdate {
            skip_location: Some(location),
            placement_photo: photo.then(|| "uploaded".to_string()),
            ..OrderUpdate::default()
        });

        let mut message = format!("Placement: {location}.\n");
        if location.permit_required() {
            message.push_str("We will arrange the council permit for you.\n");
            if let Some(size) = self.flow.order().skip_size {
                if !size.road_legal() {
                    message.push_str(&format!(
                        "⚠ A {size} is not allowed on public roads; choose private \
                         placement or a smaller skip.\n"
                    ));
                }
            }
        }
        self.render(&message)
    }

    fn handle_date(&mut self, date: jiff::civil::Date) -> Result<()> {
        if !self.on_step(Step::ChooseDate)? {
            return Ok(());
        }

        let today = Zoned::now().date();
        match validate_delivery_date(date, today) {
            Ok(delivery) => {
                self.flow.update_order_details(&OrderUpdate {
                    delivery_date: Some(delivery),
                    ..OrderUpdate::default()
                });
                let order = self.flow.order();
                let collection = order
                    .collection_date
                    .unwrap_or(delivery);
                self.render(&format!(
                    "Delivery Date: {}\nCollection Date: {}\n",
                    LocalDate(&delivery),
                    LocalDate(&collection)
                ))
            }
            Err(e) => self.render(&format!("Error: {e}\n")),
        }
    }

    async fn handle_lookup(&mut self, partial: String) -> Result<()> {
        if !self.on_step(Step::Location)? {
            return Ok(());
        }

        let query = LookupQuery::new(partial);
        if !query.is_searchable() {
            return self.render("Keep typing - at least 4 characters are needed to search.\n");
        }

        match self.lookup.search(&query).await {
            Ok(locations) => self.render(&format!("{}", LocationResults(locations))),
            Err(e) => {
                warn!("Location lookup failed: {e}");
                self.render("Error fetching location data. Please try again.\n")
            }
        }
    }

    fn handle_pay(&mut self) -> Result<()> {
        if !self.on_step(Step::Payment)? {
            return Ok(());
        }

        let incomplete: Vec<&str> = Step::ALL
            .iter()
            .take(5)
            .filter(|s| !self.flow.is_complete(**s))
            .map(|s| s.title())
            .collect();
        if !incomplete.is_empty() {
            return self.render(&format!(
                "Your order is incomplete. Still needed: {}.\n",
                incomplete.join(", ")
            ));
        }

        match self.flow.order().payload_json() {
            Ok(payload) => debug!("Order payload: {payload}"),
            Err(e) => warn!("Failed to serialize order payload: {e}"),
        }

        self.render(&format!(
            "{}\nPayment completed successfully! Your skip will be delivered on \
             the selected date.\n",
            OrderSummary(self.flow.order())
        ))
    }
}
