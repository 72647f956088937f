//! Interactive console menu.
//!
//! The loop reads from any [`BufRead`] and writes to any [`Write`], so the
//! binary drives it from stdin/stdout and tests drive it from byte buffers.
//! End of input is treated like choosing "Exit" without the farewell line.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;
use wayfinder_lib::{plan_route, Error as LibError, Facility, RouteRequest, NO_ROUTE_MESSAGE};

use crate::commands::write_interpretation;
use crate::output::{write_places, write_route, OutputFormat};
use crate::terminal::ColorPalette;

pub const CHOICE_PROMPT: &str = "Enter your choice (1-3): ";
pub const FROM_PROMPT: &str = "From (e.g., Main Gate, A-101, hod, lab): ";
pub const TO_PROMPT: &str = "To   (e.g., A-201, Clubs Room, sports): ";
pub const INVALID_CHOICE: &str = "Invalid choice. Please enter 1, 2, or 3.";
pub const GOODBYE: &str = "Exiting Indoor Navigation System. Goodbye!";

/// Console session over a facility.
pub struct Menu<'a, R, W> {
    facility: &'a Facility,
    input: R,
    out: W,
    format: OutputFormat,
    palette: ColorPalette,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        facility: &'a Facility,
        input: R,
        out: W,
        format: OutputFormat,
        palette: ColorPalette,
    ) -> Self {
        Self {
            facility,
            input,
            out,
            format,
            palette,
        }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "Menu:")?;
            writeln!(self.out, "1. Show all known locations")?;
            writeln!(self.out, "2. Find route between two locations")?;
            writeln!(self.out, "3. Exit")?;

            let Some(choice) = self.prompt(CHOICE_PROMPT)? else {
                return Ok(());
            };
            debug!(choice = %choice, "menu selection");

            match choice.as_str() {
                "1" => {
                    writeln!(self.out)?;
                    write_places(&mut self.out, self.facility, self.format, &self.palette)
                        .context("failed to write place listing")?;
                }
                "2" => {
                    if !self.route_finder()? {
                        return Ok(());
                    }
                }
                "3" => {
                    writeln!(self.out, "{GOODBYE}")?;
                    return Ok(());
                }
                _ => writeln!(self.out, "{INVALID_CHOICE}")?,
            }
        }
    }

    /// Prompt for both endpoints and print the route. Returns `false` when
    /// input ended mid-dialogue.
    fn route_finder(&mut self) -> Result<bool> {
        writeln!(self.out)?;
        writeln!(self.out, "Route Finder")?;
        let Some(from) = self.prompt(FROM_PROMPT)? else {
            return Ok(false);
        };
        let Some(to) = self.prompt(TO_PROMPT)? else {
            return Ok(false);
        };

        match plan_route(self.facility, &RouteRequest::new(from, to)) {
            Ok(plan) => {
                write_interpretation(&mut self.out, &plan.start, &plan.goal)?;
                writeln!(self.out)?;
                let summary = plan.summary(self.facility)?;
                write_route(&mut self.out, &summary, self.format, &self.palette)
                    .context("failed to write route")?;
            }
            Err(err @ LibError::UnresolvedEndpoint { .. }) => writeln!(self.out, "{err}")?,
            Err(LibError::NoPath { start, goal }) => {
                write_interpretation(&mut self.out, &start, &goal)?;
                writeln!(self.out, "{NO_ROUTE_MESSAGE}")?;
            }
            Err(other) => return Err(other.into()),
        }
        Ok(true)
    }

    /// Write `prompt`, then read one trimmed line. `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Run the interactive menu over `input`/`out`.
pub fn run_menu<R: BufRead, W: Write>(
    facility: &Facility,
    input: R,
    out: W,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<()> {
    Menu::new(facility, input, out, format, palette).run()
}
