//! Route command handler for computing walking directions between places.

use std::io::Write;

use anyhow::{Context, Result};
use wayfinder_lib::{plan_route, Facility, RouteRequest};

use crate::commands::{friendly_error, write_interpretation};
use crate::output::{write_route, OutputFormat};
use crate::terminal::ColorPalette;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Free-text source query.
    pub from: String,
    /// Free-text destination query.
    pub to: String,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(self.from.clone(), self.to.clone())
    }
}

/// Handle the route subcommand.
pub fn handle_route_command<W: Write>(
    out: &mut W,
    facility: &Facility,
    args: &RouteCommandArgs,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    let plan = plan_route(facility, &args.to_request()).map_err(friendly_error)?;
    let summary = plan.summary(facility)?;

    if format == OutputFormat::Text {
        write_interpretation(out, &plan.start, &plan.goal)?;
        writeln!(out)?;
    }
    write_route(out, &summary, format, palette).context("failed to write route")
}
