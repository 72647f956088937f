//! Places command handler.

use std::io::Write;

use anyhow::{Context, Result};
use wayfinder_lib::Facility;

use crate::output::{write_places, OutputFormat};
use crate::terminal::ColorPalette;

/// List every known place with its floor label.
pub fn handle_places_command<W: Write>(
    out: &mut W,
    facility: &Facility,
    format: OutputFormat,
    palette: &ColorPalette,
) -> Result<()> {
    write_places(out, facility, format, palette).context("failed to write place listing")
}
