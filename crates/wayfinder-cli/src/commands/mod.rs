// Handlers for each CLI subcommand.
//
// main.rs parses arguments, loads the facility and dispatches here. Handlers
// write into a caller-supplied writer so the interactive menu can reuse them.

pub mod menu;
pub mod places;
pub mod resolve;
pub mod route;

use std::io::Write;

use anyhow::anyhow;
use wayfinder_lib::Error as LibError;

/// Map library routing errors to the messages users see.
pub(crate) fn friendly_error(err: LibError) -> anyhow::Error {
    match err {
        LibError::NoPath { start, goal } => anyhow!("No route found between {start} and {goal}."),
        other => anyhow::Error::new(other),
    }
}

/// Echo how the free-text endpoints were interpreted.
pub(crate) fn write_interpretation<W: Write>(
    out: &mut W,
    source: &str,
    destination: &str,
) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Interpreted source:      {source}")?;
    writeln!(out, "Interpreted destination: {destination}")
}
