//! Output formatting for places and routes.
//!
//! Every renderer writes into a caller-supplied [`Write`] so the interactive
//! menu and the subcommands share one code path and tests can capture output.

mod enhanced;

use std::io::{self, Write};
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;
use wayfinder_lib::{Facility, RenderMode, RouteSummary};

use crate::terminal::{supports_unicode, ColorPalette};

pub use enhanced::EnhancedRenderer;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Route summary and step-by-step directions.
    #[default]
    Text,
    /// Markdown-flavoured summary.
    Rich,
    /// Tagged, colour-aware listing of each waypoint.
    Enhanced,
    /// Machine-readable JSON.
    Json,
}

/// One row of the `places` listing.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceEntry<'a> {
    pub id: &'a str,
    pub floor: &'a str,
    pub neighbours: Vec<&'a str>,
}

/// Print the CLI logo banner for `facility_name`.
///
/// Falls back to ASCII unless the locale advertises UTF-8.
pub fn print_logo(facility_name: &str, palette: &ColorPalette) {
    let mut stdout = io::stdout();
    let _ = write_logo(&mut stdout, facility_name, palette, supports_unicode());
}

fn write_logo<W: Write>(
    out: &mut W,
    facility_name: &str,
    palette: &ColorPalette,
    unicode: bool,
) -> io::Result<()> {
    let (orange, cyan, reset) = (palette.orange, palette.cyan, palette.reset);
    let title = format!("Indoor Navigation System ({facility_name})");

    if unicode {
        let rule = "─".repeat(title.chars().count() + 6);
        writeln!(out, "{cyan}╭{rule}╮{reset}")?;
        writeln!(out, "{cyan}│{orange}   {title}   {cyan}│{reset}")?;
        writeln!(out, "{cyan}╰{rule}╯{reset}")
    } else {
        let rule = "=".repeat(title.chars().count() + 6);
        writeln!(out, "{orange}{rule}")?;
        writeln!(out, "   {title}   ")?;
        writeln!(out, "{rule}{reset}")
    }
}

/// Print the footer with elapsed time.
pub fn print_footer(elapsed: Duration, palette: &ColorPalette) {
    let mut stdout = io::stdout();
    let _ = write_footer(&mut stdout, elapsed, palette);
}

fn write_footer<W: Write>(out: &mut W, elapsed: Duration, palette: &ColorPalette) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}Completed in {}{}",
        palette.gray,
        format_elapsed(elapsed),
        palette.reset
    )
}

fn format_elapsed(elapsed: Duration) -> String {
    let elapsed_ms = elapsed.as_millis();
    if elapsed_ms < 1000 {
        format!("{elapsed_ms}ms")
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    }
}

/// Write every known place with its floor label.
pub fn write_places<W: Write>(
    out: &mut W,
    facility: &Facility,
    format: OutputFormat,
    palette: &ColorPalette,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => {
            let entries = facility
                .listing()
                .map(|(id, floor)| PlaceEntry {
                    id,
                    floor,
                    neighbours: facility.graph().neighbours(id).collect(),
                })
                .collect::<Vec<_>>();
            write_json(out, &entries)
        }
        OutputFormat::Rich => {
            writeln!(out, "**Known locations** ({})", facility.graph().len())?;
            for (id, floor) in facility.listing() {
                writeln!(out, "* **{id}** (`{floor}`)")?;
            }
            Ok(())
        }
        OutputFormat::Enhanced => {
            let p = palette;
            for (id, floor) in facility.listing() {
                writeln!(out, "- {}{id}{} {}{floor}{}", p.white_bold, p.reset, p.gray, p.reset)?;
            }
            Ok(())
        }
        OutputFormat::Text => {
            writeln!(out, "Known locations:")?;
            for (id, floor) in facility.listing() {
                writeln!(out, "- {id} ({floor})")?;
            }
            Ok(())
        }
    }
}

/// Write a route summary in the requested format.
pub fn write_route<W: Write>(
    out: &mut W,
    summary: &RouteSummary,
    format: OutputFormat,
    palette: &ColorPalette,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => out.write_all(summary.render(RenderMode::PlainText).as_bytes()),
        OutputFormat::Rich => out.write_all(summary.render(RenderMode::RichText).as_bytes()),
        OutputFormat::Enhanced => {
            for line in EnhancedRenderer::new(*palette).lines(summary) {
                writeln!(out, "{line}")?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, summary),
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}
