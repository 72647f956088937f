//! Resolve command handler: show how a free-text query is interpreted.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use wayfinder_lib::{matching_places, resolve_place, Facility};

use crate::output::{write_json, OutputFormat};

#[derive(Debug, Serialize)]
struct Resolution<'a> {
    query: &'a str,
    place: &'a str,
    floor: &'a str,
    candidates: Vec<&'a str>,
}

/// Resolve `query` and report the interpreted place plus any other candidates.
///
/// A query that matches nothing is an error carrying "did you mean" hints.
pub fn handle_resolve_command<W: Write>(
    out: &mut W,
    facility: &Facility,
    query: &str,
    format: OutputFormat,
) -> Result<()> {
    let graph = facility.graph();
    let place = resolve_place(graph, query)?;
    let resolution = Resolution {
        query,
        place,
        floor: facility.floors().label(place),
        candidates: matching_places(graph, query),
    };

    let result = match format {
        OutputFormat::Json => write_json(out, &resolution),
        _ => write_resolution_text(out, &resolution),
    };
    result.context("failed to write resolution")
}

fn write_resolution_text<W: Write>(out: &mut W, resolution: &Resolution<'_>) -> std::io::Result<()> {
    writeln!(
        out,
        "Interpreted place: {} ({})",
        resolution.place, resolution.floor
    )?;
    let others = resolution
        .candidates
        .iter()
        .filter(|candidate| **candidate != resolution.place)
        .copied()
        .collect::<Vec<_>>();
    if !others.is_empty() {
        writeln!(out, "Other matches: {}", others.join(", "))?;
    }
    Ok(())
}
