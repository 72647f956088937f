//! Turning a raw path into walking directions.

use std::fmt::{self, Write};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::facility::{Facility, FloorTable};

/// Line emitted instead of directions when there is no path.
pub const NO_ROUTE_MESSAGE: &str = "No path found between the selected locations.";

/// Closing line for routes with at least one step.
pub const ARRIVED_MESSAGE: &str = "You have reached your destination ✅";

const STAIRS_TOKEN: &str = "Stairs";
const LIFT_TOKEN: &str = "Lift";

/// How a single step between two adjacent places is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitKind {
    Stairs,
    Lift,
    FloorChange,
    SameFloor,
}

impl TransitKind {
    /// Short label used by compact renderings.
    pub fn label(self) -> &'static str {
        match self {
            TransitKind::Stairs => "stairs",
            TransitKind::Lift => "lift",
            TransitKind::FloorChange => "floor change",
            TransitKind::SameFloor => "walk",
        }
    }
}

impl fmt::Display for TransitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify the step from `from` to `to`.
///
/// The stairs and lift checks look at the identifiers themselves
/// (case-sensitive `Stairs` / `Lift` substrings) and take priority over the
/// floor labels. A place named e.g. `Liftoff Lounge` therefore counts as a
/// lift.
pub fn classify_transition(from: &str, to: &str, from_floor: &str, to_floor: &str) -> TransitKind {
    if from.contains(STAIRS_TOKEN) || to.contains(STAIRS_TOKEN) {
        TransitKind::Stairs
    } else if from.contains(LIFT_TOKEN) || to.contains(LIFT_TOKEN) {
        TransitKind::Lift
    } else if from_floor != to_floor {
        TransitKind::FloorChange
    } else {
        TransitKind::SameFloor
    }
}

/// One annotated transition between consecutive places of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectionStep {
    pub index: usize,
    pub from: String,
    pub to: String,
    pub from_floor: String,
    pub to_floor: String,
    pub kind: TransitKind,
}

impl DirectionStep {
    fn between(index: usize, from: &str, to: &str, floors: &FloorTable) -> Self {
        let from_floor = floors.label(from);
        let to_floor = floors.label(to);
        Self {
            index,
            from: from.to_string(),
            to: to.to_string(),
            from_floor: from_floor.to_string(),
            to_floor: to_floor.to_string(),
            kind: classify_transition(from, to, from_floor, to_floor),
        }
    }

    /// Human-readable instruction for this step.
    pub fn instruction(&self) -> String {
        match self.kind {
            TransitKind::Stairs => format!("Walk from {} to {} using the stairs.", self.from, self.to),
            TransitKind::Lift => format!("Walk from {} to {} and use the lift.", self.from, self.to),
            TransitKind::FloorChange => format!(
                "Walk from {} ({}) to {} ({}).",
                self.from, self.from_floor, self.to, self.to_floor
            ),
            TransitKind::SameFloor => format!("Walk straight from {} to {}.", self.from, self.to),
        }
    }
}

/// A place visited by a route, annotated with its floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Waypoint {
    pub index: usize,
    pub place: String,
    pub floor: String,
}

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    PlainText,
    RichText,
}

/// Structured form of a route that renderers and serialisers consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub start: Waypoint,
    pub goal: Waypoint,
    pub hops: usize,
    pub waypoints: Vec<Waypoint>,
    pub directions: Vec<DirectionStep>,
}

impl RouteSummary {
    /// Build a summary for `path` using the facility's floor labels.
    pub fn from_path<S: AsRef<str>>(facility: &Facility, path: &[S]) -> Result<Self> {
        Self::with_floors(facility.floors(), path)
    }

    /// Build a summary for `path` against an explicit floor table.
    pub fn with_floors<S: AsRef<str>>(floors: &FloorTable, path: &[S]) -> Result<Self> {
        let waypoints = path
            .iter()
            .enumerate()
            .map(|(index, place)| Waypoint {
                index,
                place: place.as_ref().to_string(),
                floor: floors.label(place.as_ref()).to_string(),
            })
            .collect::<Vec<_>>();

        let (Some(start), Some(goal)) = (waypoints.first().cloned(), waypoints.last().cloned())
        else {
            return Err(Error::EmptyRoute);
        };

        let directions = path
            .windows(2)
            .enumerate()
            .map(|(index, pair)| {
                DirectionStep::between(index, pair[0].as_ref(), pair[1].as_ref(), floors)
            })
            .collect();

        Ok(Self {
            start,
            goal,
            hops: path.len() - 1,
            waypoints,
            directions,
        })
    }

    /// Instruction strings in route order.
    pub fn instructions(&self) -> Vec<String> {
        self.directions.iter().map(DirectionStep::instruction).collect()
    }

    /// Output lines in the requested mode.
    pub fn lines(&self, mode: RenderMode) -> Vec<String> {
        match mode {
            RenderMode::PlainText => self.plain_lines(),
            RenderMode::RichText => self.rich_lines(),
        }
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RenderMode) -> String {
        let mut buffer = String::new();
        for line in self.lines(mode) {
            let _ = writeln!(buffer, "{line}");
        }
        buffer
    }

    fn closing_line(&self) -> String {
        if self.hops == 0 {
            format!("You are already at {}.", self.goal.place)
        } else {
            ARRIVED_MESSAGE.to_string()
        }
    }

    fn plain_lines(&self) -> Vec<String> {
        let mut lines = vec![
            "========== ROUTE SUMMARY ==========".to_string(),
            format!("Total steps: {}", self.hops),
            "Path:".to_string(),
        ];
        lines.extend(
            self.waypoints
                .iter()
                .map(|wp| format!("  [{}] {}  ({})", wp.index, wp.place, wp.floor)),
        );
        lines.push("---------- DIRECTIONS ----------".to_string());
        lines.extend(
            self.directions
                .iter()
                .map(|step| format!("- {}", step.instruction())),
        );
        lines.push(self.closing_line());
        lines
    }

    fn rich_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "**Route**: _{} → {}_ ({} steps)",
            self.start.place, self.goal.place, self.hops
        )];
        lines.extend(
            self.waypoints
                .iter()
                .map(|wp| format!("* {:>2}. **{}** (`{}`)", wp.index, wp.place, wp.floor)),
        );
        lines.extend(
            self.directions
                .iter()
                .map(|step| format!("  {}. [{}] {}", step.index + 1, step.kind, step.instruction())),
        );
        lines.push(format!("_{}_", self.closing_line()));
        lines
    }
}

/// Render `path` as plain-text direction lines.
///
/// An empty path yields the single "no route" line rather than an error so
/// callers can print the result unconditionally.
pub fn render_directions<S: AsRef<str>>(path: &[S], floors: &FloorTable) -> Vec<String> {
    match RouteSummary::with_floors(floors, path) {
        Ok(summary) => summary.lines(RenderMode::PlainText),
        Err(_) => vec![NO_ROUTE_MESSAGE.to_string()],
    }
}
