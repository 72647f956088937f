//! Tagged route renderer.

use wayfinder_lib::{RouteSummary, Waypoint};

use crate::terminal::{transit_tag, ColorPalette};

/// Renderer for the enhanced format: one badge-tagged line per waypoint.
pub struct EnhancedRenderer {
    palette: ColorPalette,
}

impl EnhancedRenderer {
    #[must_use]
    pub const fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    /// Output lines for `summary`, header first.
    pub fn lines(&self, summary: &RouteSummary) -> Vec<String> {
        let p = &self.palette;
        let mut lines = vec![format!(
            "Route from {}{}{} to {}{}{} ({} steps):",
            p.white_bold, summary.start.place, p.reset, p.white_bold, summary.goal.place, p.reset,
            summary.hops
        )];

        let last = summary.waypoints.len().saturating_sub(1);
        for waypoint in &summary.waypoints {
            lines.push(self.waypoint_line(summary, waypoint, last));
        }

        let changes = summary
            .directions
            .iter()
            .filter(|step| step.from_floor != step.to_floor)
            .count();
        lines.push(String::new());
        lines.push(format!("{}Floor changes: {changes}{}", p.gray, p.reset));
        lines
    }

    fn waypoint_line(&self, summary: &RouteSummary, waypoint: &Waypoint, last: usize) -> String {
        let p = &self.palette;
        // The step into a waypoint decides its badge; endpoints get their own.
        let (color, tag) = if waypoint.index == 0 {
            (p.tag_start, "STRT")
        } else if waypoint.index == last {
            (p.tag_goal, "GOAL")
        } else {
            let kind = summary.directions[waypoint.index - 1].kind;
            (p.transit_color(kind), transit_tag(kind))
        };
        format!(
            "{color}{tag}{} {}{}{} {}({}){}",
            p.reset, p.white_bold, waypoint.place, p.reset, p.gray, waypoint.floor, p.reset
        )
    }
}
