use serde::Serialize;
use tracing::debug;

use crate::directions::RouteSummary;
use crate::error::{Endpoint, Error, Result};
use crate::facility::Facility;
use crate::path::find_path;
use crate::resolve::resolve_place;

/// High-level route planning request expressed as free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub from: String,
    pub to: String,
}

impl RouteRequest {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub start: String,
    pub goal: String,
    pub steps: Vec<String>,
}

impl RoutePlan {
    /// Number of connections walked.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Annotated summary of this plan for rendering.
    pub fn summary(&self, facility: &Facility) -> Result<RouteSummary> {
        RouteSummary::from_path(facility, &self.steps)
    }
}

/// Resolve both ends of `request` and compute the shortest route between them.
pub fn plan_route(facility: &Facility, request: &RouteRequest) -> Result<RoutePlan> {
    let graph = facility.graph();
    let start = resolve_endpoint(facility, &request.from, Endpoint::Source)?;
    let goal = resolve_endpoint(facility, &request.to, Endpoint::Destination)?;
    debug!(
        from = %request.from,
        to = %request.to,
        start,
        goal,
        "interpreted route endpoints"
    );

    let steps = find_path(graph, start, goal)?;
    Ok(RoutePlan {
        start: start.to_string(),
        goal: goal.to_string(),
        steps,
    })
}

/// Resolve one end of a route request, tagging failures with the endpoint.
pub fn resolve_endpoint<'f>(
    facility: &'f Facility,
    query: &str,
    endpoint: Endpoint,
) -> Result<&'f str> {
    resolve_place(facility.graph(), query).map_err(|err| match err {
        Error::PlaceNotFound { query, suggestions } => Error::UnresolvedEndpoint {
            endpoint,
            query,
            suggestions,
        },
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_plan_hop_count() {
        let plan = RoutePlan {
            start: "A".to_string(),
            goal: "C".to_string(),
            steps: vec!["A".to_string(), "B".to_string(), "C".to_string()],
        };
        assert_eq!(plan.hop_count(), 2);
    }

    #[test]
    fn route_plan_empty_hop_count() {
        let plan = RoutePlan {
            start: "A".to_string(),
            goal: "A".to_string(),
            steps: Vec::new(),
        };
        assert_eq!(plan.hop_count(), 0);
    }

    #[test]
    fn unresolved_destination_is_tagged() {
        let facility = Facility::sample_campus().expect("sample campus");
        let err = plan_route(&facility, &RouteRequest::new("gate", "gymnasium"))
            .expect_err("unknown destination");
        assert!(matches!(
            err,
            Error::UnresolvedEndpoint {
                endpoint: Endpoint::Destination,
                ..
            }
        ));
    }
}
