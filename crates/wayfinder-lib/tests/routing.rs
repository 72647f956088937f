mod common;

use wayfinder_lib::{plan_route, Endpoint, Error, RouteRequest};

use common::{campus, split_wings};

#[test]
fn free_text_route_plan_succeeds() {
    let facility = campus();
    let plan = plan_route(&facility, &RouteRequest::new("gate", "a-10")).expect("route exists");

    assert_eq!(plan.start, "Main Gate");
    assert_eq!(plan.goal, "A-101");
    assert_eq!(plan.steps, vec!["Main Gate", "Reception", "A-101"]);
    assert_eq!(plan.hop_count(), 2);
}

#[test]
fn same_place_plan_has_no_hops() {
    let facility = campus();
    let plan = plan_route(&facility, &RouteRequest::new("lab", "LAB-1")).expect("route exists");
    assert_eq!(plan.steps, vec!["Lab-1"]);
    assert_eq!(plan.hop_count(), 0);

    let summary = plan.summary(&facility).expect("summary");
    assert!(summary.directions.is_empty());
}

#[test]
fn unresolved_source_is_named() {
    let facility = campus();
    let err = plan_route(&facility, &RouteRequest::new("recepton", "gate"))
        .expect_err("typo in source");

    assert!(matches!(
        err,
        Error::UnresolvedEndpoint {
            endpoint: Endpoint::Source,
            ..
        }
    ));
    let message = err.to_string();
    assert!(message.starts_with("Source location not found for: 'recepton'."));
    assert!(message.contains("Did you mean"));
    assert!(message.contains("Reception"));
}

#[test]
fn empty_destination_is_not_resolved() {
    let facility = campus();
    let err = plan_route(&facility, &RouteRequest::new("gate", "   ")).expect_err("empty query");
    assert!(matches!(
        err,
        Error::UnresolvedEndpoint {
            endpoint: Endpoint::Destination,
            ..
        }
    ));
}

#[test]
fn disconnected_wings_have_no_route() {
    let facility = split_wings();
    let err = plan_route(&facility, &RouteRequest::new("east entrance", "west"))
        .expect_err("no connection between wings");
    assert!(matches!(err, Error::NoPath { ref start, ref goal }
        if start == "East Entrance" && goal == "West Entrance"));
    assert!(err.to_string().contains("no route found"));
}

#[test]
fn floor_change_within_a_wing() {
    let facility = split_wings();
    let plan = plan_route(&facility, &RouteRequest::new("east hall", "atrium")).expect("route");
    let summary = plan.summary(&facility).expect("summary");
    assert_eq!(
        summary.instructions(),
        vec!["Walk from East Hall (Ground) to East Atrium (Mezzanine).".to_string()]
    );
}
