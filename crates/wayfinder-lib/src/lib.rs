//! Wayfinder library entry points.
//!
//! This crate holds the indoor route-planning engine: the facility place
//! registry, free-text place resolution, breadth-first path finding, and the
//! renderer that turns a path into walking directions. Higher-level consumers
//! (the CLI, or any API layer) should only depend on the functions exported
//! here instead of reimplementing behavior.
//!
//! Every entry point takes the [`Facility`] (or its [`Graph`]) explicitly; the
//! engine keeps no global state.

#![deny(warnings)]

pub mod config;
pub mod directions;
pub mod error;
pub mod facility;
pub mod graph;
pub mod path;
pub mod resolve;
pub mod routing;

pub use config::{
    default_facility_path, load_facility, resolve_facility_source, FacilitySource,
    FACILITY_ENV_VAR,
};
pub use directions::{
    classify_transition, render_directions, DirectionStep, RenderMode, RouteSummary, TransitKind,
    Waypoint, ARRIVED_MESSAGE, NO_ROUTE_MESSAGE,
};
pub use error::{Endpoint, Error, Result};
pub use facility::{
    sample_campus_config, Facility, FacilityConfig, FloorTable, PlaceConfig, UNKNOWN_FLOOR,
};
pub use graph::Graph;
pub use path::find_path;
pub use resolve::{matching_places, resolve_place, suggest_places, MAX_SUGGESTIONS};
pub use routing::{plan_route, resolve_endpoint, RoutePlan, RouteRequest};
