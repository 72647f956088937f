//! Facility configuration: the place registry handed to the routing engine.
//!
//! A [`Facility`] pairs a connectivity [`Graph`] with a [`FloorTable`]. It is
//! built once (from the built-in sample campus or a JSON file) and then passed
//! by reference to every engine entry point.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Label rendered for places that have no floor entry.
pub const UNKNOWN_FLOOR: &str = "Unknown Floor";

/// Mapping of place identifier to a descriptive floor/zone label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FloorTable {
    labels: HashMap<String, String>,
}

impl FloorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the label for `place`, replacing any previous one.
    pub fn insert(&mut self, place: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(place.into(), label.into());
    }

    /// Label for `place`, or [`UNKNOWN_FLOOR`] when none is recorded.
    pub fn label(&self, place: &str) -> &str {
        self.labels
            .get(place)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_FLOOR)
    }

    /// Label for `place` only if one is recorded.
    pub fn get(&self, place: &str) -> Option<&str> {
        self.labels.get(place).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for FloorTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            labels: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// One place as written in a facility configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceConfig {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<String>,
    #[serde(default, alias = "neighbors")]
    pub neighbours: Vec<String>,
}

/// On-disk facility configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityConfig {
    #[serde(default = "default_facility_name")]
    pub name: String,
    pub places: Vec<PlaceConfig>,
}

fn default_facility_name() -> String {
    "Facility".to_string()
}

/// Immutable facility description: connectivity plus floor labels.
#[derive(Debug, Clone)]
pub struct Facility {
    name: String,
    graph: Graph,
    floors: FloorTable,
}

impl Facility {
    /// Assemble a facility from an already-built graph and floor table.
    pub fn new(name: impl Into<String>, graph: Graph, floors: FloorTable) -> Self {
        Self {
            name: name.into(),
            graph,
            floors,
        }
    }

    /// Build a facility from its configuration form.
    pub fn from_config(config: FacilityConfig) -> Result<Self> {
        if config.places.is_empty() {
            return Err(Error::InvalidFacility {
                message: "facility defines no places".to_string(),
            });
        }

        let floors = config
            .places
            .iter()
            .filter_map(|place| place.floor.as_ref().map(|floor| (place.id.clone(), floor.clone())))
            .collect::<FloorTable>();
        let graph = Graph::from_adjacency(
            config
                .places
                .into_iter()
                .map(|place| (place.id, place.neighbours)),
        )?;

        let facility = Self::new(config.name, graph, floors);
        facility.warn_on_asymmetry();
        Ok(facility)
    }

    /// Parse a JSON facility configuration from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let config: FacilityConfig = serde_json::from_reader(reader)?;
        Self::from_config(config)
    }

    /// Load a JSON facility configuration from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FacilityNotFound {
                path: path.to_path_buf(),
            });
        }
        debug!(path = %path.display(), "loading facility configuration");
        let file = fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// The built-in demonstration campus.
    pub fn sample_campus() -> Result<Self> {
        Self::from_config(sample_campus_config())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn floors(&self) -> &FloorTable {
        &self.floors
    }

    /// Every place with its floor label, in configuration order.
    pub fn listing(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.graph
            .places()
            .map(move |place| (place, self.floors.label(place)))
    }

    /// Convert back to the serialisable configuration form.
    pub fn to_config(&self) -> FacilityConfig {
        FacilityConfig {
            name: self.name.clone(),
            places: self
                .graph
                .places()
                .map(|place| PlaceConfig {
                    id: place.to_string(),
                    floor: self.floors.get(place).map(str::to_string),
                    neighbours: self.graph.neighbours(place).map(str::to_string).collect(),
                })
                .collect(),
        }
    }

    fn warn_on_asymmetry(&self) {
        for (from, to) in self.graph.asymmetric_links() {
            warn!(from, to, "one-way connection in facility configuration");
        }
    }
}

const GROUND: &str = "Ground Floor";
const FIRST: &str = "First Floor";
const SECOND: &str = "Second Floor";

/// Place id, floor label, neighbours.
type SamplePlace = (&'static str, &'static str, &'static [&'static str]);

const SAMPLE_CAMPUS: &[SamplePlace] = &[
    ("Main Gate", GROUND, &["Reception"]),
    (
        "Reception",
        GROUND,
        &["Main Gate", "A-101", "A-102", "Stairs-GF-1F", "Sports Room"],
    ),
    ("A-101", GROUND, &["Reception", "A-102"]),
    ("A-102", GROUND, &["Reception", "A-101", "A-103"]),
    ("A-103", GROUND, &["A-102", "Clubs Room"]),
    ("Clubs Room", GROUND, &["A-103"]),
    ("Sports Room", GROUND, &["Reception"]),
    (
        "Stairs-GF-1F",
        "Between Ground and First Floor",
        &["Reception", "Corridor-1F-1", "Lift-1"],
    ),
    ("Lift-1", FIRST, &["Corridor-1F-1", "Stairs-GF-1F"]),
    (
        "Corridor-1F-1",
        FIRST,
        &[
            "Stairs-GF-1F",
            "Lift-1",
            "A-201",
            "A-202",
            "Faculty Room-1",
            // Added so the second floor is reachable; listed last to keep tie-breaks.
            "Stairs-1F-2F",
        ],
    ),
    ("A-201", FIRST, &["Corridor-1F-1"]),
    ("A-202", FIRST, &["Corridor-1F-1", "Lab-1"]),
    ("Lab-1", FIRST, &["A-202"]),
    ("Faculty Room-1", FIRST, &["Corridor-1F-1"]),
    (
        "Stairs-1F-2F",
        "Between First and Second Floor",
        &["Corridor-1F-1", "Corridor-2F-1"],
    ),
    (
        "Corridor-2F-1",
        SECOND,
        &["Stairs-1F-2F", "A-301", "A-302", "HOD Cabin-1"],
    ),
    ("A-301", SECOND, &["Corridor-2F-1"]),
    ("A-302", SECOND, &["Corridor-2F-1"]),
    ("HOD Cabin-1", SECOND, &["Corridor-2F-1"]),
];

/// Configuration form of the built-in demonstration campus.
pub fn sample_campus_config() -> FacilityConfig {
    FacilityConfig {
        name: "Campus Demo".to_string(),
        places: SAMPLE_CAMPUS
            .iter()
            .map(|(id, floor, neighbours)| PlaceConfig {
                id: id.to_string(),
                floor: Some(floor.to_string()),
                neighbours: neighbours.iter().map(|n| n.to_string()).collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_campus_is_symmetric() {
        let facility = Facility::sample_campus().expect("sample campus");
        assert_eq!(facility.graph().len(), SAMPLE_CAMPUS.len());
        assert!(facility.graph().asymmetric_links().is_empty());
    }

    #[test]
    fn listing_follows_configuration_order() {
        let facility = Facility::sample_campus().expect("sample campus");
        let listing = facility.listing().take(3).collect::<Vec<_>>();
        assert_eq!(
            listing,
            vec![
                ("Main Gate", GROUND),
                ("Reception", GROUND),
                ("A-101", GROUND)
            ]
        );
    }

    #[test]
    fn missing_floor_falls_back() {
        let floors = FloorTable::from_iter([("Lobby", "Ground")]);
        assert_eq!(floors.label("Lobby"), "Ground");
        assert_eq!(floors.label("Roof"), UNKNOWN_FLOOR);
        assert_eq!(floors.get("Roof"), None);
    }

    #[test]
    fn insert_replaces_existing_label() {
        let mut floors = FloorTable::new();
        floors.insert("Lobby", "Ground");
        assert_eq!(floors.get("Lobby"), Some("Ground"));

        floors.insert("Lobby", "Mezzanine");
        assert_eq!(floors.label("Lobby"), "Mezzanine");
        assert_eq!(floors.label("Roof"), UNKNOWN_FLOOR);
    }

    #[test]
    fn parses_json_with_alias_and_optional_floor() {
        let json = r#"{
            "name": "Annex",
            "places": [
                { "id": "Door", "floor": "Ground", "neighbors": ["Hall"] },
                { "id": "Hall", "neighbours": ["Door"] }
            ]
        }"#;
        let facility = Facility::from_reader(json.as_bytes()).expect("valid facility");
        assert_eq!(facility.name(), "Annex");
        assert_eq!(facility.floors().label("Hall"), UNKNOWN_FLOOR);
        assert_eq!(facility.graph().neighbours("Door").collect::<Vec<_>>(), vec!["Hall"]);
    }

    #[test]
    fn empty_facility_is_rejected() {
        let err = Facility::from_reader(r#"{ "places": [] }"#.as_bytes()).expect_err("no places");
        assert!(matches!(err, Error::InvalidFacility { .. }));
    }

    #[test]
    fn config_round_trips_through_facility() {
        let config = sample_campus_config();
        let facility = Facility::from_config(config.clone()).expect("sample is valid");
        assert_eq!(facility.to_config(), config);
    }
}
