use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Convenient result alias for the wayfinder library.
pub type Result<T> = std::result::Result<T, Error>;

/// Which side of a route request a free-text query was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Endpoint::Source => "Source",
            Endpoint::Destination => "Destination",
        };
        f.write_str(value)
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// No place identifier contains the query text.
    #[error("unknown place: '{query}'{}", format_suggestions(.suggestions))]
    PlaceNotFound {
        query: String,
        suggestions: Vec<String>,
    },

    /// A route request endpoint could not be resolved to a place.
    #[error("{endpoint} location not found for: '{query}'.{}", format_suggestions(.suggestions))]
    UnresolvedEndpoint {
        endpoint: Endpoint,
        query: String,
        suggestions: Vec<String>,
    },

    /// The path finder was handed an identifier that is not in the graph.
    #[error("place '{place}' is not part of the facility graph")]
    InvalidEndpoint { place: String },

    /// Both endpoints exist but no sequence of connections joins them.
    #[error("no route found between {start} and {goal}")]
    NoPath { start: String, goal: String },

    /// Raised when a route summary is requested for an empty path.
    #[error("route path was empty")]
    EmptyRoute,

    /// The facility configuration file does not exist.
    #[error("facility configuration not found at {path}")]
    FacilityNotFound { path: PathBuf },

    /// The facility configuration is structurally unusable.
    #[error("invalid facility configuration: {message}")]
    InvalidFacility { message: String },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for facility configuration")]
    ProjectDirsUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Suggestions attached to a resolution failure, if any.
    pub fn suggestions(&self) -> &[String] {
        match self {
            Error::PlaceNotFound { suggestions, .. }
            | Error::UnresolvedEndpoint { suggestions, .. } => suggestions,
            _ => &[],
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(" Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            " Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
