//! Locating the facility configuration to load at startup.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::facility::Facility;

/// Environment variable that points at a facility configuration file.
pub const FACILITY_ENV_VAR: &str = "WAYFINDER_FACILITY";

/// Default filename looked up in the platform configuration directory.
const FACILITY_FILENAME: &str = "facility.json";

/// Where a facility configuration is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacilitySource {
    /// A JSON configuration file.
    File(PathBuf),
    /// The demonstration campus compiled into the library.
    BuiltIn,
}

impl fmt::Display for FacilitySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacilitySource::File(path) => write!(f, "{}", path.display()),
            FacilitySource::BuiltIn => f.write_str("built-in sample campus"),
        }
    }
}

/// Resolve the default configuration location using platform-specific project directories.
pub fn default_facility_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "wayfinder", "wayfinder")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.config_dir().join(FACILITY_FILENAME))
}

/// Decide which facility configuration to use.
///
/// Resolution order:
/// 1. `explicit` (typically a `--facility` flag),
/// 2. the [`FACILITY_ENV_VAR`] environment variable,
/// 3. `facility.json` in the platform configuration directory, if present,
/// 4. the built-in sample campus.
///
/// Explicit and environment paths must exist; the configuration directory is
/// only used when a file is actually there.
pub fn resolve_facility_source(explicit: Option<&Path>) -> Result<FacilitySource> {
    if let Some(path) = explicit {
        return existing_file(path.to_path_buf());
    }

    if let Some(value) = env::var_os(FACILITY_ENV_VAR) {
        if !value.is_empty() {
            debug!(var = FACILITY_ENV_VAR, "using facility path from environment");
            return existing_file(PathBuf::from(value));
        }
    }

    match default_facility_path() {
        Ok(path) if path.is_file() => return Ok(FacilitySource::File(path)),
        Ok(path) => debug!(path = %path.display(), "no facility configuration in config dir"),
        Err(err) => debug!(error = %err, "skipping config dir lookup"),
    }

    Ok(FacilitySource::BuiltIn)
}

/// Load the facility selected by [`resolve_facility_source`].
pub fn load_facility(explicit: Option<&Path>) -> Result<Facility> {
    let source = resolve_facility_source(explicit)?;
    let facility = match &source {
        FacilitySource::File(path) => Facility::from_path(path)?,
        FacilitySource::BuiltIn => Facility::sample_campus()?,
    };
    info!(
        source = %source,
        name = facility.name(),
        places = facility.graph().len(),
        "facility loaded"
    );
    Ok(facility)
}

fn existing_file(path: PathBuf) -> Result<FacilitySource> {
    if path.is_file() {
        Ok(FacilitySource::File(path))
    } else {
        Err(Error::FacilityNotFound { path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = resolve_facility_source(Some(Path::new("/definitely/not/here.json")))
            .expect_err("missing file");
        assert!(matches!(err, Error::FacilityNotFound { .. }));
    }

    #[test]
    fn explicit_existing_path_wins() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("facility.json");
        std::fs::write(&path, r#"{ "places": [ { "id": "Only" } ] }"#).expect("write");

        let source = resolve_facility_source(Some(&path)).expect("resolves");
        assert_eq!(source, FacilitySource::File(path.clone()));

        let facility = load_facility(Some(&path)).expect("loads");
        assert_eq!(facility.graph().places().collect::<Vec<_>>(), vec!["Only"]);
    }

    #[test]
    fn built_in_source_displays_label() {
        assert_eq!(FacilitySource::BuiltIn.to_string(), "built-in sample campus");
    }
}
