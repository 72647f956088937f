//! Workspace tooling package.
//!
//! Exists so the root manifest can carry the pre-commit hook configuration;
//! all code lives in `crates/`.
