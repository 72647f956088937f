//! Wayfinder CLI library.
//!
//! Command handlers, output formatting and terminal styling for the
//! `wayfinder-cli` binary. The binary itself only parses arguments and
//! dispatches into [`commands`].

pub mod commands;
pub mod output;
pub mod terminal;
