//! Headless match scenarios
//!
//! Scripted control feeds plus a deterministic fixed-step runner. Used by the
//! exhibition binary and the end-to-end tests.

pub mod config;
pub mod runner;
pub mod script;

#[cfg(test)]
mod match_test;

pub use config::ScenarioConfig;
pub use runner::{HeadlessAppBuilder, MatchReport, run_match};
pub use script::{Cue, InputScript, apply_script};
