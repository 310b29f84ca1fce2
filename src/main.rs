//! Headball - a two-player arcade head-soccer match, run headless
//!
//! Simulates the built-in exhibition match and writes an event log.
//!
//! Usage:
//!   cargo run -- --ticks 3600
//!   cargo run -- --fps 120 --no-log --quiet

use headball::scenario::{ScenarioConfig, run_match};

fn main() {
    let config = ScenarioConfig::from_args();
    let report = run_match(&config);

    if !config.quiet {
        println!(
            "Simulated {} ticks ({:.1}s at {:.0} ticks/s)",
            report.ticks,
            report.ticks as f64 / config.fps,
            config.fps
        );
        println!("Score: {} : {}", report.score_left, report.score_right);
        println!("Scoreboard: {}", report.label);
        if let Some(session) = &report.session_id {
            println!("Event log session: {}", session);
        }
    }
}
