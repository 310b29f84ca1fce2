//! Headball - a two-player arcade head-soccer match built with Bevy
//!
//! This crate provides the match core (strike resolution, goal sensing, score
//! bookkeeping and object reset) plus a deterministic headless runner.

// Core modules
pub mod celebration;
pub mod constants;
pub mod events;
pub mod helpers;
pub mod scenario;

// Game logic modules
pub mod ball;
pub mod input;
pub mod player;
pub mod scoring;
pub mod striking;
pub mod world;

// Re-export commonly used types for convenience
pub use ball::{Ball, ball_gravity, integrate_ball};
pub use celebration::{Celebration, update_celebration};
pub use constants::*;
pub use events::{
    BusEvent, EventBus, EventLogConfig, EventLogger, GameEvent, log_events, serialize_event,
    update_event_bus_time,
};
pub use helpers::aabb_overlap;
pub use input::{Action, ControlState};
pub use player::{
    Grounded, Player, PlayerSide, Velocity, apply_controls, apply_gravity, integrate_players,
    manual_respawn,
};
pub use scenario::{Cue, HeadlessAppBuilder, InputScript, MatchReport, ScenarioConfig, run_match};
pub use scoring::{MatchEvent, MatchScore, Scoreboard, check_goals, goal_side};
pub use striking::{resolve_strike, strike_on_contact};
pub use world::{Gate, reset_objects, spawn_ball, spawn_gates, spawn_players};
