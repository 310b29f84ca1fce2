//! Event type definitions for the match log

use serde::{Deserialize, Serialize};

use crate::player::PlayerSide;

/// All match events that can be logged
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    /// Session started (generated once per run)
    SessionStart {
        session_id: String, // UUID v4
        timestamp: String,
    },
    /// Match started
    MatchStart { ticks: u64 },
    /// Ball struck by a player
    Strike {
        side: PlayerSide,
        velocity: (f32, f32),
    },
    /// Goal confirmed and scored
    Goal {
        side: PlayerSide,
        score_left: u32,
        score_right: u32,
    },
    /// A side reached the win score
    MatchWon {
        side: PlayerSide,
        score_left: u32,
        score_right: u32,
    },
    /// Celebration window elapsed, score display back at kickoff form
    MatchRestart,
    /// Match ended
    MatchEnd {
        score_left: u32,
        score_right: u32,
        duration: f32,
    },
}

impl GameEvent {
    /// Get the event type code for compact serialization
    pub fn type_code(&self) -> &'static str {
        match self {
            GameEvent::SessionStart { .. } => "SE",
            GameEvent::MatchStart { .. } => "MS",
            GameEvent::Strike { .. } => "ST",
            GameEvent::Goal { .. } => "G",
            GameEvent::MatchWon { .. } => "W",
            GameEvent::MatchRestart => "MR",
            GameEvent::MatchEnd { .. } => "ME",
        }
    }
}
