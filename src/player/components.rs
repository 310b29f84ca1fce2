//! Player-related components

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::*;

/// Marker for player entities
#[derive(Component)]
pub struct Player;

/// 2D velocity vector - shared by player and ball
#[derive(Component, Default, Debug, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec2);

/// Whether player is resting on the pitch floor
#[derive(Component, Default)]
pub struct Grounded(pub bool);

/// Which of the two competitors an entity belongs to.
///
/// Carried as a component on players and on each gate (the side it defends).
/// Everything that needs a side branches on this tag, never on a display
/// identifier.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSide {
    Left,
    Right,
}

impl PlayerSide {
    pub fn opponent(self) -> Self {
        match self {
            PlayerSide::Left => PlayerSide::Right,
            PlayerSide::Right => PlayerSide::Left,
        }
    }

    /// Kickoff position for this side's player
    pub fn kickoff(self) -> Vec2 {
        match self {
            PlayerSide::Left => LEFT_PLAYER_KICKOFF,
            PlayerSide::Right => RIGHT_PLAYER_KICKOFF,
        }
    }

    /// One-letter code for the compact event log
    pub fn code(self) -> &'static str {
        match self {
            PlayerSide::Left => "L",
            PlayerSide::Right => "R",
        }
    }
}

impl fmt::Display for PlayerSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerSide::Left => write!(f, "Left"),
            PlayerSide::Right => write!(f, "Right"),
        }
    }
}
