//! Input module - per-player ControlState snapshot
//!
//! The input collaborator (scripted match runner, or a frontend feeding real
//! key state) refreshes each player's `ControlState` every tick. The strike
//! resolver and movement systems only ever read it.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Logical actions a player can hold during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
    Lob,
    SideNear,
    SideFar,
    Straight,
    Charge,
    RespawnSelf,
    RespawnBall,
}

/// Held-state of every logical action for one player this tick.
///
/// Physical key bindings are out of scope; whoever owns the input device maps
/// keys to these flags before the simulation tick runs.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub lob: bool,
    pub side_near: bool,
    pub side_far: bool,
    pub straight: bool,
    pub charge: bool,
    pub respawn_self: bool,
    pub respawn_ball: bool,
}

impl ControlState {
    /// Query a single action's held-state
    pub fn is_held(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left,
            Action::MoveRight => self.move_right,
            Action::Jump => self.jump,
            Action::Lob => self.lob,
            Action::SideNear => self.side_near,
            Action::SideFar => self.side_far,
            Action::Straight => self.straight,
            Action::Charge => self.charge,
            Action::RespawnSelf => self.respawn_self,
            Action::RespawnBall => self.respawn_ball,
        }
    }
}
