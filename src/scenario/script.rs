//! Scripted control feeds for headless matches
//!
//! A script is a list of tick-windowed control cues. Each Update the feed
//! overwrites every player's ControlState, standing in for the key-state
//! polling a frontend would do.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::input::ControlState;
use crate::player::{Player, PlayerSide};

/// One scripted control window for one player.
/// Active for ticks in `start_tick..end_tick`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cue {
    pub side: PlayerSide,
    pub start_tick: u64,
    pub end_tick: u64,
    pub controls: ControlState,
}

/// Per-tick control feed for both players
#[derive(Resource, Default, Debug, Clone, Serialize, Deserialize)]
pub struct InputScript {
    pub cues: Vec<Cue>,
    #[serde(skip)]
    pub tick: u64,
}

impl InputScript {
    /// Merge every cue active this tick for `side`.
    /// Held flags OR together, so overlapping cues compose.
    pub fn controls_for(&self, side: PlayerSide) -> ControlState {
        let mut merged = ControlState::default();
        for cue in &self.cues {
            if cue.side != side || self.tick < cue.start_tick || self.tick >= cue.end_tick {
                continue;
            }
            let held = &cue.controls;
            merged.move_left |= held.move_left;
            merged.move_right |= held.move_right;
            merged.jump |= held.jump;
            merged.lob |= held.lob;
            merged.side_near |= held.side_near;
            merged.side_far |= held.side_far;
            merged.straight |= held.straight;
            merged.charge |= held.charge;
            merged.respawn_self |= held.respawn_self;
            merged.respawn_ball |= held.respawn_ball;
        }
        merged
    }

    /// Built-in exhibition script.
    ///
    /// The left player walks at the ball holding a straight strike and keeps
    /// scoring into the right gate; the right player hops on the spot, whose
    /// headers never connect with the rolling ball thanks to the height gate.
    pub fn exhibition(ticks: u64) -> Self {
        Self {
            cues: vec![
                Cue {
                    side: PlayerSide::Left,
                    start_tick: 0,
                    end_tick: ticks,
                    controls: ControlState {
                        move_right: true,
                        straight: true,
                        ..Default::default()
                    },
                },
                Cue {
                    side: PlayerSide::Right,
                    start_tick: 0,
                    end_tick: ticks,
                    controls: ControlState {
                        jump: true,
                        ..Default::default()
                    },
                },
            ],
            tick: 0,
        }
    }
}

/// Refresh every player's ControlState from the script, then advance the tick
pub fn apply_script(
    mut script: ResMut<InputScript>,
    mut players: Query<(&PlayerSide, &mut ControlState), With<Player>>,
) {
    for (side, mut controls) in &mut players {
        *controls = script.controls_for(*side);
    }
    script.tick += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cues_only_apply_inside_their_window() {
        let mut script = InputScript {
            cues: vec![Cue {
                side: PlayerSide::Left,
                start_tick: 10,
                end_tick: 20,
                controls: ControlState {
                    lob: true,
                    ..Default::default()
                },
            }],
            tick: 0,
        };

        assert!(!script.controls_for(PlayerSide::Left).lob);

        script.tick = 10;
        assert!(script.controls_for(PlayerSide::Left).lob);
        assert!(!script.controls_for(PlayerSide::Right).lob);

        script.tick = 20;
        assert!(!script.controls_for(PlayerSide::Left).lob);
    }

    #[test]
    fn overlapping_cues_compose() {
        let script = InputScript {
            cues: vec![
                Cue {
                    side: PlayerSide::Right,
                    start_tick: 0,
                    end_tick: 100,
                    controls: ControlState {
                        side_near: true,
                        ..Default::default()
                    },
                },
                Cue {
                    side: PlayerSide::Right,
                    start_tick: 50,
                    end_tick: 100,
                    controls: ControlState {
                        charge: true,
                        ..Default::default()
                    },
                },
            ],
            tick: 60,
        };

        let controls = script.controls_for(PlayerSide::Right);
        assert!(controls.side_near);
        assert!(controls.charge);
    }
}
