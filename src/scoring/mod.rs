//! Scoring module - goal sensing, match score and the score label

use bevy::prelude::*;

use crate::ball::Ball;
use crate::celebration::Celebration;
use crate::constants::*;
use crate::events::{EventBus, GameEvent};
use crate::helpers::aabb_overlap;
use crate::player::{Player, PlayerSide, Velocity};
use crate::world::{Gate, reset_objects};

/// Score resource tracking both sides of the match
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchScore {
    pub left: u32,
    pub right: u32,
}

/// Outcome of applying one confirmed goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent {
    GoalScored(PlayerSide),
    /// A side reached the win score; counters are already back at zero.
    /// The final tallies are captured here before the reset.
    MatchWon {
        winner: PlayerSide,
        final_left: u32,
        final_right: u32,
    },
}

impl MatchScore {
    /// Credit one goal to `side` and evaluate the win condition.
    /// Reaching the win score zeroes both counters immediately.
    pub fn apply_goal(&mut self, side: PlayerSide) -> MatchEvent {
        match side {
            PlayerSide::Left => self.left += 1,
            PlayerSide::Right => self.right += 1,
        }

        if self.left == WIN_SCORE || self.right == WIN_SCORE {
            let winner = if self.left == WIN_SCORE {
                PlayerSide::Left
            } else {
                PlayerSide::Right
            };
            let event = MatchEvent::MatchWon {
                winner,
                final_left: self.left,
                final_right: self.right,
            };
            self.left = 0;
            self.right = 0;
            event
        } else {
            MatchEvent::GoalScored(side)
        }
    }
}

/// The score label shown by the display collaborator
#[derive(Resource)]
pub struct Scoreboard {
    pub label: String,
}

impl Scoreboard {
    /// Neutral label shown at kickoff and after the celebration window
    pub fn kickoff_label() -> String {
        format!("{} vs {} 0 : 0", PlayerSide::Left, PlayerSide::Right)
    }

    /// Running-score label shown after a goal
    pub fn score_label(score: &MatchScore) -> String {
        format!(
            "{} vs {} {}:{}",
            PlayerSide::Left,
            PlayerSide::Right,
            score.left,
            score.right
        )
    }

    /// Winner label shown during the celebration window
    pub fn winner_label(winner: PlayerSide) -> String {
        format!("{} won!", winner)
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            label: Self::kickoff_label(),
        }
    }
}

/// Evaluate a ball/gate contact. A goal is confirmed only strictly below the
/// crossing line; the gate's defender concedes, crediting the opposite side.
pub fn goal_side(ball_y: f32, gate: &Gate) -> Option<PlayerSide> {
    (ball_y > GOAL_LINE_Y).then(|| gate.defends.opponent())
}

/// Detect ball/gate contact, confirm goals and drive the match state.
///
/// On a confirmed goal, in order: credit the scorer, return all objects to
/// kickoff, publish the new label. A winning goal swaps in the winner label
/// and opens the celebration window instead.
pub fn check_goals(
    mut score: ResMut<MatchScore>,
    mut scoreboard: ResMut<Scoreboard>,
    mut celebration: ResMut<Celebration>,
    mut event_bus: ResMut<EventBus>,
    mut balls: Query<(&mut Transform, &mut Velocity, &Ball), Without<Player>>,
    gates: Query<(&Transform, &Gate), (Without<Ball>, Without<Player>)>,
    mut players: Query<(&PlayerSide, &mut Transform, &mut Velocity), (With<Player>, Without<Ball>)>,
) {
    let mut confirmed = None;

    for (ball_transform, _, ball) in &balls {
        let ball_pos = ball_transform.translation.truncate();
        for (gate_transform, gate) in &gates {
            let gate_pos = gate_transform.translation.truncate();
            if !aabb_overlap(ball_pos, ball.size(), gate_pos, GATE_SIZE) {
                continue;
            }
            if let Some(side) = goal_side(ball_pos.y, gate) {
                confirmed = Some(side);
            }
        }
    }

    let Some(scorer) = confirmed else {
        return;
    };

    // A pending celebration reset must never clobber this goal's label.
    celebration.cancel();

    let event = score.apply_goal(scorer);
    reset_objects(&mut players, &mut balls);

    match event {
        MatchEvent::GoalScored(side) => {
            event_bus.emit(GameEvent::Goal {
                side,
                score_left: score.left,
                score_right: score.right,
            });
            scoreboard.label = Scoreboard::score_label(&score);
            info!("Goal for {}! {}:{}", side, score.left, score.right);
        }
        MatchEvent::MatchWon {
            winner,
            final_left,
            final_right,
        } => {
            event_bus.emit(GameEvent::Goal {
                side: scorer,
                score_left: final_left,
                score_right: final_right,
            });
            event_bus.emit(GameEvent::MatchWon {
                side: winner,
                score_left: final_left,
                score_right: final_right,
            });
            scoreboard.label = Scoreboard::winner_label(winner);
            celebration.begin();
            info!("{} won the match {}:{}", winner, final_left, final_right);
        }
    }
}
