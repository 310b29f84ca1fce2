//! Pitch entities - gates, kickoff spawns and the object reset

use bevy::prelude::*;

use crate::ball::Ball;
use crate::constants::*;
use crate::input::ControlState;
use crate::player::{Grounded, Player, PlayerSide, Velocity};

/// Goal mouth on one side of the pitch.
/// A confirmed contact here scores for the opponent of `defends`.
#[derive(Component)]
pub struct Gate {
    pub defends: PlayerSide,
}

/// Spawn both players at their kickoff spots
pub fn spawn_players(commands: &mut Commands) {
    for side in [PlayerSide::Left, PlayerSide::Right] {
        let at = side.kickoff();
        commands.spawn((
            Player,
            side,
            Transform::from_xyz(at.x, at.y, 0.0),
            Velocity::default(),
            Grounded(false),
            ControlState::default(),
        ));
    }
}

/// Spawn the match ball at the kickoff spot
pub fn spawn_ball(commands: &mut Commands) {
    commands.spawn((
        Ball::default(),
        Transform::from_xyz(BALL_KICKOFF.x, BALL_KICKOFF.y, 0.0),
        Velocity::default(),
    ));
}

/// Spawn the two static gates, each defending the side it stands on
pub fn spawn_gates(commands: &mut Commands) {
    commands.spawn((
        Gate {
            defends: PlayerSide::Left,
        },
        Transform::from_xyz(LEFT_GATE_CENTER.x, LEFT_GATE_CENTER.y, 0.0),
    ));
    commands.spawn((
        Gate {
            defends: PlayerSide::Right,
        },
        Transform::from_xyz(RIGHT_GATE_CENTER.x, RIGHT_GATE_CENTER.y, 0.0),
    ));
}

fn place(transform: &mut Transform, velocity: &mut Velocity, at: Vec2) {
    transform.translation.x = at.x;
    transform.translation.y = at.y;
    velocity.0 = Vec2::ZERO;
}

/// Return ball and both players to their kickoff positions and zero all
/// velocities. Idempotent; mutates the existing entities in place.
pub fn reset_objects(
    players: &mut Query<(&PlayerSide, &mut Transform, &mut Velocity), (With<Player>, Without<Ball>)>,
    balls: &mut Query<(&mut Transform, &mut Velocity, &Ball), Without<Player>>,
) {
    for (side, mut transform, mut velocity) in players.iter_mut() {
        place(&mut transform, &mut velocity, side.kickoff());
    }
    for (mut transform, mut velocity, _) in balls.iter_mut() {
        place(&mut transform, &mut velocity, BALL_KICKOFF);
    }
}
