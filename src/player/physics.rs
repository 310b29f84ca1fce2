//! Player movement physics systems

use bevy::prelude::*;

use crate::ball::Ball;
use crate::constants::*;
use crate::input::ControlState;
use crate::player::components::*;

/// Runs in FixedUpdate to turn held movement actions into velocity.
/// Each player reads only its own ControlState.
pub fn apply_controls(
    mut players: Query<(&ControlState, &mut Velocity, &Grounded), With<Player>>,
) {
    for (controls, mut velocity, grounded) in &mut players {
        if controls.move_left {
            velocity.0.x = -MOVE_SPEED;
        } else if controls.move_right {
            velocity.0.x = MOVE_SPEED;
        } else {
            velocity.0.x = 0.0;
        }

        if controls.jump && grounded.0 {
            velocity.0.y = JUMP_VELOCITY;
        }
    }
}

/// Apply gravity to airborne players
pub fn apply_gravity(
    time: Res<Time>,
    mut players: Query<(&mut Velocity, &Grounded), With<Player>>,
) {
    for (mut velocity, grounded) in &mut players {
        if !grounded.0 {
            velocity.0.y += GRAVITY * time.delta_secs();
        }
    }
}

/// Integrate player velocity and resolve pitch-bound collisions.
///
/// Players are clamped inside the pitch; floor contact rebounds with
/// PLAYER_BOUNCE and settles once the rebound would be negligible.
pub fn integrate_players(
    time: Res<Time>,
    mut players: Query<(&mut Transform, &mut Velocity, &mut Grounded), With<Player>>,
) {
    let dt = time.delta_secs();
    let half = PLAYER_SIZE / 2.0;
    let floor_y = PITCH_HEIGHT - half.y;

    for (mut transform, mut velocity, mut grounded) in &mut players {
        transform.translation.x += velocity.0.x * dt;
        transform.translation.y += velocity.0.y * dt;

        transform.translation.x = transform.translation.x.clamp(half.x, PITCH_WIDTH - half.x);

        if transform.translation.y < half.y {
            transform.translation.y = half.y;
            velocity.0.y = -velocity.0.y * PLAYER_BOUNCE;
        }

        if transform.translation.y >= floor_y {
            transform.translation.y = floor_y;
            if velocity.0.y > 0.0 {
                let rebound = velocity.0.y * PLAYER_BOUNCE;
                velocity.0.y = if rebound > BOUNCE_REST_SPEED {
                    -rebound
                } else {
                    0.0
                };
            }
            grounded.0 = true;
        } else {
            grounded.0 = false;
        }
    }
}

/// Manual respawn actions: `respawn_self` returns the holder to its own
/// kickoff spot, `respawn_ball` recentres the ball. Positions only,
/// velocities are left alone.
pub fn manual_respawn(
    mut players: Query<(&ControlState, &PlayerSide, &mut Transform), With<Player>>,
    mut balls: Query<&mut Transform, (With<Ball>, Without<Player>)>,
) {
    let mut recentre_ball = false;

    for (controls, side, mut transform) in &mut players {
        if controls.respawn_self {
            let at = side.kickoff();
            transform.translation.x = at.x;
            transform.translation.y = at.y;
        }
        if controls.respawn_ball {
            recentre_ball = true;
        }
    }

    if recentre_ball {
        for mut transform in &mut balls {
            transform.translation.x = BALL_KICKOFF.x;
            transform.translation.y = BALL_KICKOFF.y;
        }
    }
}
