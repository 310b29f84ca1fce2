//! Ball flight physics systems

use bevy::prelude::*;

use crate::ball::components::Ball;
use crate::constants::*;
use crate::player::Velocity;

/// Apply gravity to the ball
pub fn ball_gravity(time: Res<Time>, mut balls: Query<&mut Velocity, With<Ball>>) {
    for mut velocity in &mut balls {
        velocity.0.y += GRAVITY * time.delta_secs();
    }
}

/// Integrate ball velocity and bounce off the pitch bounds.
///
/// Side and ceiling contacts reflect with BALL_BOUNCE; floor contacts settle
/// once the rebound would be negligible, letting the ball roll.
pub fn integrate_ball(
    time: Res<Time>,
    mut balls: Query<(&mut Transform, &mut Velocity, &Ball)>,
) {
    let dt = time.delta_secs();

    for (mut transform, mut velocity, ball) in &mut balls {
        transform.translation.x += velocity.0.x * dt;
        transform.translation.y += velocity.0.y * dt;

        let r = ball.radius;

        if transform.translation.x < r {
            transform.translation.x = r;
            velocity.0.x = -velocity.0.x * BALL_BOUNCE;
        } else if transform.translation.x > PITCH_WIDTH - r {
            transform.translation.x = PITCH_WIDTH - r;
            velocity.0.x = -velocity.0.x * BALL_BOUNCE;
        }

        if transform.translation.y < r {
            transform.translation.y = r;
            velocity.0.y = -velocity.0.y * BALL_BOUNCE;
        } else if transform.translation.y > PITCH_HEIGHT - r {
            transform.translation.y = PITCH_HEIGHT - r;
            if velocity.0.y > 0.0 {
                let rebound = velocity.0.y * BALL_BOUNCE;
                velocity.0.y = if rebound > BOUNCE_REST_SPEED {
                    -rebound
                } else {
                    0.0
                };
            }
        }
    }
}
