//! Player/ball contact handling

use bevy::prelude::*;

use crate::ball::Ball;
use crate::constants::PLAYER_SIZE;
use crate::events::{EventBus, GameEvent};
use crate::helpers::aabb_overlap;
use crate::input::ControlState;
use crate::player::{Player, PlayerSide, Velocity};
use crate::striking::resolve::resolve_strike;

/// Resolve strikes for every player touching the ball this tick.
///
/// The resolver is called once per contacting player and sees only that
/// player's own ControlState. When it produces an impulse the ball velocity
/// is overwritten and a Strike event is emitted.
pub fn strike_on_contact(
    mut event_bus: ResMut<EventBus>,
    players: Query<(&Transform, &ControlState, &PlayerSide), With<Player>>,
    mut balls: Query<(&Transform, &mut Velocity, &Ball), Without<Player>>,
) {
    for (ball_transform, mut ball_velocity, ball) in &mut balls {
        let ball_pos = ball_transform.translation.truncate();

        for (player_transform, controls, side) in &players {
            let player_pos = player_transform.translation.truncate();

            if !aabb_overlap(ball_pos, ball.size(), player_pos, PLAYER_SIZE) {
                continue;
            }

            if let Some(velocity) = resolve_strike(controls, player_pos, ball_pos) {
                ball_velocity.0 = velocity;
                event_bus.emit(GameEvent::Strike {
                    side: *side,
                    velocity: (velocity.x, velocity.y),
                });
                info!("Strike by {}: ({:.0}, {:.0})", side, velocity.x, velocity.y);
            }
        }
    }
}
