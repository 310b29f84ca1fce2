//! Shot resolver - maps one player's held actions plus ball geometry to a
//! ball velocity impulse.
//!
//! Rules are evaluated in a fixed order and a later applicable rule
//! overwrites the result of an earlier one (last-applicable-wins). Holding
//! `charge` selects the hard tier of whichever rule fires.

use bevy::prelude::*;

use crate::constants::*;
use crate::input::ControlState;

/// Resolve a strike for one attacker touching the ball.
///
/// Returns the new ball velocity, or `None` when no strike action is held
/// (the ball is left untouched). Directional rules take the sign of
/// `ball.x - attacker.x`; at equal x they contribute nothing, leaving any
/// earlier rule's result standing.
pub fn resolve_strike(
    controls: &ControlState,
    attacker_pos: Vec2,
    ball_pos: Vec2,
) -> Option<Vec2> {
    let mut impulse = None;

    if controls.lob {
        impulse = Some(if controls.charge {
            LOB_STRIKE_CHARGED
        } else {
            LOB_STRIKE
        });
    }

    let dx = ball_pos.x - attacker_pos.x;
    let dir = if dx > 0.0 {
        Some(1.0)
    } else if dx < 0.0 {
        Some(-1.0)
    } else {
        None
    };

    if controls.side_near
        && let Some(dir) = dir
    {
        let base = if controls.charge {
            NEAR_STRIKE_CHARGED
        } else {
            NEAR_STRIKE
        };
        impulse = Some(Vec2::new(base.x * dir, base.y));
    }

    if controls.side_far
        && let Some(dir) = dir
    {
        let base = if controls.charge {
            FAR_STRIKE_CHARGED
        } else {
            FAR_STRIKE
        };
        impulse = Some(Vec2::new(base.x * dir, base.y));
    }

    if controls.straight
        && let Some(dir) = dir
    {
        let base = if controls.charge {
            STRAIGHT_STRIKE_CHARGED
        } else {
            STRAIGHT_STRIKE
        };
        impulse = Some(Vec2::new(base.x * dir, base.y));
    }

    // Header is a second trigger on the jump key, gated on ball height. It is
    // checked even when the lob already fired and overwrites it when both hit
    // in the same tick.
    if controls.jump && ball_pos.y < HEADER_MAX_BALL_Y {
        let steer = if controls.move_left {
            -HEADER_STEER
        } else if controls.move_right {
            HEADER_STEER
        } else {
            0.0
        };
        impulse = Some(Vec2::new(steer, HEADER_LIFT));
    }

    impulse
}
