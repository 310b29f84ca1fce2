//! Ball-related components

use bevy::prelude::*;

use crate::constants::BALL_RADIUS;

/// The match ball. Velocity is mutated only by the strike system, the
/// object reset, and the flight physics.
#[derive(Component, Debug, Clone, Copy)]
pub struct Ball {
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            radius: BALL_RADIUS,
        }
    }
}

impl Ball {
    /// Bounding box used for overlap tests
    pub fn size(&self) -> Vec2 {
        Vec2::splat(self.radius * 2.0)
    }
}
