//! Tunable constants for headball
//!
//! All gameplay values are defined here for easy tweaking.
//!
//! Positions are in screen space: origin at the top-left of the pitch,
//! +x to the right, +y downward. Upward impulses are therefore negative y.

use bevy::prelude::*;
use std::time::Duration;

// =============================================================================
// PITCH DIMENSIONS
// =============================================================================

pub const PITCH_WIDTH: f32 = 800.0;
pub const PITCH_HEIGHT: f32 = 600.0;

// =============================================================================
// SIZE CONSTANTS
// =============================================================================

pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 22.0);
pub const BALL_RADIUS: f32 = 8.0;
pub const GATE_SIZE: Vec2 = Vec2::new(40.0, 130.0);

// =============================================================================
// PHYSICS CONSTANTS
// =============================================================================

pub const GRAVITY: f32 = 300.0; // Applied downward (+y) to players and ball
pub const MOVE_SPEED: f32 = 200.0;
pub const JUMP_VELOCITY: f32 = -200.0;
pub const PLAYER_BOUNCE: f32 = 0.2; // Restitution against pitch bounds
pub const BALL_BOUNCE: f32 = 0.4;
pub const BOUNCE_REST_SPEED: f32 = 20.0; // Floor rebounds below this settle to zero

// =============================================================================
// STRIKE VELOCITY TABLE
// =============================================================================

// Directional strikes take the sign of (ball.x - attacker.x) on the x component.

pub const LOB_STRIKE: Vec2 = Vec2::new(0.0, -400.0);
pub const LOB_STRIKE_CHARGED: Vec2 = Vec2::new(0.0, -850.0);
pub const NEAR_STRIKE: Vec2 = Vec2::new(400.0, -500.0);
pub const NEAR_STRIKE_CHARGED: Vec2 = Vec2::new(800.0, -600.0);
pub const FAR_STRIKE: Vec2 = Vec2::new(400.0, -200.0);
pub const FAR_STRIKE_CHARGED: Vec2 = Vec2::new(800.0, -300.0);
pub const STRAIGHT_STRIKE: Vec2 = Vec2::new(400.0, 0.0);
pub const STRAIGHT_STRIKE_CHARGED: Vec2 = Vec2::new(800.0, 0.0);

pub const HEADER_LIFT: f32 = -700.0;
pub const HEADER_STEER: f32 = 300.0;
pub const HEADER_MAX_BALL_Y: f32 = 550.0; // Header only fires while ball.y is above this line

// =============================================================================
// SCORING
// =============================================================================

pub const GOAL_LINE_Y: f32 = 470.0; // Gate contact counts only strictly below this line
pub const WIN_SCORE: u32 = 7;
pub const CELEBRATION_DELAY: Duration = Duration::from_millis(2000);

// =============================================================================
// KICKOFF POSITIONS
// =============================================================================

pub const LEFT_PLAYER_KICKOFF: Vec2 = Vec2::new(100.0, 400.0);
pub const RIGHT_PLAYER_KICKOFF: Vec2 = Vec2::new(750.0, 400.0);
pub const BALL_KICKOFF: Vec2 = Vec2::new(400.0, 300.0);

// =============================================================================
// GATES
// =============================================================================

pub const LEFT_GATE_CENTER: Vec2 = Vec2::new(20.0, 535.0);
pub const RIGHT_GATE_CENTER: Vec2 = Vec2::new(780.0, 535.0);
