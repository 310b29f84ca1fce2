//! Player module - components and movement physics

pub mod components;
pub mod physics;

pub use components::*;
pub use physics::*;
