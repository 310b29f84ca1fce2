//! Ball module - component and flight physics

pub mod components;
pub mod physics;

pub use components::*;
pub use physics::*;
