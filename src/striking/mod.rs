//! Striking module - shot resolution on player/ball contact

pub mod contact;
pub mod resolve;

pub use contact::strike_on_contact;
pub use resolve::resolve_strike;
