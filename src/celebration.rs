//! Post-win celebration window
//!
//! While the window is open the winner label stays on the scoreboard; when it
//! elapses the display returns to the kickoff form and play carries on into
//! the next match. A goal scored while the window is open cancels the pending
//! display reset, so a stale write can never replace a fresher score.

use bevy::prelude::*;
use std::time::Duration;

use crate::constants::CELEBRATION_DELAY;
use crate::events::{EventBus, GameEvent};
use crate::scoring::Scoreboard;

/// Resource tracking the celebration window after a match is won
#[derive(Resource)]
pub struct Celebration {
    remaining: Duration,
    active: bool,
}

impl Default for Celebration {
    fn default() -> Self {
        Self {
            remaining: CELEBRATION_DELAY,
            active: false,
        }
    }
}

impl Celebration {
    /// Open the celebration window
    pub fn begin(&mut self) {
        self.remaining = CELEBRATION_DELAY;
        self.active = true;
    }

    /// Cancel the pending display reset. No-op when no window is open.
    pub fn cancel(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Tick the celebration window; restore the kickoff label when it elapses
pub fn update_celebration(
    time: Res<Time>,
    mut celebration: ResMut<Celebration>,
    mut scoreboard: ResMut<Scoreboard>,
    mut event_bus: ResMut<EventBus>,
) {
    if !celebration.active {
        return;
    }

    celebration.remaining = celebration.remaining.saturating_sub(time.delta());
    if celebration.remaining.is_zero() {
        celebration.active = false;
        scoreboard.label = Scoreboard::kickoff_label();
        event_bus.emit(GameEvent::MatchRestart);
        info!("Celebration over, next match up");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_opens_a_full_window() {
        let mut celebration = Celebration::default();
        assert!(!celebration.is_active());

        celebration.begin();
        assert!(celebration.is_active());
        assert_eq!(celebration.remaining, CELEBRATION_DELAY);
    }

    #[test]
    fn cancel_closes_the_window() {
        let mut celebration = Celebration::default();
        celebration.begin();
        celebration.cancel();
        assert!(!celebration.is_active());

        // Cancelling again stays a no-op
        celebration.cancel();
        assert!(!celebration.is_active());
    }

    #[test]
    fn begin_restarts_a_partially_elapsed_window() {
        let mut celebration = Celebration::default();
        celebration.begin();
        celebration.remaining = Duration::from_millis(500);

        celebration.begin();
        assert_eq!(celebration.remaining, CELEBRATION_DELAY);
    }
}
