//! Compact text format for match event serialization
//!
//! Format: `T:NNNNN|CODE|data...`
//! - T:NNNNN = timestamp in milliseconds (5 digits, wraps at 99999)
//! - CODE = event type code
//! - data = pipe-separated values specific to event type
//!
//! Examples:
//! ```text
//! T:00000|SE|7c9e6679-7425-40de-944b-e07fc1f90ae7|20260805_121500
//! T:00000|MS|3600
//! T:01450|ST|L|400.0,-500.0
//! T:02810|G|L|1|0
//! T:24930|W|L|7|0
//! T:26930|MR
//! T:60000|ME|0|3|60.0
//! ```

use super::types::GameEvent;

/// Format a velocity tuple
fn fmt_vel(vel: (f32, f32)) -> String {
    format!("{:.1},{:.1}", vel.0, vel.1)
}

/// Serialize a GameEvent to compact text format
pub fn serialize_event(time_ms: u32, event: &GameEvent) -> String {
    let ts = format!("T:{:05}", time_ms % 100000);
    let code = event.type_code();

    let data = match event {
        GameEvent::SessionStart {
            session_id,
            timestamp,
        } => {
            format!("{}|{}", session_id, timestamp)
        }
        GameEvent::MatchStart { ticks } => ticks.to_string(),
        GameEvent::Strike { side, velocity } => {
            format!("{}|{}", side.code(), fmt_vel(*velocity))
        }
        GameEvent::Goal {
            side,
            score_left,
            score_right,
        } => {
            format!("{}|{}|{}", side.code(), score_left, score_right)
        }
        GameEvent::MatchWon {
            side,
            score_left,
            score_right,
        } => {
            format!("{}|{}|{}", side.code(), score_left, score_right)
        }
        GameEvent::MatchRestart => String::new(),
        GameEvent::MatchEnd {
            score_left,
            score_right,
            duration,
        } => {
            format!("{}|{}|{:.1}", score_left, score_right, duration)
        }
    };

    if data.is_empty() {
        format!("{}|{}", ts, code)
    } else {
        format!("{}|{}|{}", ts, code, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerSide;

    #[test]
    fn goal_line_format() {
        let event = GameEvent::Goal {
            side: PlayerSide::Left,
            score_left: 1,
            score_right: 0,
        };
        assert_eq!(serialize_event(2810, &event), "T:02810|G|L|1|0");
    }

    #[test]
    fn strike_line_format() {
        let event = GameEvent::Strike {
            side: PlayerSide::Right,
            velocity: (-800.0, -600.0),
        };
        assert_eq!(serialize_event(1450, &event), "T:01450|ST|R|-800.0,-600.0");
    }

    #[test]
    fn restart_line_has_no_data() {
        assert_eq!(serialize_event(26930, &GameEvent::MatchRestart), "T:26930|MR");
    }

    #[test]
    fn timestamp_wraps_at_five_digits() {
        let event = GameEvent::MatchEnd {
            score_left: 0,
            score_right: 3,
            duration: 120.0,
        };
        assert_eq!(serialize_event(120_000, &event), "T:20000|ME|0|3|120.0");
    }
}
