//! Scoring module - match score with a time-decaying bonus
//!
//! Every correct match is worth a fixed base plus a bonus that starts at 50
//! and loses one point per elapsed second, never dropping below the floor
//! of 10. The bonus is recomputed at the moment of each match, so later
//! matches in a slow round earn less than earlier ones.

use crate::types::{BASE_MATCH_SCORE, TIME_BONUS_FLOOR, TIME_BONUS_START};

/// Time bonus for a match at the given elapsed time.
pub fn time_bonus(elapsed_seconds: u32) -> u32 {
    TIME_BONUS_START
        .saturating_sub(elapsed_seconds)
        .max(TIME_BONUS_FLOOR)
}

/// Total points awarded for a correct match at the given elapsed time.
pub fn match_score(elapsed_seconds: u32) -> u32 {
    BASE_MATCH_SCORE + time_bonus(elapsed_seconds)
}

/// Format elapsed seconds as `m:ss` for the header and completion screen.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_score_at_start() {
        assert_eq!(match_score(0), 150);
    }

    #[test]
    fn test_match_score_decays_per_second() {
        assert_eq!(match_score(1), 149);
        assert_eq!(match_score(20), 130);
        assert_eq!(match_score(39), 111);
    }

    #[test]
    fn test_match_score_floor() {
        // The floor binds from 40 seconds onward.
        assert_eq!(match_score(40), 110);
        assert_eq!(match_score(45), 110);
        assert_eq!(match_score(60), 110);
        assert_eq!(match_score(u32::MAX), 110);
    }

    #[test]
    fn test_time_bonus_never_zero() {
        for s in [0, 10, 50, 100, 10_000] {
            assert!(time_bonus(s) >= 10);
        }
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(600), "10:00");
    }
}
