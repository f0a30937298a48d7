//! Scoring module - combo window, score and level progress
//!
//! Rules:
//! - A match within `combo_duration_ms` of the previous one raises the combo
//!   multiplier by 1; a later match (or the first of a session) resets it to 1.
//! - Each match awards `round(score_per_match * multiplier)`.
//! - A level is complete when the match counter reaches exactly
//!   `MATCHES_PER_LEVEL * level`; the check is an equality so it fires once.

use crate::types::{next_level, MATCHES_PER_LEVEL};

/// Points for one match at the given multiplier
pub fn match_points(score_per_match: u32, combo_multiplier: f32) -> u32 {
    (score_per_match as f32 * combo_multiplier).round() as u32
}

/// Matches needed to complete `level`
pub fn matches_to_complete(level: u8) -> u32 {
    MATCHES_PER_LEVEL * u32::from(level)
}

/// Text sent to the score display
pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

/// Outcome of registering one match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchAward {
    pub combo_multiplier: f32,
    pub points: u32,
    pub score: u32,
}

/// Per-session score state, reset only when a level (re)starts
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    level: u8,
    score: u32,
    combo_multiplier: f32,
    last_match_ms: Option<u64>,
    match_counter: u32,
}

impl Session {
    pub fn new(level: u8) -> Self {
        Self {
            level,
            score: 0,
            combo_multiplier: 1.0,
            last_match_ms: None,
            match_counter: 0,
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo_multiplier(&self) -> f32 {
        self.combo_multiplier
    }

    pub fn last_match_ms(&self) -> Option<u64> {
        self.last_match_ms
    }

    pub fn match_counter(&self) -> u32 {
        self.match_counter
    }

    /// Update combo and score for a match cleared at `now_ms`
    pub fn register_match(&mut self, now_ms: u64, combo_duration_ms: u64, score_per_match: u32) -> MatchAward {
        let in_window = self
            .last_match_ms
            .is_some_and(|last| now_ms.saturating_sub(last) <= combo_duration_ms);

        self.combo_multiplier = if in_window {
            self.combo_multiplier + 1.0
        } else {
            1.0
        };
        self.last_match_ms = Some(now_ms);

        let points = match_points(score_per_match, self.combo_multiplier);
        self.score = self.score.saturating_add(points);

        MatchAward {
            combo_multiplier: self.combo_multiplier,
            points,
            score: self.score,
        }
    }

    /// Count a completed match reaction; true iff this one completes the level
    pub fn record_match(&mut self) -> bool {
        self.match_counter = self.match_counter.saturating_add(1);
        self.match_counter == matches_to_complete(self.level)
    }

    /// Level the session advances to once complete
    pub fn next_level(&self) -> u8 {
        next_level(self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_points_rounding() {
        assert_eq!(match_points(10, 1.0), 10);
        assert_eq!(match_points(10, 3.0), 30);
        assert_eq!(match_points(5, 1.5), 8);
    }

    #[test]
    fn test_first_match_resets_multiplier() {
        let mut session = Session::new(1);
        let award = session.register_match(100, 5000, 10);
        assert_eq!(award.combo_multiplier, 1.0);
        assert_eq!(award.points, 10);
        assert_eq!(session.score(), 10);
    }

    #[test]
    fn test_combo_within_window() {
        let mut session = Session::new(1);
        session.register_match(0, 5000, 10);
        let second = session.register_match(5000, 5000, 10);
        let third = session.register_match(6000, 5000, 10);

        assert_eq!(second.combo_multiplier, 2.0);
        assert_eq!(third.combo_multiplier, 3.0);
        assert_eq!(session.score(), 10 + 20 + 30);
    }

    #[test]
    fn test_combo_expires() {
        let mut session = Session::new(1);
        session.register_match(0, 5000, 10);
        session.register_match(1000, 5000, 10);
        let late = session.register_match(6001, 5000, 10);

        assert_eq!(late.combo_multiplier, 1.0);
        assert_eq!(session.score(), 10 + 20 + 10);
    }

    #[test]
    fn test_score_series() {
        // 5N(N+1) after N in-window matches at 10 points.
        for n in 1..=8u32 {
            let mut session = Session::new(1);
            for i in 0..n {
                session.register_match(u64::from(i) * 100, 5000, 10);
            }
            assert_eq!(session.score(), 5 * n * (n + 1));
        }
    }

    #[test]
    fn test_level_completes_exactly_once() {
        let mut session = Session::new(2);
        let completions: Vec<bool> = (0..12).map(|_| session.record_match()).collect();

        assert_eq!(completions.iter().filter(|c| **c).count(), 1);
        assert!(completions[7]);
        assert_eq!(session.match_counter(), 12);
    }

    #[test]
    fn test_next_level_wraps() {
        assert_eq!(Session::new(3).next_level(), 4);
        assert_eq!(Session::new(5).next_level(), 1);
        assert_eq!(score_text(42), "Score: 42");
        assert_eq!(matches_to_complete(5), 20);
    }
}
