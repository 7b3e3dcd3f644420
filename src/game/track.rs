//! The rat's track between the trap (0.0) and the cheese (1.0), plus the
//! arena geometry used to place things along it.

use crate::game::guess::Outcome;

/// Number of 0.1 steps between trap and cheese.
const STEPS: u8 = 10;
const MIDPOINT: u8 = STEPS / 2;

/// Logical arena size. The renderer scales this to the terminal.
pub const ARENA_WIDTH: f64 = 1024.0;
pub const ARENA_HEIGHT: f64 = 300.0;
/// Height of the track line inside the arena.
pub const TRACK_Y: f64 = 150.0;
pub const TRAP_X: f64 = ARENA_WIDTH * 0.1;
pub const CHEESE_X: f64 = ARENA_WIDTH * 0.9;

/// Arena x coordinate for a track position.
pub fn x_at(position: f64) -> f64 {
    TRAP_X + (CHEESE_X - TRAP_X) * position.clamp(0.0, 1.0)
}

/// Position is held as a whole number of steps so that clamping and the
/// terminal checks are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatTrack {
    steps: u8,
}

impl Default for RatTrack {
    fn default() -> Self {
        Self { steps: MIDPOINT }
    }
}

impl RatTrack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn adjust(&mut self, outcome: Outcome) {
        self.steps = match outcome {
            Outcome::Correct => (self.steps + 1).min(STEPS),
            Outcome::Incorrect => self.steps.saturating_sub(1),
        };
    }

    /// Position in `[0.0, 1.0]`.
    pub fn position(&self) -> f64 {
        f64::from(self.steps) / f64::from(STEPS)
    }

    pub fn at_cheese(&self) -> bool {
        self.position() >= 1.0
    }

    pub fn at_trap(&self) -> bool {
        self.position() <= 0.0
    }

    pub fn reset(&mut self) {
        self.steps = MIDPOINT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_midpoint() {
        let track = RatTrack::new();
        assert_eq!(track.position(), 0.5);
        assert!(!track.at_cheese());
        assert!(!track.at_trap());
    }

    #[test]
    fn five_misses_reach_the_trap_exactly() {
        let mut track = RatTrack::new();
        for _ in 0..4 {
            track.adjust(Outcome::Incorrect);
            assert!(!track.at_trap());
        }
        track.adjust(Outcome::Incorrect);
        assert_eq!(track.position(), 0.0);
        assert!(track.at_trap());
    }

    #[test]
    fn five_hits_reach_the_cheese_exactly() {
        let mut track = RatTrack::new();
        for _ in 0..5 {
            track.adjust(Outcome::Correct);
        }
        assert_eq!(track.position(), 1.0);
        assert!(track.at_cheese());
    }

    #[test]
    fn position_is_clamped_on_every_adjustment() {
        let mut track = RatTrack::new();
        for _ in 0..20 {
            track.adjust(Outcome::Incorrect);
            assert!((0.0..=1.0).contains(&track.position()));
        }
        assert_eq!(track.position(), 0.0);
        for _ in 0..20 {
            track.adjust(Outcome::Correct);
            assert!((0.0..=1.0).contains(&track.position()));
        }
        assert_eq!(track.position(), 1.0);
    }

    #[test]
    fn single_step_is_a_tenth() {
        let mut track = RatTrack::new();
        track.adjust(Outcome::Incorrect);
        assert!((track.position() - 0.4).abs() < 1e-12);
        track.adjust(Outcome::Correct);
        track.adjust(Outcome::Correct);
        assert!((track.position() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn reset_returns_to_midpoint() {
        let mut track = RatTrack::new();
        track.adjust(Outcome::Correct);
        track.reset();
        assert_eq!(track, RatTrack::new());
    }

    #[test]
    fn x_at_maps_track_ends() {
        assert_eq!(x_at(0.0), TRAP_X);
        assert_eq!(x_at(1.0), CHEESE_X);
        assert_eq!(x_at(2.0), CHEESE_X);
    }
}
