//! Data-driven game balance
//!
//! Every gameplay number that is a balance decision rather than a structural
//! constant lives here, so a frontend can ship alternate difficulty tables as
//! JSON without touching the sim.

use serde::{Deserialize, Serialize};

use crate::ms_to_ticks;

/// Tuning table for a full game session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tuning {
    /// Ball descent per tick, indexed by `round - 1`. Strictly increasing:
    /// later rounds are faster and harder.
    pub speed_levels: Vec<f32>,

    /// Distance from the target band center scoring a home run (exclusive)
    pub homerun_distance: f32,
    /// Distance from the target band center scoring a foul (exclusive);
    /// anything at or beyond this is a strike
    pub foul_distance: f32,
    /// Advisory contact-highlight window around the target band center
    pub highlight_distance: f32,

    /// Score awarded for a home run
    pub homerun_score: u32,
    /// Score awarded for a foul
    pub foul_score: u32,

    /// Delay before the next round starts after a non-final round ends (ms)
    pub round_advance_delay_ms: u32,
    /// Delay before the game-over message is revealed after the final round (ms)
    pub game_over_delay_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            speed_levels: vec![4.0, 5.5, 7.0, 8.5, 10.0],
            homerun_distance: 30.0,
            foul_distance: 80.0,
            highlight_distance: 100.0,
            homerun_score: 20,
            foul_score: 10,
            round_advance_delay_ms: 1000,
            game_over_delay_ms: 800,
        }
    }
}

/// Validation failure for a tuning table
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// Speed table is empty or not strictly increasing
    SpeedTable(String),
    /// Distance thresholds are not ordered `homerun < foul`
    Thresholds(String),
    /// Tuning JSON failed to parse
    Parse(String),
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TuningError::SpeedTable(msg) => write!(f, "invalid speed table: {msg}"),
            TuningError::Thresholds(msg) => write!(f, "invalid thresholds: {msg}"),
            TuningError::Parse(msg) => write!(f, "tuning parse error: {msg}"),
        }
    }
}

impl std::error::Error for TuningError {}

impl Tuning {
    /// Parse and validate a tuning table from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check the invariants the sim relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.speed_levels.is_empty() {
            return Err(TuningError::SpeedTable("no speed levels".into()));
        }
        if !self
            .speed_levels
            .windows(2)
            .all(|pair| pair[1] > pair[0] && pair[0] > 0.0)
        {
            return Err(TuningError::SpeedTable(
                "speed levels must be positive and strictly increasing".into(),
            ));
        }
        if self.homerun_distance <= 0.0 || self.foul_distance <= self.homerun_distance {
            return Err(TuningError::Thresholds(format!(
                "need 0 < homerun ({}) < foul ({})",
                self.homerun_distance, self.foul_distance
            )));
        }
        Ok(())
    }

    /// Number of rounds in a game (one per speed level)
    pub fn total_rounds(&self) -> u32 {
        self.speed_levels.len() as u32
    }

    /// Ball speed for a 1-indexed round, clamped to the last level
    pub fn speed_for_round(&self, round: u32) -> f32 {
        let idx = (round.max(1) as usize - 1).min(self.speed_levels.len() - 1);
        self.speed_levels[idx]
    }

    /// Maximum attainable score, the denominator of the clear message
    pub fn max_score(&self) -> u32 {
        self.total_rounds() * self.homerun_score
    }

    /// Round-advance delay in ticks
    pub fn round_advance_delay_ticks(&self) -> u32 {
        ms_to_ticks(self.round_advance_delay_ms)
    }

    /// Game-over reveal delay in ticks
    pub fn game_over_delay_ticks(&self) -> u32 {
        ms_to_ticks(self.game_over_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TOTAL_ROUNDS;

    #[test]
    fn test_default_tuning_is_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.total_rounds(), TOTAL_ROUNDS);
        assert_eq!(tuning.max_score(), 100);
    }

    #[test]
    fn test_speed_strictly_increases_per_round() {
        let tuning = Tuning::default();
        for round in 1..tuning.total_rounds() {
            assert!(
                tuning.speed_for_round(round + 1) > tuning.speed_for_round(round),
                "round {} not slower than round {}",
                round,
                round + 1
            );
        }
    }

    #[test]
    fn test_rejects_non_increasing_speeds() {
        let tuning = Tuning {
            speed_levels: vec![4.0, 4.0, 7.0],
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::SpeedTable(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let tuning = Tuning {
            homerun_distance: 80.0,
            foul_distance: 30.0,
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::Thresholds(_))
        ));
    }

    #[test]
    fn test_from_json_round_trip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Tuning::from_json("not json"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_delay_ticks() {
        let tuning = Tuning::default();
        assert_eq!(tuning.round_advance_delay_ticks(), 60);
        assert_eq!(tuning.game_over_delay_ticks(), 48);
    }
}
