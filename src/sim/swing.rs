//! Hit resolver
//!
//! Classifies a swing against the ball's travel direction and its vertical
//! distance from the target band center. A mismatched lateral side is an
//! unconditional strike regardless of timing; otherwise the distance picks
//! the outcome tier. Every accepted swing resolves the round.

use super::motion::target_band_y;
use super::round::resolve_round;
use super::state::{Ball, GamePhase, GameState, Outcome, Side};
use crate::consts::HITTING_TICKS;
use crate::tuning::Tuning;

/// Classify a swing. Pure: no state is touched.
pub fn classify_swing(side: Side, ball: &Ball, tuning: &Tuning) -> Outcome {
    if side != ball.direction {
        return Outcome::Strike;
    }
    let distance = (ball.pos.y - target_band_y()).abs();
    if distance < tuning.homerun_distance {
        Outcome::HomeRun
    } else if distance < tuning.foul_distance {
        Outcome::Foul
    } else {
        Outcome::Strike
    }
}

/// Process a swing command.
///
/// Accepted only while `Playing` with an unfinished round; otherwise ignored
/// silently. The transient swing pose shows for every accepted swing,
/// whatever the outcome.
pub fn swing(state: &mut GameState) {
    if state.phase != GamePhase::Playing || state.round_finished {
        return;
    }
    state.bat.hitting_ticks = HITTING_TICKS;

    let Some(ball) = state.ball else {
        return;
    };
    let outcome = classify_swing(state.bat.side, &ball, &state.tuning);
    log::debug!(
        "swing at y {} ({:?} vs ball {:?}): {}",
        ball.pos.y,
        state.bat.side,
        ball.direction,
        outcome.message()
    );
    resolve_round(state, outcome);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::round::start_game;
    use proptest::prelude::*;

    fn ball_at_distance(direction: Side, distance: f32) -> Ball {
        let mut ball = Ball::spawn(direction, 4.0);
        ball.pos.y = target_band_y() - distance;
        ball
    }

    #[test]
    fn test_distance_tiers() {
        let tuning = Tuning::default();
        let cases = [
            (0.0, Outcome::HomeRun),
            (10.0, Outcome::HomeRun),
            (29.0, Outcome::HomeRun),
            (30.0, Outcome::Foul),
            (79.0, Outcome::Foul),
            (80.0, Outcome::Strike),
            (200.0, Outcome::Strike),
        ];
        for (distance, expected) in cases {
            let ball = ball_at_distance(Side::Left, distance);
            assert_eq!(
                classify_swing(Side::Left, &ball, &tuning),
                expected,
                "distance {distance}"
            );
        }
    }

    #[test]
    fn test_lateral_mismatch_is_always_a_strike() {
        let tuning = Tuning::default();
        // Perfect timing on the wrong side scores nothing
        let ball = ball_at_distance(Side::Right, 0.0);
        assert_eq!(classify_swing(Side::Left, &ball, &tuning), Outcome::Strike);
    }

    #[test]
    fn test_distance_is_symmetric_around_the_band() {
        let tuning = Tuning::default();
        let above = ball_at_distance(Side::Left, 25.0);
        let below = ball_at_distance(Side::Left, -25.0);
        assert_eq!(classify_swing(Side::Left, &above, &tuning), Outcome::HomeRun);
        assert_eq!(classify_swing(Side::Left, &below, &tuning), Outcome::HomeRun);
    }

    #[test]
    fn test_swing_resolves_round_and_sets_pose() {
        let mut state = GameState::new(2);
        start_game(&mut state);
        let direction = state.ball.unwrap().direction;
        state.bat.side = direction;
        state.ball.as_mut().unwrap().pos.y = target_band_y() - 10.0;

        swing(&mut state);
        assert_eq!(state.phase, GamePhase::RoundEnd);
        assert_eq!(state.last_outcome(), Some(Outcome::HomeRun));
        assert_eq!(state.score, 20);
        assert!(state.bat.is_hitting());
    }

    #[test]
    fn test_swing_ignored_outside_playing() {
        let mut state = GameState::new(2);
        swing(&mut state);
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(!state.bat.is_hitting());
        assert!(state.outcomes.is_empty());
    }

    #[test]
    fn test_swing_ignored_after_round_finished() {
        let mut state = GameState::new(2);
        start_game(&mut state);
        state.bat.side = state.ball.unwrap().direction;
        state.ball.as_mut().unwrap().pos.y = target_band_y();

        swing(&mut state);
        let score = state.score;
        state.phase = GamePhase::Playing; // even if the phase were stale...
        swing(&mut state);
        assert_eq!(state.score, score); // ...the flag still blocks a rescore
        assert_eq!(state.outcomes.len(), 1);
    }

    proptest! {
        /// Matching-side outcome depends only on which distance band the
        /// swing lands in.
        #[test]
        fn prop_matching_side_tiers(distance in -700.0f32..700.0) {
            let tuning = Tuning::default();
            let ball = ball_at_distance(Side::Right, distance);
            let outcome = classify_swing(Side::Right, &ball, &tuning);
            let d = distance.abs();
            let expected = if d < tuning.homerun_distance {
                Outcome::HomeRun
            } else if d < tuning.foul_distance {
                Outcome::Foul
            } else {
                Outcome::Strike
            };
            prop_assert_eq!(outcome, expected);
        }

        /// Mismatched side is a strike at any distance.
        #[test]
        fn prop_mismatch_always_strikes(distance in -700.0f32..700.0) {
            let tuning = Tuning::default();
            let ball = ball_at_distance(Side::Left, distance);
            prop_assert_eq!(
                classify_swing(Side::Right, &ball, &tuning),
                Outcome::Strike
            );
        }
    }
}
