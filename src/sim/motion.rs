//! Ball motion model
//!
//! The ball descends the lane by its round speed once per tick while the
//! phase is `Playing`. Leaving the visible field is a miss: the round is
//! resolved as a strike and motion stops with the ball where it left.

use super::round::resolve_round;
use super::state::{GamePhase, GameState, Outcome};
use crate::consts::{FIELD_HEIGHT, TARGET_BAND_OFFSET};

/// Vertical center of the target band, in field space (y grows downward)
#[inline]
pub fn target_band_y() -> f32 {
    FIELD_HEIGHT - TARGET_BAND_OFFSET
}

/// Advance the ball by one tick.
///
/// Gated on `Playing` with an unfinished round, so no stray motion happens
/// while paused on a round transition or after an outcome this tick.
pub fn advance_ball(state: &mut GameState) {
    if state.phase != GamePhase::Playing || state.round_finished {
        return;
    }
    let highlight_window = state.tuning.highlight_distance;
    let Some(ball) = state.ball.as_mut() else {
        return;
    };

    ball.pos.y += ball.speed;
    let out_of_bounds = ball.pos.y > FIELD_HEIGHT;
    // Advisory only; never lit once the ball is gone
    ball.highlight = !out_of_bounds && (ball.pos.y - target_band_y()).abs() < highlight_window;

    if out_of_bounds {
        log::debug!("round {} ball left the field at y {}", state.round, ball.pos.y);
        resolve_round(state, Outcome::Strike);
    }
}
