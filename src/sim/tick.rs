//! Fixed timestep simulation tick
//!
//! The scheduler surface of the sim: production wiring calls [`tick`] once
//! per display refresh, tests call it directly. All delayed transitions are
//! tick countdowns inside the state, so there are no wall-clock timers to
//! leak across a reset.

use super::motion::advance_ball;
use super::round::{advance_pending, start_game};
use super::state::{GamePhase, GameState, Side};
use super::swing::swing;

/// Input commands accumulated for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move the bat to the left side
    pub move_left: bool,
    /// Move the bat to the right side
    pub move_right: bool,
    /// Attempt a hit
    pub swing: bool,
    /// Start a new game
    pub start: bool,
}

/// Advance the game state by one tick.
///
/// Command gating: `start` only in `Idle`/`GameOver`; move and swing only in
/// `Playing` with an unfinished round. Everything else is silently ignored.
/// A swing is processed before the motion update, so a swing landing on the
/// same tick as a boundary miss wins the round's single outcome slot.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;
    state.bat.hitting_ticks = state.bat.hitting_ticks.saturating_sub(1);

    if input.start {
        start_game(state);
    }

    match state.phase {
        GamePhase::Idle | GamePhase::GameOver => {}
        GamePhase::RoundEnd => advance_pending(state),
        GamePhase::Playing => {
            if input.move_left {
                state.bat.side = Side::Left;
            }
            if input.move_right {
                state.bat.side = Side::Right;
            }
            if input.swing {
                swing(state);
            }
            advance_ball(state);
        }
    }
}
