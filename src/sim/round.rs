//! Round engine: outcome recording, delayed transitions, session reset
//!
//! `resolve_round` is the single point where a round's outcome is recorded.
//! It is idempotent per round via the `round_finished` flag: a boundary miss
//! and a swing landing on the same tick record exactly one outcome, and the
//! score changes at most once. First writer wins.

use super::state::{Ball, GameEvent, GamePhase, GameState, Outcome};

/// Record the outcome for the current round and schedule the transition.
///
/// No-op if the round is already finished or the phase is not `Playing`.
pub fn resolve_round(state: &mut GameState, outcome: Outcome) {
    if state.round_finished || state.phase != GamePhase::Playing {
        return;
    }
    state.round_finished = true;
    state.score += outcome.reward(&state.tuning);
    state.outcomes.push(outcome);
    state.phase = GamePhase::RoundEnd;

    // Shorter delay before the game-over reveal on the final round
    let delay = if state.round >= state.tuning.total_rounds() {
        state.tuning.game_over_delay_ticks()
    } else {
        state.tuning.round_advance_delay_ticks()
    };
    state.pending_ticks = Some(delay);

    log::info!(
        "round {} finished: {} (score {})",
        state.round,
        outcome.message(),
        state.score
    );
    state.push_event(GameEvent::RoundFinished {
        round: state.round,
        outcome,
    });
}

/// Count down the pending transition while in `RoundEnd`; on expiry either
/// start the next round with a fresh ball or end the game.
pub fn advance_pending(state: &mut GameState) {
    if state.phase != GamePhase::RoundEnd {
        return;
    }
    let Some(remaining) = state.pending_ticks else {
        return;
    };
    if remaining > 1 {
        state.pending_ticks = Some(remaining - 1);
        return;
    }
    state.pending_ticks = None;

    if state.round >= state.tuning.total_rounds() {
        state.phase = GamePhase::GameOver;
        state.ball = None;
        log::info!("{}", state.clear_message());
        state.push_event(GameEvent::GameCleared {
            score: state.score,
            max_score: state.tuning.max_score(),
        });
    } else {
        state.round += 1;
        state.phase = GamePhase::Playing;
        spawn_ball(state);
    }
}

/// Start a new game. Accepted only in `Idle` or `GameOver`; the start
/// affordance is not shown elsewhere and the command is a no-op.
///
/// Any pending round transition is cancelled here explicitly so a stale
/// countdown can never resurrect a finished session.
pub fn start_game(state: &mut GameState) {
    match state.phase {
        GamePhase::Idle | GamePhase::GameOver => {}
        _ => return,
    }
    state.round = 1;
    state.score = 0;
    state.outcomes.clear();
    state.pending_ticks = None;
    state.bat.hitting_ticks = 0;
    state.phase = GamePhase::Playing;
    spawn_ball(state);

    log::info!("game started (seed {})", state.seed);
    state.push_event(GameEvent::GameStarted { seed: state.seed });
}

/// Spawn the current round's ball: random direction, round-indexed speed.
/// Resets the `round_finished` guard for the new round.
pub fn spawn_ball(state: &mut GameState) {
    let direction = state.rng.next_side();
    let speed = state.tuning.speed_for_round(state.round);
    state.ball = Some(Ball::spawn(direction, speed));
    state.round_finished = false;

    log::debug!(
        "round {} ball: direction {:?}, speed {}",
        state.round,
        direction,
        speed
    );
    state.push_event(GameEvent::RoundStarted { round: state.round });
}
