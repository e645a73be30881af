//! Batter Up headless demo
//!
//! Runs a full autoplay session in the terminal: a naive bot tracks the
//! ball's side and swings inside the home-run window. Useful for watching
//! the round flow end to end without a frontend.
//!
//! Usage: `batter-up [seed]` (defaults to a clock-derived seed).
//! Set `RUST_LOG=debug` for per-swing detail.

use std::time::{SystemTime, UNIX_EPOCH};

use batter_up::sim::{GameEvent, GamePhase, GameState, Side, TickInput, target_band_y, tick};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let mut state = GameState::new(seed);
    tick(
        &mut state,
        &TickInput {
            start: true,
            ..TickInput::default()
        },
    );

    let mut final_message = None;
    while state.phase != GamePhase::GameOver {
        let input = bot_input(&state);
        tick(&mut state, &input);
        for event in state.drain_events() {
            if let GameEvent::GameCleared { .. } = event {
                final_message = Some(state.clear_message());
            }
        }
    }

    if let Some(message) = final_message {
        println!("{message}");
    }
}

/// Match the ball's side and swing inside the home-run window
fn bot_input(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    let Some(ball) = state.ball else {
        return input;
    };
    if state.phase != GamePhase::Playing {
        return input;
    }

    if state.bat.side != ball.direction {
        match ball.direction {
            Side::Left => input.move_left = true,
            Side::Right => input.move_right = true,
        }
    }
    if (ball.pos.y - target_band_y()).abs() < state.tuning.homerun_distance {
        input.swing = true;
    }
    input
}
