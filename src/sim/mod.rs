//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! A frontend owns a [`GameState`], calls [`tick`] once per display refresh
//! with the accumulated [`TickInput`], and drains [`GameEvent`]s for display.

pub mod motion;
pub mod round;
pub mod state;
pub mod swing;
pub mod tick;

pub use motion::{advance_ball, target_band_y};
pub use round::{resolve_round, start_game};
pub use state::{Ball, Bat, GameEvent, GamePhase, GameState, Outcome, RngState, Side};
pub use swing::{classify_swing, swing};
pub use tick::{TickInput, tick};
