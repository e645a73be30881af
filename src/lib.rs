//! Batter Up - a timing-based batting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, swing resolution, round state machine)
//! - `tuning`: Data-driven game balance
//!
//! The simulation is headless: rendering, input devices and layout belong to a
//! frontend that feeds [`sim::TickInput`] into [`sim::tick`] once per display
//! refresh and drains [`sim::GameEvent`]s for display.

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per display refresh)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Simulation tick rate in Hz
    pub const TICK_RATE: u32 = 60;

    /// Playing field dimensions (field-space units)
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ball diameter (spawn offset above the field top)
    pub const BALL_DIAMETER: f32 = 40.0;

    /// Target band center, measured up from the bottom of the field
    pub const TARGET_BAND_OFFSET: f32 = 120.0;

    /// Number of rounds per game
    pub const TOTAL_ROUNDS: u32 = 5;

    /// Transient "hitting" bat pose duration in ticks (~200 ms)
    pub const HITTING_TICKS: u32 = 12;
}

/// Convert a millisecond delay to whole simulation ticks
#[inline]
pub fn ms_to_ticks(ms: u32) -> u32 {
    (ms * consts::TICK_RATE).div_ceil(1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ms_to_ticks_round_delays() {
        assert_eq!(ms_to_ticks(1000), 60);
        assert_eq!(ms_to_ticks(800), 48);
    }
}
