//! Game state and core simulation types
//!
//! The whole session lives in one [`GameState`] owned by the caller and
//! mutated only through the tick API, so state transitions are unit-testable
//! without a rendering environment.

use glam::Vec2;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No game in progress; no ball or bat shown
    Idle,
    /// Active round; the only phase accepting swing/move input and ball motion
    Playing,
    /// Round outcome finalized, waiting out the transition delay
    RoundEnd,
    /// Session over; only exit is an explicit start command
    GameOver,
}

/// Lateral side of the lane, for both bat position and ball travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Ball spawn x for this travel direction: quarter / three-quarter width
    pub fn spawn_x(self, field_width: f32) -> f32 {
        match self {
            Side::Left => field_width * 0.25,
            Side::Right => field_width * 0.75,
        }
    }
}

/// Outcome of a completed round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Strike,
    Foul,
    HomeRun,
}

impl Outcome {
    /// Score awarded for this outcome
    pub fn reward(self, tuning: &Tuning) -> u32 {
        match self {
            Outcome::Strike => 0,
            Outcome::Foul => tuning.foul_score,
            Outcome::HomeRun => tuning.homerun_score,
        }
    }

    /// Transient display message for this outcome
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Strike => "STRIKE!",
            Outcome::Foul => "FOUL!",
            Outcome::HomeRun => "HOMERUN!",
        }
    }
}

/// The descending ball. Re-created at the start of every round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Position in field space; y grows downward, 0 at the field top
    pub pos: Vec2,
    /// Travel direction, fixed for the life of the ball
    pub direction: Side,
    /// Descent per tick, from the round's speed level
    pub speed: f32,
    /// Advisory contact highlight, true near the target band. Not scored.
    pub highlight: bool,
}

impl Ball {
    /// Spawn a ball for the given direction just above the visible field
    pub fn spawn(direction: Side, speed: f32) -> Self {
        Self {
            pos: Vec2::new(direction.spawn_x(FIELD_WIDTH), -BALL_DIAMETER),
            direction,
            speed,
            highlight: false,
        }
    }
}

/// The player's bat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bat {
    /// Chosen lateral side
    pub side: Side,
    /// Ticks remaining on the transient swing pose (display only)
    pub hitting_ticks: u32,
}

impl Default for Bat {
    fn default() -> Self {
        Self {
            side: Side::Left,
            hitting_ticks: 0,
        }
    }
}

impl Bat {
    /// Whether the swing pose is currently shown
    pub fn is_hitting(&self) -> bool {
        self.hitting_ticks > 0
    }
}

/// Serializable deterministic RNG state
///
/// Each draw reseeds a `Pcg32` from the stored state and folds the generator
/// back into it, so a deserialized session continues the same sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    state: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Draw the next value and advance the stored state
    pub fn next_u32(&mut self) -> u32 {
        let mut rng = Pcg32::seed_from_u64(self.state);
        let value = rng.next_u32();
        self.state = rng.next_u64();
        value
    }

    /// Draw a uniformly random side
    pub fn next_side(&mut self) -> Side {
        if self.next_u32() & 1 == 0 {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Events emitted by the sim for the frontend to display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted { seed: u64 },
    RoundStarted { round: u32 },
    RoundFinished { round: u32, outcome: Outcome },
    GameCleared { score: u32, max_score: u32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// RNG state (ball direction draws)
    pub rng: RngState,
    /// Current phase
    pub phase: GamePhase,
    /// Current round, 1-indexed
    pub round: u32,
    /// Accumulated score
    pub score: u32,
    /// Guard: the current round's outcome has been recorded.
    /// Reset only when a new round's ball spawns.
    pub round_finished: bool,
    /// Ticks remaining until the pending round transition fires
    pub pending_ticks: Option<u32>,
    /// The active ball; absent in `Idle` and `GameOver`
    pub ball: Option<Ball>,
    /// The player's bat
    pub bat: Bat,
    /// Outcome history for the current session, one entry per finished round
    pub outcomes: Vec<Outcome>,
    /// Balance table
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Pending display events, drained by the frontend
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh session in `Idle` with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a fresh session in `Idle` with the given tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: RngState::new(seed),
            phase: GamePhase::Idle,
            round: 1,
            score: 0,
            round_finished: false,
            pending_ticks: None,
            ball: None,
            bat: Bat::default(),
            outcomes: Vec::new(),
            tuning,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Outcome of the most recently finished round
    pub fn last_outcome(&self) -> Option<Outcome> {
        self.outcomes.last().copied()
    }

    /// Final message shown in `GameOver`
    pub fn clear_message(&self) -> String {
        format!(
            "GAME CLEAR, total score: {} / {}",
            self.score,
            self.tuning.max_score()
        )
    }
}
