//! Game state and session bookkeeping
//!
//! Everything mutable lives in `GameState`: no ambient globals. The driver in
//! `tick` is the single mutator; frontends read the state to draw and drain
//! the event queue for audio.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::platforms::PlatformField;
use super::player::Player;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, waiting for an arrow press
    Waiting,
    /// Active run
    Playing,
    /// Run ended; an arrow press starts a fresh run
    GameOver,
}

/// Discrete triggers for the audio frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball left a platform this frame
    FallStarted,
    /// Ball came to rest on a platform this frame
    Landed,
    /// Ball left the screen; the run is over
    Splat,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn-placement RNG, advanced only by the platform field
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    pub field: PlatformField,
    /// Scalar >= 1 scaling gravity, free fall, responsiveness and spacing
    pub difficulty: f32,
    /// Vertical gap used for new spawns; grows with difficulty
    pub platform_spacing: f32,
    /// Timestamp of the current run's start
    pub run_start_ms: u64,
    /// Timestamp of the last difficulty escalation
    pub last_escalation_ms: u64,
    /// Whole seconds survived this run; doubles as the displayed score
    pub elapsed_seconds: u32,
    /// Best elapsed_seconds observed over the process lifetime
    pub high_score: u32,
    /// Events emitted this frame, drained by the frontend
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session on the start screen
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut field = PlatformField::new();
        field.populate(&mut rng, 1.0, BASE_PLATFORM_SPACING);

        Self {
            seed,
            rng,
            phase: GamePhase::Waiting,
            player: Player::new(),
            field,
            difficulty: 1.0,
            platform_spacing: BASE_PLATFORM_SPACING,
            run_start_ms: 0,
            last_escalation_ms: 0,
            elapsed_seconds: 0,
            high_score: 0,
            events: Vec::new(),
        }
    }

    /// Begin the run clock and switch to active play
    pub fn start_run(&mut self, now_ms: u64) {
        self.run_start_ms = now_ms;
        self.last_escalation_ms = now_ms;
        self.phase = GamePhase::Playing;
    }

    /// Full re-initialization between runs. `high_score` is the one field
    /// that survives.
    pub fn reset_run(&mut self, now_ms: u64) {
        self.difficulty = 1.0;
        self.platform_spacing = BASE_PLATFORM_SPACING;
        self.elapsed_seconds = 0;
        self.player.reset();
        self.field
            .populate(&mut self.rng, self.difficulty, self.platform_spacing);
        self.events.clear();
        self.start_run(now_ms);
    }

    /// Take this frame's events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
