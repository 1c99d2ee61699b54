//! Rollaball - a falling-ball arcade game
//!
//! A ball drops through a vertically scrolling field of platforms. The player
//! steers it left and right to land on platforms and stay on screen; drifting
//! past the top or bottom ends the run. Survival time is the score.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, platform field, session driver)
//! - `audio`: Game-event to sound-cue routing for the audio frontend
//! - `settings`: Mute/volume preferences
//! - `highscores`: Process-lifetime leaderboard

pub mod audio;
pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
///
/// The coordinate system follows the screen: x grows rightward, y grows
/// downward. Platforms carry a negative fall velocity, so they drift toward
/// the top of the screen, which reads as the camera climbing.
pub mod consts {
    /// Playfield width in world units
    pub const SCREEN_WIDTH: f32 = 400.0;
    /// Playfield height in world units
    pub const SCREEN_HEIGHT: f32 = 700.0;
    /// Ball start height, measured down from the top edge
    pub const START_HEIGHT: f32 = 200.0;

    /// Horizontal acceleration per frame while a direction is held
    pub const ACCELERATION: f32 = 0.85;
    /// Fraction of horizontal velocity kept per idle frame (exponential decay)
    pub const FRICTION: f32 = 0.15;
    /// Horizontal speed cap at difficulty 1
    pub const MAX_SPEED: f32 = 5.0;

    /// Baseline fall contribution; platforms drift upward at this rate
    pub const GRAVITY: f32 = 2.0;
    /// Extra fall velocity while airborne
    pub const FREE_FALL: f32 = 4.0;

    /// Ball collision radius
    pub const PLAYER_RADIUS: f32 = 20.0;

    /// Platform width
    pub const PLATFORM_WIDTH: f32 = 150.0;
    /// Platform height, fixed for every platform
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    /// Vertical gap between consecutive spawns at session start
    pub const BASE_PLATFORM_SPACING: f32 = 200.0;
    /// Spacing increase per difficulty step
    pub const SPACING_STEP: f32 = 10.0;
    /// Target live platform count
    pub const MAX_PLATFORMS: usize = 8;
    /// A platform is culled once its top edge is this far above the screen
    pub const CULL_MARGIN: f32 = 40.0;

    /// Difficulty increase per escalation
    pub const DIFFICULTY_STEP: f32 = 0.5;
    /// Real run time between difficulty escalations
    pub const DIFFICULTY_DELTA_MS: u64 = 10_000;

    /// Frame pacing contract for the driver loop
    pub const TICKS_PER_SECOND: u32 = 60;
}
