//! Rollaball entry point
//!
//! Runs a headless demo session: a virtual 60 Hz clock drives the simulation
//! while a trivial autopilot steers the ball toward the nearest platform
//! below it. Rendering, real input, and audio playback belong to out-of-tree
//! frontends; this binary exercises the full driver contract without them.

use rollaball::audio::CueRouter;
use rollaball::consts::*;
use rollaball::sim::{GamePhase, GameState, TickInput, tick};
use rollaball::{HighScores, Settings};

/// Cap the demo at ten minutes of virtual time
const MAX_DEMO_MS: u64 = 10 * 60 * 1000;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random);
    log::info!("rollaball demo starting (seed {seed})");

    let mut state = GameState::new(seed);
    let settings = Settings::default();
    let mut router = CueRouter::new();
    let mut scores = HighScores::new();

    let frame_ms = 1000 / TICKS_PER_SECOND as u64;
    let mut now_ms = 0u64;

    // Leave the start screen
    let start = TickInput {
        arrow_pressed: true,
        ..Default::default()
    };
    tick(&mut state, &start, now_ms);

    while state.phase == GamePhase::Playing && now_ms < MAX_DEMO_MS {
        now_ms += frame_ms;
        let input = autopilot(&state);
        tick(&mut state, &input, now_ms);

        for cue in router.route(&state.drain_events(), &settings) {
            log::debug!("cue: {cue:?}");
        }
    }

    let difficulty = state.difficulty;
    if let Some(rank) = scores.add_score(state.elapsed_seconds, difficulty, now_ms) {
        log::info!(
            "survived {}s at difficulty {difficulty} (rank {rank})",
            state.elapsed_seconds
        );
    }

    println!(
        "score: {}s  high score: {}s  difficulty reached: {difficulty}",
        state.elapsed_seconds, state.high_score
    );

    if std::env::args().any(|a| a == "--dump-state") {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("state snapshot failed: {err}"),
        }
    }
}

/// Steer toward the center of the nearest platform below the ball
fn autopilot(state: &GameState) -> TickInput {
    let player = &state.player;
    let target = state
        .field
        .platforms
        .iter()
        .filter(|p| p.pos.y >= player.pos.y + player.radius)
        .min_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|p| p.pos.x + p.width / 2.0);

    let mut input = TickInput::default();
    if let Some(target_x) = target {
        if target_x < player.pos.x - 4.0 {
            input.left = true;
        } else if target_x > player.pos.x + 4.0 {
            input.right = true;
        }
    }
    input
}
