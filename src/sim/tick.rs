//! Per-frame session driver
//!
//! Advances the whole game exactly one frame: player physics, terminal
//! check, platform field maintenance, difficulty escalation, and score.
//! The caller owns frame pacing (60 ticks per second) and supplies a
//! monotonic timestamp; the driver only ever compares differences.

use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input sampled for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left direction currently held
    pub left: bool,
    /// Right direction currently held
    pub right: bool,
    /// Edge-triggered any-arrow press; starts and restarts runs
    pub arrow_pressed: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) {
    match state.phase {
        GamePhase::Waiting => {
            if input.arrow_pressed {
                log::info!("run started (seed {})", state.seed);
                state.start_run(now_ms);
            }
        }
        GamePhase::GameOver => {
            if input.arrow_pressed {
                log::info!("restarting run");
                state.reset_run(now_ms);
            }
        }
        GamePhase::Playing => playing_tick(state, input, now_ms),
    }
}

fn playing_tick(state: &mut GameState, input: &TickInput, now_ms: u64) {
    state.player.update(
        input,
        SCREEN_WIDTH,
        &state.field.platforms,
        &mut state.events,
    );

    if state.player.game_over(SCREEN_HEIGHT) {
        state.events.push(GameEvent::Splat);
        state.high_score = state.high_score.max(state.elapsed_seconds);
        state.phase = GamePhase::GameOver;
        log::info!(
            "run over after {}s (high score {}s)",
            state.elapsed_seconds,
            state.high_score
        );
        return;
    }

    let culled = state
        .field
        .step(&mut state.rng, state.difficulty, state.platform_spacing);
    if culled > 0 {
        log::trace!("culled {culled} platform(s)");
    }

    // Escalation fires at most once per tick, measured from the previous
    // escalation rather than the run start.
    if now_ms.saturating_sub(state.last_escalation_ms) >= DIFFICULTY_DELTA_MS {
        state.difficulty += DIFFICULTY_STEP;
        state.platform_spacing += SPACING_STEP;
        state.player.apply_difficulty(state.difficulty);
        state.field.apply_difficulty(state.difficulty);
        state.last_escalation_ms = now_ms;
        log::info!("difficulty raised to {}", state.difficulty);
    }

    state.elapsed_seconds = ((now_ms - state.run_start_ms) / 1000) as u32;
    state.high_score = state.high_score.max(state.elapsed_seconds);
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: u64 = 1000 / TICKS_PER_SECOND as u64;

    fn arrow() -> TickInput {
        TickInput {
            arrow_pressed: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_waiting_holds_until_arrow_press() {
        let mut state = GameState::new(1);

        tick(&mut state, &TickInput::default(), 0);
        assert_eq!(state.phase, GamePhase::Waiting);

        tick(&mut state, &arrow(), 0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_escalation_fires_once_per_threshold() {
        let mut state = GameState::new(1);
        tick(&mut state, &arrow(), 0);

        // Just shy of the threshold: nothing happens
        tick(&mut state, &TickInput::default(), DIFFICULTY_DELTA_MS - 1);
        assert_eq!(state.difficulty, 1.0);

        // Crossing it (even overshooting) raises difficulty exactly once
        tick(&mut state, &TickInput::default(), DIFFICULTY_DELTA_MS + 40);
        assert_eq!(state.difficulty, 1.5);
        assert_eq!(
            state.platform_spacing,
            BASE_PLATFORM_SPACING + SPACING_STEP
        );
        assert_eq!(state.player.gravity, -GRAVITY * 1.5);
        assert_eq!(state.field.platforms[0].fall_velocity, -GRAVITY * 1.5);

        // The next frame does not fire again
        tick(
            &mut state,
            &TickInput::default(),
            DIFFICULTY_DELTA_MS + 40 + FRAME_MS,
        );
        assert_eq!(state.difficulty, 1.5);

        // Another full interval from the previous escalation does
        tick(
            &mut state,
            &TickInput::default(),
            2 * DIFFICULTY_DELTA_MS + 40,
        );
        assert_eq!(state.difficulty, 2.0);
    }

    #[test]
    fn test_score_tracks_elapsed_seconds() {
        let mut state = GameState::new(1);
        tick(&mut state, &arrow(), 2000);

        tick(&mut state, &TickInput::default(), 7500);
        assert_eq!(state.elapsed_seconds, 5);
        assert_eq!(state.high_score, 5);
    }

    #[test]
    fn test_game_over_emits_splat_and_keeps_score() {
        let mut state = GameState::new(1);
        tick(&mut state, &arrow(), 0);
        state.elapsed_seconds = 12;

        // Force the ball past the bottom of the screen
        state.player.pos.y = SCREEN_HEIGHT + 50.0;
        state.player.vel.y = 10.0;
        tick(&mut state, &TickInput::default(), FRAME_MS);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::Splat));
        assert_eq!(state.high_score, 12);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = GameState::new(1);
        tick(&mut state, &arrow(), 0);
        state.elapsed_seconds = 9;
        state.player.pos.y = SCREEN_HEIGHT + 50.0;
        tick(&mut state, &TickInput::default(), FRAME_MS);
        assert_eq!(state.phase, GamePhase::GameOver);

        tick(&mut state, &arrow(), 60_000);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.difficulty, 1.0);
        assert_eq!(state.elapsed_seconds, 0);
        assert_eq!(state.high_score, 9);
        assert_eq!(state.field.len(), MAX_PLATFORMS);
        assert_eq!(state.run_start_ms, 60_000);
    }

    #[test]
    fn test_determinism() {
        // Same seed and inputs must yield identical states
        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);

        let mut now = 0;
        tick(&mut a, &arrow(), now);
        tick(&mut b, &arrow(), now);

        for frame in 0..600u64 {
            now += FRAME_MS;
            let input = TickInput {
                left: frame % 7 < 3,
                right: frame % 11 < 4,
                ..Default::default()
            };
            tick(&mut a, &input, now);
            tick(&mut b, &input, now);
        }

        assert_eq!(a.phase, b.phase);
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.field.len(), b.field.len());
        for (pa, pb) in a.field.platforms.iter().zip(&b.field.platforms) {
            assert_eq!(pa.pos, pb.pos);
        }
    }
}
