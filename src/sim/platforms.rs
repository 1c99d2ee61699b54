//! Platform entities and the population manager
//!
//! Platforms drift toward the top of the screen at their own fall velocity,
//! get culled once fully past the top margin, and are replaced one per frame
//! from below so the field density stays at `MAX_PLATFORMS`. New platforms
//! spawn with a horizontal skew toward the screen edges to force lateral
//! movement.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A single platform. Height is fixed at `PLATFORM_HEIGHT` for all of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    /// Vertical drift per frame. Negative: toward the top of the screen.
    pub fall_velocity: f32,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, difficulty: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
            fall_velocity: -(GRAVITY * difficulty),
        }
    }

    /// Drift one frame
    pub fn step(&mut self) {
        self.pos.y += self.fall_velocity;
    }

    /// True once the platform has scrolled fully past the top margin
    pub fn out_of_bounds(&self) -> bool {
        self.pos.y + PLATFORM_HEIGHT < -CULL_MARGIN
    }

    /// Absolute recompute from the global gravity constant; idempotent for a
    /// given difficulty value.
    pub fn apply_difficulty(&mut self, difficulty: f32) {
        self.fall_velocity = -(GRAVITY * difficulty);
    }
}

/// The live platform population
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformField {
    pub platforms: Vec<Platform>,
}

/// Skewed spawn placement: 45% left quarter, 45% right quarter (shifted so
/// the platform stays on-screen), 10% the middle band.
fn spawn_x<R: Rng>(rng: &mut R) -> f32 {
    let quarter = SCREEN_WIDTH / 4.0;
    let draw: f32 = rng.random();
    if draw < 0.45 {
        rng.random_range(0.0..quarter)
    } else if draw < 0.90 {
        rng.random_range(3.0 * quarter - PLATFORM_WIDTH..SCREEN_WIDTH - PLATFORM_WIDTH)
    } else {
        rng.random_range(quarter..3.0 * quarter - PLATFORM_WIDTH)
    }
}

impl PlatformField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session-start population: one platform centered under the player's
    /// start position, then fill to `MAX_PLATFORMS` spaced `spacing` apart.
    pub fn populate<R: Rng>(&mut self, rng: &mut R, difficulty: f32, spacing: f32) {
        self.platforms.clear();
        self.platforms.push(Platform::new(
            SCREEN_WIDTH / 2.0 - PLATFORM_WIDTH / 2.0,
            START_HEIGHT + PLATFORM_HEIGHT,
            PLATFORM_WIDTH,
            difficulty,
        ));
        for i in 1..MAX_PLATFORMS {
            let y = START_HEIGHT + i as f32 * spacing + PLATFORM_HEIGHT;
            self.spawn(rng, y, difficulty);
        }
    }

    fn spawn<R: Rng>(&mut self, rng: &mut R, y: f32, difficulty: f32) {
        let x = spawn_x(rng);
        self.platforms
            .push(Platform::new(x, y, PLATFORM_WIDTH, difficulty));
    }

    /// One frame of field maintenance: drift every live platform, cull the
    /// ones past the top margin, then top up with at most one spawn below
    /// the current lowest platform. Returns the number culled.
    pub fn step<R: Rng>(&mut self, rng: &mut R, difficulty: f32, spacing: f32) -> usize {
        let before = self.platforms.len();
        self.platforms.retain_mut(|platform| {
            if platform.out_of_bounds() {
                false
            } else {
                platform.step();
                true
            }
        });
        let culled = before - self.platforms.len();

        // One spawn per frame keeps density constant; the next frame's check
        // tops up further if several were culled at once.
        if self.platforms.len() < MAX_PLATFORMS {
            if let Some(lowest) = self.lowest_y() {
                self.spawn(rng, lowest + spacing, difficulty);
            }
        }

        culled
    }

    /// Greatest y among live platforms (y grows downward, so this is the
    /// lowest platform on screen)
    pub fn lowest_y(&self) -> Option<f32> {
        self.platforms.iter().map(|p| p.pos.y).reduce(f32::max)
    }

    pub fn apply_difficulty(&mut self, difficulty: f32) {
        for platform in &mut self.platforms {
            platform.apply_difficulty(difficulty);
        }
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    #[test]
    fn test_initial_population_shape() {
        let mut field = PlatformField::new();
        field.populate(&mut rng(), 1.0, BASE_PLATFORM_SPACING);

        assert_eq!(field.len(), MAX_PLATFORMS);

        // First platform sits centered directly under the player start
        let first = &field.platforms[0];
        assert_eq!(first.pos.x, SCREEN_WIDTH / 2.0 - PLATFORM_WIDTH / 2.0);
        assert_eq!(first.pos.y, START_HEIGHT + PLATFORM_HEIGHT);

        // Each subsequent platform is spaced BASE_PLATFORM_SPACING below
        for (i, platform) in field.platforms.iter().enumerate() {
            let expected = START_HEIGHT + i as f32 * BASE_PLATFORM_SPACING + PLATFORM_HEIGHT;
            assert_eq!(platform.pos.y, expected);
        }
    }

    #[test]
    fn test_platform_drifts_upward() {
        let mut platform = Platform::new(100.0, 400.0, PLATFORM_WIDTH, 1.0);
        platform.step();
        assert_eq!(platform.pos.y, 400.0 - GRAVITY);
    }

    #[test]
    fn test_cull_threshold() {
        let platform = Platform::new(0.0, -CULL_MARGIN - PLATFORM_HEIGHT, PLATFORM_WIDTH, 1.0);
        assert!(!platform.out_of_bounds());
        let platform = Platform::new(
            0.0,
            -CULL_MARGIN - PLATFORM_HEIGHT - 0.01,
            PLATFORM_WIDTH,
            1.0,
        );
        assert!(platform.out_of_bounds());
    }

    #[test]
    fn test_cull_and_single_respawn() {
        let mut rng = rng();
        let mut field = PlatformField::new();
        field.populate(&mut rng, 1.0, BASE_PLATFORM_SPACING);

        // Push one platform past the top margin
        field.platforms[0].pos.y = -CULL_MARGIN - PLATFORM_HEIGHT - 1.0;
        let lowest_before = field.lowest_y().unwrap();

        let culled = field.step(&mut rng, 1.0, BASE_PLATFORM_SPACING);

        assert_eq!(culled, 1);
        assert_eq!(field.len(), MAX_PLATFORMS);
        // Replacement spawns spacing below the (stepped) lowest platform
        let expected_y = lowest_before - GRAVITY + BASE_PLATFORM_SPACING;
        assert_eq!(field.platforms.last().unwrap().pos.y, expected_y);
    }

    #[test]
    fn test_multiple_culls_respawn_one_per_frame() {
        let mut rng = rng();
        let mut field = PlatformField::new();
        field.populate(&mut rng, 1.0, BASE_PLATFORM_SPACING);

        field.platforms[0].pos.y = -CULL_MARGIN - PLATFORM_HEIGHT - 1.0;
        field.platforms[1].pos.y = -CULL_MARGIN - PLATFORM_HEIGHT - 1.0;

        let culled = field.step(&mut rng, 1.0, BASE_PLATFORM_SPACING);
        assert_eq!(culled, 2);
        assert_eq!(field.len(), MAX_PLATFORMS - 1);

        // Next frame tops up the remaining deficit
        field.step(&mut rng, 1.0, BASE_PLATFORM_SPACING);
        assert_eq!(field.len(), MAX_PLATFORMS);
    }

    #[test]
    fn test_apply_difficulty_is_absolute() {
        let mut platform = Platform::new(0.0, 0.0, PLATFORM_WIDTH, 1.0);
        platform.apply_difficulty(1.5);
        assert_eq!(platform.fall_velocity, -3.0);
        // Re-applying the same difficulty does not compound
        platform.apply_difficulty(1.5);
        assert_eq!(platform.fall_velocity, -3.0);
    }

    proptest! {
        #[test]
        fn prop_spawned_platforms_stay_on_screen(seed in proptest::num::u64::ANY) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let x = spawn_x(&mut rng);
            prop_assert!(x >= 0.0);
            prop_assert!(x + PLATFORM_WIDTH <= SCREEN_WIDTH);
        }
    }
}
