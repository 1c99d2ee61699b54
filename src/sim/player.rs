//! The player ball: movement, platform collision, and fall physics
//!
//! The update order is load-bearing: horizontal motion must fully settle
//! (including the platform-side pushback) before the resting test reads the
//! settled x to decide whether the ball sits on a platform this frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::platforms::Platform;
use super::state::GameEvent;
use super::tick::TickInput;
use crate::consts::*;

/// Which side of a platform the ball ran into during the horizontal move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SideHit {
    /// Ball crossed the platform's left edge; push it back out leftward
    Left,
    /// Ball crossed the platform's right edge; push it back out rightward
    Right,
}

/// The player ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Center of the ball
    pub pos: Vec2,
    pub vel: Vec2,
    /// Collision radius, fixed for the entity's lifetime
    pub radius: f32,
    /// True iff not resting on any platform this frame
    pub falling: bool,
    /// Falling state of the previous frame; drives the audio edge events
    pub was_falling: bool,
    /// Signed baseline fall contribution. Negative while the scroll carries
    /// resting platforms (and the ball pinned to them) upward.
    pub gravity: f32,
    /// Extra fall velocity applied only while airborne
    pub free_fall: f32,
    /// Scales per-frame horizontal acceleration; grows with difficulty
    pub acceleration_multiplier: f32,
    /// Scales the horizontal speed cap; grows with difficulty
    pub max_speed_multiplier: f32,
}

impl Player {
    /// Ball at the start position, screen-centered at `START_HEIGHT`
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(SCREEN_WIDTH / 2.0, START_HEIGHT),
            vel: Vec2::new(0.0, -GRAVITY),
            radius: PLAYER_RADIUS,
            falling: false,
            was_falling: false,
            gravity: -GRAVITY,
            free_fall: FREE_FALL,
            acceleration_multiplier: 1.0,
            max_speed_multiplier: 1.0,
        }
    }

    /// Restore all fields to session-start values (between runs, not frames)
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advance the ball one frame against the live platform field.
    ///
    /// Pushes a `FallStarted` event on the not-falling to falling transition
    /// and a `Landed` event on the reverse.
    pub fn update(
        &mut self,
        input: &TickInput,
        screen_width: f32,
        platforms: &[Platform],
        events: &mut Vec<GameEvent>,
    ) {
        let max = MAX_SPEED * self.max_speed_multiplier;
        if input.left {
            self.vel.x = (self.vel.x - ACCELERATION * self.acceleration_multiplier).max(-max);
        } else if input.right {
            self.vel.x = (self.vel.x + ACCELERATION * self.acceleration_multiplier).min(max);
        } else {
            self.vel.x *= FRICTION;
        }

        self.pos.x += self.vel.x;

        // Side classification reads the unclamped x; its dx correction lands
        // after the edge clamp so it is never overwritten by the reflect.
        let side_hit = self.side_collision(platforms);

        if self.pos.x - self.radius < 0.0 {
            self.pos.x = self.radius;
            self.vel.x = self.vel.x.abs();
        } else if self.pos.x + self.radius > screen_width {
            self.pos.x = screen_width - self.radius;
            self.vel.x = -self.vel.x.abs();
        }

        match side_hit {
            Some(SideHit::Right) => self.vel.x = self.vel.x.abs(),
            Some(SideHit::Left) => self.vel.x = -self.vel.x.abs(),
            None => {}
        }

        // Resting pins the ball to the platform top each frame; airborne adds
        // the free-fall term on top of the baseline.
        if self.rest_on_platform(platforms) {
            self.vel.y = self.gravity;
        } else {
            self.vel.y = self.gravity + self.free_fall;
        }
        // Integer-truncated displacement, kept for motion-feel fidelity
        self.pos.y += self.vel.y.trunc();

        if self.falling && !self.was_falling {
            events.push(GameEvent::FallStarted);
        } else if !self.falling && self.was_falling {
            events.push(GameEvent::Landed);
        }
        self.was_falling = self.falling;
    }

    /// Classify which platform side the ball's horizontal move crossed.
    ///
    /// The first platform that yields a classification wins; overlapping
    /// platforms that straddle neither edge keep scanning.
    fn side_collision(&self, platforms: &[Platform]) -> Option<SideHit> {
        for platform in platforms {
            let overlaps = self.pos.x + self.radius > platform.pos.x
                && self.pos.x - self.radius < platform.pos.x + platform.width
                && self.pos.y + self.radius > platform.pos.y
                && self.pos.y - self.radius < platform.pos.y + PLATFORM_HEIGHT;
            if !overlaps {
                continue;
            }
            let right_edge = platform.pos.x + platform.width;
            if self.pos.x - self.radius < right_edge && self.pos.x + self.radius > right_edge {
                return Some(SideHit::Right);
            }
            if self.pos.x + self.radius > platform.pos.x
                && self.pos.x - self.radius < platform.pos.x
            {
                return Some(SideHit::Left);
            }
        }
        None
    }

    /// Resting test: first platform whose top band holds the ball's bottom
    /// edge wins; the ball snaps exactly onto its top surface.
    fn rest_on_platform(&mut self, platforms: &[Platform]) -> bool {
        for platform in platforms {
            if self.pos.x + self.radius > platform.pos.x
                && self.pos.x - self.radius < platform.pos.x + platform.width
                && self.pos.y + self.radius >= platform.pos.y
                && self.pos.y + self.radius <= platform.pos.y + PLATFORM_HEIGHT
            {
                self.pos.y = platform.pos.y - self.radius;
                self.falling = false;
                return true;
            }
        }
        self.falling = true;
        false
    }

    /// True iff the ball left the screen: past the top (exclusive at
    /// `radius / 2`) or past the bottom.
    pub fn game_over(&self, screen_height: f32) -> bool {
        self.pos.y < self.radius / 2.0 || self.pos.y > screen_height
    }

    /// Absolute recompute from base constants; idempotent for a given
    /// difficulty value.
    pub fn apply_difficulty(&mut self, difficulty: f32) {
        self.gravity = -GRAVITY * difficulty;
        self.free_fall = FREE_FALL * difficulty;
        self.acceleration_multiplier = 1.0 + (difficulty - 1.0) * 0.1;
        self.max_speed_multiplier = 1.0 + (difficulty - 1.0) * 0.1;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
