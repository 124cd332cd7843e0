//! Session state and core simulation types
//!
//! Everything mutable during a play session lives in [`GameState`]; there
//! are no module-level globals. A session is deterministic under a fixed
//! seed and a fixed input script.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for start input
    Opening,
    /// Active play
    Playing,
    /// Session ended; start input begins a fresh session
    GameOver,
}

/// The playfield entities are confined to (and spawn relative to)
pub fn playfield() -> Rect {
    Rect::new(0.0, 0.0, WIDTH, HEIGHT)
}

/// Wall-clock-driven sprite frame cycler
///
/// Runs on its own ~4 Hz cadence, independent of the 30 Hz tick rate. Both
/// cadences are polled from the one loop and share the backend clock, so
/// this is just a last-fired-at timestamp, not a scheduler.
#[derive(Debug, Clone, Copy)]
pub struct SpriteAnim {
    /// Current frame index, wraps modulo `frame_count`
    pub frame: usize,
    frame_count: usize,
    last_change_ms: u64,
}

impl SpriteAnim {
    pub fn new(frame_count: usize, now_ms: u64) -> Self {
        Self {
            frame: 0,
            frame_count,
            last_change_ms: now_ms,
        }
    }

    /// Advance one frame if more than the frame duration has elapsed
    pub fn advance(&mut self, now_ms: u64) {
        if now_ms.saturating_sub(self.last_change_ms) > FRAME_DURATION_MS {
            self.frame = (self.frame + 1) % self.frame_count;
            self.last_change_ms = now_ms;
        }
    }

    /// Back to frame 0 with the cadence re-anchored at `now_ms`
    pub fn reset(&mut self, now_ms: u64) {
        self.frame = 0;
        self.last_change_ms = now_ms;
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Shrimp caught this session
    pub score: u32,
    /// Player-controlled shark
    pub shark: Rect,
    /// Autonomous shrimp, drifts left and wraps
    pub shrimp: Rect,
    /// Shark swim-cycle animation
    pub anim: SpriteAnim,
    rng: Pcg32,
}

impl GameState {
    /// New state in the Opening phase with entities at their home spots
    pub fn new(seed: u64, now_ms: u64) -> Self {
        let mut shrimp = Rect::new(0.0, 0.0, SHRIMP_SIZE.0, SHRIMP_SIZE.1);
        shrimp.set_left(WIDTH);
        shrimp.set_center_y(100.0);

        Self {
            seed,
            phase: GamePhase::Opening,
            score: 0,
            shark: Rect::from_center(
                Vec2::new(WIDTH / 2.0, HEIGHT / 2.0),
                Vec2::new(SHARK_SIZE.0, SHARK_SIZE.1),
            ),
            shrimp,
            anim: SpriteAnim::new(SHARK_FRAMES, now_ms),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Atomically (re)initialize the session and enter Playing: score to
    /// zero, shark centered, shrimp fully off the right edge, animation
    /// back to frame 0. Nothing persists from the previous session.
    pub fn start_session(&mut self, now_ms: u64) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.shark.set_center_x(WIDTH / 2.0);
        self.shark.set_center_y(HEIGHT / 2.0);
        self.shrimp.set_left(WIDTH);
        self.anim.reset(now_ms);
        log::info!("session started (seed {})", self.seed);
    }

    /// Put the shrimp back at the right edge at a random height, keeping
    /// its vertical center at least SPAWN_MARGIN from the top and bottom.
    pub fn respawn_shrimp(&mut self) {
        self.shrimp.set_left(WIDTH);
        let y = self.rng.random_range(SPAWN_MARGIN..=HEIGHT - SPAWN_MARGIN);
        self.shrimp.set_center_y(y);
    }
}
