//! Ocean Chase - a shark-and-shrimp intercept arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, session state)
//! - `platform`: Rendering/windowing collaborator abstraction
//! - `renderer`: Per-state scene composition
//! - `app`: Fixed-rate loop driver

pub mod app;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use app::App;
pub use platform::{Backend, BackendError, Event, Key};

/// Game configuration constants
pub mod consts {
    /// Playfield / window width in pixels
    pub const WIDTH: f32 = 800.0;
    /// Playfield / window height in pixels
    pub const HEIGHT: f32 = 600.0;

    /// Fixed tick rate of the main loop
    pub const TICK_HZ: u32 = 30;

    /// Shark translation per tick on a held axis (px)
    pub const SHARK_SPEED: f32 = 8.0;
    /// Shrimp leftward drift per tick (px)
    pub const SHRIMP_SPEED: f32 = 10.0;

    /// Catches needed to end the session
    pub const WIN_SCORE: u32 = 5;

    /// Shark animation frame duration (ms), decoupled from the tick rate
    pub const FRAME_DURATION_MS: u64 = 250;
    /// Frames in the shark swim cycle
    pub const SHARK_FRAMES: usize = 2;

    /// Shrimp respawn keeps its vertical center this far from the
    /// top and bottom edges
    pub const SPAWN_MARGIN: f32 = 20.0;

    /// Sprite sizes (px); source images are scaled to these at load
    pub const SHARK_SIZE: (f32, f32) = (96.0, 48.0);
    pub const SHRIMP_SIZE: (f32, f32) = (48.0, 32.0);

    /// Top-left anchor of the score HUD text
    pub const SCORE_POS: (f32, f32) = (10.0, 10.0);
}
