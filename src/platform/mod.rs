//! Rendering/windowing collaborator abstraction
//!
//! The core never talks to a concrete graphics or windowing library; it
//! drives a [`Backend`] that supplies the window, images, text surfaces,
//! input events, and the clock. Backends map physical keys onto the logical
//! [`Key`] set - anything unmapped is dropped before it reaches the core.

use glam::Vec2;
use thiserror::Error;

pub mod headless;

pub use headless::{DrawCall, HeadlessBackend};

/// Resource acquisition failures. All of these are fatal at startup;
/// nothing in the loop body can fail.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("failed to create {width}x{height} window: {reason}")]
    Window {
        width: u32,
        height: u32,
        reason: String,
    },
    #[error("failed to load asset {path:?}: {reason}")]
    AssetLoad { path: String, reason: String },
}

/// Logical keys the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Start / restart (space on a keyboard backend)
    Start,
    /// Quit request (escape on a keyboard backend)
    Quit,
}

/// Discrete events drained once per tick (edge-triggered: one event per
/// physical press, never repeated while held)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Window close request
    Quit,
    KeyDown(Key),
}

/// RGB color for text rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

pub const WHITE: Color = Color(255, 255, 255);

/// The external rendering/windowing/asset collaborator
///
/// Held-key state is level-triggered and sampled fresh each tick, in
/// contrast to the edge-triggered event queue.
pub trait Backend {
    /// Opaque handle to a loaded or rendered image
    type Image: Clone;

    /// Open the window. Called once, before any other method.
    fn create_window(&mut self, width: u32, height: u32, title: &str) -> Result<(), BackendError>;

    fn load_image(&mut self, path: &str) -> Result<Self::Image, BackendError>;

    fn scale_image(&mut self, image: Self::Image, width: f32, height: f32) -> Self::Image;

    /// Rasterize a line of text. Callers cache the result and re-render
    /// only when the text changes, never per frame.
    fn render_text(&mut self, text: &str, font_size: u32, color: Color) -> Self::Image;

    /// Pixel dimensions of an image, for centering math
    fn image_size(&self, image: &Self::Image) -> Vec2;

    /// Blit an image with its top-left corner at `pos`
    fn draw_image(&mut self, image: &Self::Image, pos: Vec2);

    /// Drain the event queue accumulated since the last call
    fn poll_events(&mut self) -> Vec<Event>;

    fn is_key_held(&self, key: Key) -> bool;

    /// Flip the composed frame to the screen
    fn present(&mut self);

    /// Monotonic wall-clock milliseconds
    fn now_millis(&self) -> u64;

    /// Block until the next tick boundary for `target_hz`. The only wait
    /// point in the loop.
    fn pace(&mut self, target_hz: u32);
}
