//! Deterministic headless backend
//!
//! Replays a per-tick input script against a simulated clock and records
//! every draw call, so tests (and the demo binary) can run full sessions
//! with no window system. An exhausted script reports a quit event, which
//! guarantees scripted runs terminate.

use std::collections::VecDeque;

use glam::Vec2;

use super::{Backend, BackendError, Color, Event, Key};

/// Image handle: a label (asset path or rendered text) plus dimensions
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub label: String,
    pub size: Vec2,
}

/// One recorded `draw_image` call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub label: String,
    pub pos: Vec2,
}

/// Input for one scripted tick
#[derive(Debug, Clone, Default)]
struct TickScript {
    events: Vec<Event>,
    held: Vec<Key>,
}

#[derive(Debug, Default)]
pub struct HeadlessBackend {
    script: VecDeque<TickScript>,
    current_held: Vec<Key>,
    now_ms: u64,
    /// Asset paths that should fail to load
    missing: Vec<String>,
    /// Draw calls for the frame being composed
    pending: Vec<DrawCall>,
    /// Completed frames, one entry per `present`
    pub frames: Vec<Vec<DrawCall>>,
    /// Total `render_text` calls, for asserting the text cache works
    pub text_renders: u32,
    pub window_title: Option<String>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the input for the next scripted tick
    pub fn push_tick(&mut self, events: Vec<Event>, held: Vec<Key>) {
        self.script.push_back(TickScript { events, held });
    }

    /// Queue `n` ticks with the same held keys and no events
    pub fn push_held_ticks(&mut self, n: u32, held: Vec<Key>) {
        for _ in 0..n {
            self.push_tick(Vec::new(), held.clone());
        }
    }

    /// Make a subsequent `load_image` for this path fail
    pub fn set_missing(&mut self, path: &str) {
        self.missing.push(path.to_string());
    }

    /// The most recently presented frame
    pub fn last_frame(&self) -> &[DrawCall] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Backend for HeadlessBackend {
    type Image = Image;

    fn create_window(&mut self, _width: u32, _height: u32, title: &str) -> Result<(), BackendError> {
        self.window_title = Some(title.to_string());
        Ok(())
    }

    fn load_image(&mut self, path: &str) -> Result<Self::Image, BackendError> {
        if self.missing.iter().any(|p| p == path) {
            return Err(BackendError::AssetLoad {
                path: path.to_string(),
                reason: "no such file".to_string(),
            });
        }
        Ok(Image {
            label: path.to_string(),
            // Placeholder size; gameplay-relevant sprites get scaled anyway
            size: Vec2::new(64.0, 64.0),
        })
    }

    fn scale_image(&mut self, image: Self::Image, width: f32, height: f32) -> Self::Image {
        Image {
            label: image.label,
            size: Vec2::new(width, height),
        }
    }

    fn render_text(&mut self, text: &str, font_size: u32, _color: Color) -> Self::Image {
        self.text_renders += 1;
        Image {
            label: format!("text:{text}"),
            // Rough glyph box so centered placement is exercised
            size: Vec2::new(text.len() as f32 * font_size as f32 * 0.5, font_size as f32),
        }
    }

    fn image_size(&self, image: &Self::Image) -> Vec2 {
        image.size
    }

    fn draw_image(&mut self, image: &Self::Image, pos: Vec2) {
        self.pending.push(DrawCall {
            label: image.label.clone(),
            pos,
        });
    }

    fn poll_events(&mut self) -> Vec<Event> {
        match self.script.pop_front() {
            Some(tick) => {
                self.current_held = tick.held;
                tick.events
            }
            None => {
                self.current_held.clear();
                vec![Event::Quit]
            }
        }
    }

    fn is_key_held(&self, key: Key) -> bool {
        self.current_held.contains(&key)
    }

    fn present(&mut self) {
        self.frames.push(std::mem::take(&mut self.pending));
    }

    fn now_millis(&self) -> u64 {
        self.now_ms
    }

    fn pace(&mut self, target_hz: u32) {
        self.now_ms += u64::from(1000 / target_hz);
    }
}
