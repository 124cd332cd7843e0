//! Axis-aligned rectangle geometry
//!
//! Screen coordinates: y grows downward, so `top` is `pos.y` and `bottom`
//! is `pos.y + size.y`. Intersection uses exclusive bounds: rectangles that
//! merely touch along an edge do not overlap.

use glam::Vec2;

/// An axis-aligned rectangle, addressed by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (non-negative)
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Build a rect of the given size centered on a point
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Move the rect so its left edge sits at `x`
    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x;
    }

    /// Move the rect so its horizontal center sits at `x`
    pub fn set_center_x(&mut self, x: f32) {
        self.pos.x = x - self.size.x / 2.0;
    }

    /// Move the rect so its vertical center sits at `y`
    pub fn set_center_y(&mut self, y: f32) {
        self.pos.y = y - self.size.y / 2.0;
    }

    /// Exclusive-bound overlap test: true iff both axis projections
    /// strictly overlap. Touching edges count as no intersection.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Translate the rect the minimum distance needed to sit fully inside
    /// `bounds`. Assumes the rect fits (bounds at least as large).
    pub fn clamp_within(&mut self, bounds: &Rect) {
        self.pos.x = self
            .pos
            .x
            .clamp(bounds.left(), bounds.right() - self.size.x);
        self.pos.y = self
            .pos
            .y
            .clamp(bounds.top(), bounds.bottom() - self.size.y);
    }

    /// True if the rect lies fully inside `bounds` (shared edges allowed)
    pub fn contained_in(&self, bounds: &Rect) -> bool {
        self.left() >= bounds.left()
            && self.right() <= bounds.right()
            && self.top() >= bounds.top()
            && self.bottom() <= bounds.bottom()
    }
}
