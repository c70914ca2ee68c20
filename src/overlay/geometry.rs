//! Screen-space geometry for control hit testing

/// Rectangular screen region in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge of the rectangle
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge of the rectangle
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if a point is inside this rectangle
    ///
    /// All four edges are inclusive: a point exactly on an edge counts
    /// as inside.
    pub fn contains(&self, pos: [f32; 2]) -> bool {
        pos[0] >= self.x && pos[0] <= self.right() && pos[1] >= self.y && pos[1] <= self.bottom()
    }

    /// Get the center point of the rectangle
    pub fn center(&self) -> [f32; 2] {
        [self.x + self.width / 2.0, self.y + self.height / 2.0]
    }

    /// Horizontal position of `x` as a fraction of the rectangle width
    ///
    /// Clamped to 0.0 left of the rectangle and 1.0 right of it, so the
    /// result is always in `[0.0, 1.0]` regardless of where the point is.
    pub fn x_fraction(&self, x: f32) -> f32 {
        if x < self.x {
            return 0.0;
        }
        if x > self.right() {
            return 1.0;
        }
        (x - self.x) / self.width
    }
}
