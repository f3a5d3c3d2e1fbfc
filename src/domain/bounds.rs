// Axis-aligned clamp rectangle for positions.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    /// Builds bounds, collapsing an inverted axis onto its minimum.
    ///
    /// A field narrower than the gun yields `max_x < min_x`; `f32::clamp` panics on that,
    /// so the range degenerates to a single legal value instead.
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x: max_x.max(min_x),
            min_y,
            max_y: max_y.max(min_y),
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }

    /// Restricts each axis to its `[min, max]` range.
    pub fn clamp(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x.clamp(self.min_x, self.max_x),
            y.clamp(self.min_y, self.max_y),
        )
    }

    /// Applies a delta to a position and clamps the result.
    pub fn clamp_moved(&self, x: f32, y: f32, dx: f32, dy: f32) -> (f32, f32) {
        self.clamp(x + dx, y + dy)
    }
}
