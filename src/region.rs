// The square window in the middle of the frame where the swirl happens.
// Bounds are exclusive on every side: a 60-wide span yields 59 inside pixels.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistortionRegion {
    x_min: i64, // exclusive
    x_max: i64, // exclusive
    y_min: i64, // exclusive
    y_max: i64, // exclusive
}

impl DistortionRegion {
    /// Square of `half_extent` around the integer center `(width / 2, height / 2)`.
    pub fn centered(width: usize, height: usize, half_extent: usize) -> Self {
        let (cx, cy) = ((width / 2) as i64, (height / 2) as i64);
        let h = half_extent as i64;
        Self { x_min: cx - h, x_max: cx + h, y_min: cy - h, y_max: cy + h }
    }

    #[inline]
    pub fn contains(&self, i: usize, j: usize) -> bool {
        let (i, j) = (i as i64, j as i64);
        i > self.x_min && i < self.x_max && j > self.y_min && j < self.y_max
    }

    /// Number of pixels inside, clipped to a `width x height` frame.
    pub fn area_within(&self, width: usize, height: usize) -> usize {
        let span = |lo: i64, hi: i64, len: usize| {
            let first = (lo + 1).max(0);
            let last = (hi - 1).min(len as i64 - 1);
            (last - first + 1).max(0) as usize
        };
        span(self.x_min, self.x_max, width) * span(self.y_min, self.y_max, height)
    }
}
