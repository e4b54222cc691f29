// Per-frame pixel generation.
// Inside the central window each pixel looks up the noise texture through a
// polar twist that rotates with time; everywhere else it is fresh TV static.

use crate::config::RenderConfig;
use crate::noise::{NoiseField, wrap};
use crate::region::DistortionRegion;
use crate::types::FrameBuffer;
use rand::RngCore;

pub struct FrameRenderer<'a> {
    config: RenderConfig,
    region: DistortionRegion,
    noise: &'a NoiseField,
    // Float center; deliberately W / 2.0, not the integer center the region uses.
    center_x: f64,
    center_y: f64,
}

impl<'a> FrameRenderer<'a> {
    pub fn new(config: RenderConfig, noise: &'a NoiseField) -> Self {
        debug_assert_eq!(noise.width(), config.noise_width);
        debug_assert_eq!(noise.height(), config.noise_height);
        Self {
            region: DistortionRegion::centered(config.width, config.height, config.region_half_extent),
            center_x: config.width as f64 / 2.0,
            center_y: config.height as f64 / 2.0,
            config,
            noise,
        }
    }

    pub fn region(&self) -> &DistortionRegion {
        &self.region
    }

    /// Overwrite every pixel of `frame` for animation time `t`.
    /// `rng` supplies the background static; one draw per outside pixel, row by row.
    pub fn render<R: RngCore + ?Sized>(&self, frame: &mut FrameBuffer, t: f64, rng: &mut R) {
        debug_assert_eq!((frame.width, frame.height), (self.config.width, self.config.height));
        let width = frame.width;
        for (j, row) in frame.pixels.chunks_exact_mut(width).enumerate() {
            for (i, px) in row.iter_mut().enumerate() {
                *px = self.pixel(i, j, t, rng);
            }
        }
    }

    /// Color of a single pixel at time `t`.
    #[inline]
    pub fn pixel<R: RngCore + ?Sized>(&self, i: usize, j: usize, t: f64, rng: &mut R) -> u32 {
        if self.region.contains(i, j) {
            let (u, v) = self.distorted_index(i, j, t);
            self.noise.sample(u, v)
        } else {
            rng.next_u32()
        }
    }

    /// Noise texel that pixel (i, j) shows at time `t`, already wrapped.
    ///
    /// The twist is `strength / r`, so it grows without bound toward the center;
    /// `r` is clamped to `center_epsilon` first so the center pixel stays finite.
    pub fn distorted_index(&self, i: usize, j: usize, t: f64) -> (usize, usize) {
        let x = i as f64 - self.center_x;
        let y = j as f64 - self.center_y;
        let r = (x * x + y * y).sqrt().max(self.config.center_epsilon);
        let angle = y.atan2(x);
        let new_angle = angle + self.config.strength / r + t;

        let u = (self.center_x + r * new_angle.cos()).floor() as i64;
        let v = (self.center_y + r * new_angle.sin()).floor() as i64;
        (wrap(u, self.config.noise_width), wrap(v, self.config.noise_height))
    }
}
