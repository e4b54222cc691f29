// Compiled-in knobs. There is no CLI or config file; change these and rebuild.

/// Frame (and window) width in pixels.
pub const WIDTH: usize = 320;
/// Frame (and window) height in pixels.
pub const HEIGHT: usize = 240;

/// Noise texture dimensions.
pub const NOISE_WIDTH: usize = 512;
pub const NOISE_HEIGHT: usize = 512;

/// Distance from the frame center to the (exclusive) edge of the swirl window.
pub const REGION_HALF_EXTENT: usize = 30;

/// Angular twist added at radius `r` is `DISTORTION_STRENGTH / r`.
pub const DISTORTION_STRENGTH: f64 = 80.0;

/// Animation time added per presented frame.
pub const TIME_STEP: f64 = 0.01;

/// Smallest radius used in the twist division; keeps the center pixel finite.
pub const CENTER_EPSILON: f64 = 1e-6;

/// Seed for the noise texture, so the swirl looks the same on every run.
pub const NOISE_SEED: u64 = 0x5EED_0F_A5_7A71C;

pub const WINDOW_TITLE: &str = "Rust Noise";
pub const WINDOW_SCALE: minifb::Scale = minifb::Scale::X2;
pub const TARGET_FPS: usize = 60;

/// The size-dependent part of the effect, so tests and benches can shrink it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub noise_width: usize,
    pub noise_height: usize,
    pub region_half_extent: usize,
    pub strength: f64,
    pub center_epsilon: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            noise_width: NOISE_WIDTH,
            noise_height: NOISE_HEIGHT,
            region_half_extent: REGION_HALF_EXTENT,
            strength: DISTORTION_STRENGTH,
            center_epsilon: CENTER_EPSILON,
        }
    }
}
