// What you SEE:
// • A 60x60 window in the middle of the screen where a fixed noise texture
//   swirls around the center, faster the closer it gets.
// • Everything else is fresh TV static every frame.
// • Close the window or press ESC to quit.

use polar_noise::app;
use polar_noise::clock::AnimationClock;
use polar_noise::config::{NOISE_SEED, RenderConfig, TIME_STEP, WINDOW_TITLE};
use polar_noise::draw::Drawer;
use polar_noise::error::Error;
use polar_noise::noise::NoiseField;
use polar_noise::renderer::FrameRenderer;
use polar_noise::types::FrameBuffer;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{error, info};

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().init();

    let config = RenderConfig::default();
    info!(
        width = config.width,
        height = config.height,
        noise_width = config.noise_width,
        noise_height = config.noise_height,
        seed = NOISE_SEED,
        "starting"
    );

    /* --- Noise texture ---
       Visual: what you see inside the swirl; same pattern every run. */
    let noise = NoiseField::new(
        config.noise_width,
        config.noise_height,
        &mut SmallRng::seed_from_u64(NOISE_SEED),
    );
    let renderer = FrameRenderer::new(config, &noise);
    info!(
        swirl_pixels = renderer.region().area_within(config.width, config.height),
        "noise texture ready"
    );

    /* --- Static source ---
       Visual: the snow around the swirl; different every run. */
    let mut static_rng = SmallRng::from_entropy();

    /* --- Reusable screen buffer --- */
    let mut screen = FrameBuffer::new(config.width, config.height);
    let mut clock = AnimationClock::new(TIME_STEP);

    let drawer = Drawer::open(WINDOW_TITLE, config.width, config.height).inspect_err(|e| {
        error!("{e}");
    })?;

    app::run(drawer, &renderer, &mut screen, &mut clock, &mut static_rng).inspect_err(|e| {
        error!("{e}");
    })
}
