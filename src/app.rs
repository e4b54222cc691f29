// The host loop: pump the window, advance time, render, present. Repeat.

use crate::clock::{AnimationClock, FpsMeter};
use crate::error::Error;
use crate::renderer::FrameRenderer;
use crate::types::FrameBuffer;
use rand::RngCore;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// What the loop needs from a window. `Drawer` is the real one.
pub trait Display {
    /// Handle pending input. False once the user wants out.
    fn pump(&mut self) -> bool;

    /// Show `frame` on screen.
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error>;

    /// Release the window.
    fn close(self);
}

/// Run until the display says stop. The display is closed exactly once on the
/// way out, including when presenting fails; that failure is then returned.
pub fn run<D, R>(
    mut display: D,
    renderer: &FrameRenderer<'_>,
    frame: &mut FrameBuffer,
    clock: &mut AnimationClock,
    rng: &mut R,
) -> Result<(), Error>
where
    D: Display,
    R: RngCore + ?Sized,
{
    let result = frame_loop(&mut display, renderer, frame, clock, rng);
    debug!(frames = clock.frames(), t = clock.time(), "loop finished");
    display.close();
    result
}

fn frame_loop<D, R>(
    display: &mut D,
    renderer: &FrameRenderer<'_>,
    frame: &mut FrameBuffer,
    clock: &mut AnimationClock,
    rng: &mut R,
) -> Result<(), Error>
where
    D: Display,
    R: RngCore + ?Sized,
{
    let mut fps = FpsMeter::new(Duration::from_secs(1), Instant::now());

    while display.pump() {
        let t = clock.tick();
        renderer.render(frame, t, rng);
        display.present(frame)?;

        if let Some(rate) = fps.frame(Instant::now()) {
            info!("FPS: {rate:.1} (t = {t:.2})");
        }
    }
    Ok(())
}
