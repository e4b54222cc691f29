// The window that shows the swirl.
// Visual: a 320x240 frame, shown at 2x, refreshed up to 60 times a second.

use crate::app::Display;
use crate::config::{TARGET_FPS, WINDOW_SCALE};
use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Key, Window, WindowOptions};
use tracing::info;

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the frame buffer.
    /// Visual: a new black window appears with your chosen title.
    pub fn open(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let options = WindowOptions { scale: WINDOW_SCALE, ..WindowOptions::default() };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(TARGET_FPS);
        info!(width, height, "window open");
        Ok(Self { window })
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }
}

impl Display for Drawer {
    // minifb drains platform events inside `update_with_buffer`, so this only
    // reads the state the previous present left behind.
    fn pump(&mut self) -> bool {
        self.is_open() && !self.esc_pressed()
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new frame.
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&frame.pixels, frame.width, frame.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    fn close(self) {
        info!("window closed");
        drop(self.window);
    }
}
