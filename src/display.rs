use opencv::highgui;

use crate::{cv::Matrix, Result};

/// A surface frames can be shown on and keys polled from.
pub trait Display {
    fn show(&mut self, name: &str, image: &Matrix) -> Result<()>;

    /// Raw key code, `-1` when no key was pressed within `delay_ms`.
    fn poll_key(&mut self, delay_ms: i32) -> Result<i32>;

    fn close_all(&mut self) -> Result<()>;
}

/// OpenCV window manager. Windows opened through it are destroyed on drop.
#[derive(Debug, Default)]
pub struct HighGui {
    opened: bool,
}

impl HighGui {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Display for HighGui {
    fn show(&mut self, name: &str, image: &Matrix) -> Result<()> {
        highgui::imshow(name, &image.0)?;
        self.opened = true;
        Ok(())
    }

    fn poll_key(&mut self, delay_ms: i32) -> Result<i32> {
        Ok(highgui::wait_key(delay_ms)?)
    }

    fn close_all(&mut self) -> Result<()> {
        if self.opened {
            highgui::destroy_all_windows()?;
            self.opened = false;
        }
        Ok(())
    }
}

impl Drop for HighGui {
    fn drop(&mut self) {
        if self.opened {
            log::info!("Destroying display windows");
            let _ = highgui::destroy_all_windows();
        }
    }
}
