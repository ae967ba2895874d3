use std::str::FromStr;

use opencv::{core, prelude::*, videoio};

pub use area::{Area, LockingRect};
pub use matrix::Matrix;

pub mod area;
pub mod matrix;

/// Where frames come from. Paths and URLs are handed to OpenCV unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Camera(i32),
    Uri(String),
}

impl FromStr for Source {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim().parse::<i32>() {
            Ok(index) => Self::Camera(index),
            Err(_) => Self::Uri(s.to_owned()),
        })
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Camera(index) => write!(f, "camera {}", index),
            Source::Uri(uri) => write!(f, "{}", uri),
        }
    }
}

pub trait FrameSource {
    /// `None` when nothing could be read this tick.
    fn read_frame(&mut self) -> Option<Matrix>;

    /// Native `(width, height)` of the source.
    fn native_size(&self) -> crate::Result<(i32, i32)>;
}

pub struct CV(videoio::VideoCapture);

impl CV {
    pub fn open(source: &Source) -> crate::Result<Self> {
        let cam = match source {
            Source::Camera(index) => videoio::VideoCapture::new(*index, videoio::CAP_ANY)?,
            Source::Uri(uri) => videoio::VideoCapture::from_file(uri, videoio::CAP_ANY)?,
        };

        if !cam.is_opened()? {
            return Err(crate::Error::SourceError(format!(
                "unable to open {}",
                source
            )));
        }

        Ok(Self(cam))
    }
}

impl FrameSource for CV {
    fn read_frame(&mut self) -> Option<Matrix> {
        let mut frame = core::Mat::default();
        match self.read(&mut frame) {
            Ok(true) if !frame.empty() => Some(Matrix::from(frame)),
            Ok(_) => None,
            Err(err) => {
                tracing::warn!("Failed to read frame: {}", err);
                None
            }
        }
    }

    fn native_size(&self) -> crate::Result<(i32, i32)> {
        Ok((
            self.get(videoio::CAP_PROP_FRAME_WIDTH)? as i32,
            self.get(videoio::CAP_PROP_FRAME_HEIGHT)? as i32,
        ))
    }
}

impl Drop for CV {
    fn drop(&mut self) {
        log::info!("Releasing capture source");
        let _ = self.0.release();
    }
}

impl std::ops::Deref for CV {
    type Target = videoio::VideoCapture;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for CV {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
