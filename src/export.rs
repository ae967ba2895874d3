use std::{path::Path, str::FromStr};

use opencv::{core, prelude::*, videoio};

use crate::{cv::Matrix, Error, Result};

/// Four character codec tag such as `mp4v` or `MJPG`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FourCC([char; 4]);

impl FourCC {
    pub fn code(&self) -> Result<i32> {
        let [c1, c2, c3, c4] = self.0;
        Ok(videoio::VideoWriter::fourcc(c1, c2, c3, c4)?)
    }
}

impl FromStr for FourCC {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().collect();
        match chars.as_slice() {
            [c1, c2, c3, c4] if chars.iter().all(char::is_ascii) => {
                Ok(Self([*c1, *c2, *c3, *c4]))
            }
            _ => Err(Error::CodecError(format!(
                "expected four ascii characters, got {:?}",
                s
            ))),
        }
    }
}

impl std::fmt::Display for FourCC {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

pub trait VideoSink {
    fn write_frame(&mut self, image: &Matrix) -> Result<()>;
}

pub struct Writer {
    inner: videoio::VideoWriter,
    released: bool,
}

impl Writer {
    pub fn open(path: &Path, fourcc: FourCC, fps: f64, size: (i32, i32)) -> Result<Self> {
        let file = path
            .to_str()
            .ok_or_else(|| Error::WriterError(format!("non utf-8 path {:?}", path)))?;
        let writer = videoio::VideoWriter::new(
            file,
            fourcc.code()?,
            fps,
            core::Size::new(size.0, size.1),
            true,
        )?;

        if !writer.is_opened()? {
            return Err(Error::WriterError(format!(
                "unable to open {} with codec {}",
                file, fourcc
            )));
        }

        Ok(Self {
            inner: writer,
            released: false,
        })
    }

    pub fn release(mut self) -> Result<()> {
        self.release_once()?;
        Ok(())
    }

    /// `false` when the writer was already released.
    fn release_once(&mut self) -> Result<bool> {
        if self.released {
            return Ok(false);
        }
        self.released = true;
        log::info!("Releasing video writer");
        self.inner.release()?;
        Ok(true)
    }
}

impl VideoSink for Writer {
    fn write_frame(&mut self, image: &Matrix) -> Result<()> {
        self.inner.write(&image.0)?;
        Ok(())
    }
}

impl Drop for Writer {
    fn drop(&mut self) {
        let _ = self.release_once();
    }
}
