use std::path::Path;

use crate::{
    cv::{FrameSource, Matrix, Source, CV},
    display::{Display, HighGui},
    export::{FourCC, VideoSink, Writer},
    frame::Frame,
    Result,
};

/// One open capture source and every frame captured from it so far.
pub struct CaptureSession<S = CV, D = HighGui> {
    name: String,
    source: S,
    display: D,
    width: i32,
    height: i32,
    resize: bool,
    frames: Vec<Frame>,
}

impl CaptureSession {
    /// Opens `source` on the OpenCV backend. A zero `width` or `height` keeps
    /// the source's native size.
    #[tracing::instrument(name = "Opening capture session", err)]
    pub fn open(name: &str, source: &Source, width: i32, height: i32) -> Result<Self> {
        Self::new(name, CV::open(source)?, HighGui::new(), width, height)
    }
}

impl<S: FrameSource, D: Display> CaptureSession<S, D> {
    pub fn new(name: &str, source: S, display: D, width: i32, height: i32) -> Result<Self> {
        let (mut width, mut height, mut resize) = (width, height, true);
        if width == 0 || height == 0 {
            let (native_width, native_height) = source.native_size()?;
            if width == 0 {
                width = native_width;
                resize = false;
            }
            if height == 0 {
                height = native_height;
                resize = false;
            }
        }
        tracing::info!(name, width, height, resize, "Capture session ready");

        Ok(Self {
            name: name.to_owned(),
            source,
            display,
            width,
            height,
            resize,
            frames: Vec::new(),
        })
    }

    /// Captures, annotates and stores one frame, returning its index. A failed
    /// read is replaced by a blank frame.
    pub fn parse_next_frame(&mut self, flip: bool) -> Result<usize> {
        let mut image = match self.source.read_frame() {
            Some(image) => image,
            None => {
                tracing::warn!(
                    index = self.frames.len(),
                    "Frame not captured, substituting blank frame"
                );
                Matrix::blank(self.width, self.height)?
            }
        };

        if self.resize {
            image = image.resize((self.width, self.height))?;
        }
        if flip {
            image = image.flip_horizontal()?;
        }

        self.frames
            .push(Frame::new(&self.name, image, self.width, self.height)?);
        Ok(self.frames.len() - 1)
    }

    /// Negative indices count from the end. Out of range indices fall back to
    /// the latest frame; `None` only before the first capture.
    pub fn get_frame(&self, index: isize) -> Option<&Frame> {
        let position = self.position(index)?;
        self.frames.get(position)
    }

    pub fn get_frame_mut(&mut self, index: isize) -> Option<&mut Frame> {
        let position = self.position(index)?;
        self.frames.get_mut(position)
    }

    /// Shows the addressed frame on this session's display, returning the
    /// polled key code. `-1` when there is nothing to show or no key.
    pub fn show_frame(&mut self, index: isize) -> Result<i32> {
        let Some(position) = self.position(index) else {
            return Ok(-1);
        };
        self.frames[position].show_frame(&mut self.display)
    }

    /// Writes every frame to `out_file` in capture order and returns how many
    /// were written. `close` also tears down the display windows.
    #[tracing::instrument(
        name = "Exporting video",
        skip(self, out_file),
        fields(out_file = %out_file.as_ref().display(), frames = self.frames.len()),
        err
    )]
    pub fn export_video(
        &mut self,
        out_file: impl AsRef<Path>,
        codec: &str,
        frame_rate: f64,
        close: bool,
    ) -> Result<usize> {
        let fourcc = codec.parse::<FourCC>()?;
        let mut writer = Writer::open(
            out_file.as_ref(),
            fourcc,
            frame_rate,
            (self.width, self.height),
        )?;
        let written = self.export_to(&mut writer)?;
        writer.release()?;

        if close {
            self.display.close_all()?;
        }
        tracing::info!(written, "Video exported");
        Ok(written)
    }

    pub fn export_to(&self, sink: &mut impl VideoSink) -> Result<usize> {
        for frame in &self.frames {
            sink.write_frame(frame.image())?;
        }
        Ok(self.frames.len())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_resizing(&self) -> bool {
        self.resize
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    fn position(&self, index: isize) -> Option<usize> {
        let len = self.frames.len();
        if len == 0 {
            return None;
        }
        if index.unsigned_abs() >= len {
            return Some(len - 1);
        }
        Some(if index < 0 {
            len - index.unsigned_abs()
        } else {
            index as usize
        })
    }
}
