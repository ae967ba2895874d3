use opencv::{core, imgproc, prelude::*};

use crate::Result;

#[derive(Debug, Clone)]
pub struct Matrix(pub core::Mat);

impl Matrix {
    /// Zero filled 8-bit BGR buffer of `width` x `height`.
    pub fn blank(width: i32, height: i32) -> Result<Self> {
        Ok(Self(core::Mat::new_rows_cols_with_default(
            height,
            width,
            core::CV_8UC3,
            core::Scalar::all(0.),
        )?))
    }

    pub fn dimensions(&self) -> (i32, i32) {
        let size = self.size().unwrap_or_default();
        (size.width, size.height)
    }

    /// Area interpolation, no-op when already at `size`.
    pub fn resize(&self, size: (i32, i32)) -> Result<Self> {
        if self.dimensions() == size {
            return Ok(Self(self.0.clone()));
        }
        let mut new_mat = core::Mat::default();
        imgproc::resize(
            &self.0,
            &mut new_mat,
            core::Size::new(size.0, size.1),
            0.,
            0.,
            imgproc::INTER_AREA,
        )?;
        Ok(Self(new_mat))
    }

    pub fn flip_horizontal(&self) -> Result<Self> {
        let mut new_mat = core::Mat::default();
        // flip code 1 mirrors around the y axis
        core::flip(&self.0, &mut new_mat, 1)?;
        Ok(Self(new_mat))
    }
}

impl From<core::Mat> for Matrix {
    fn from(value: core::Mat) -> Self {
        Self(value)
    }
}

impl std::ops::Deref for Matrix {
    type Target = core::Mat;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for Matrix {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
