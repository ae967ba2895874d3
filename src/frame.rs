use opencv::{core, imgproc};

use crate::{
    cv::{Area, LockingRect, Matrix},
    display::Display,
    Result,
};

const TARGET_COLOR: (f64, f64, f64) = (255., 0., 0.);
const VIEW_COLOR: (f64, f64, f64) = (0., 255., 0.);
const LOCKING_COLOR: (f64, f64, f64) = (0., 0., 255.);
const RECT_THICKNESS: i32 = 2;

const FONT_FACE: i32 = imgproc::FONT_HERSHEY_PLAIN;
const FONT_SCALE: f64 = 1.;
const TEXT_THICKNESS: i32 = 1;

const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S%.3f";
const KEY_POLL_MS: i32 = 1;

fn bgr((b, g, r): (f64, f64, f64)) -> core::Scalar {
    core::Scalar::new(b, g, r, 0.)
}

/// One captured image with the view, target and timestamp overlays burnt in.
#[derive(Debug)]
pub struct Frame {
    name: String,
    image: Matrix,
    view_area: Area,
    target_area: Area,
    locking_area: Option<LockingRect>,
    timestamp: String,
}

impl Frame {
    pub fn new(name: &str, image: Matrix, width: i32, height: i32) -> Result<Self> {
        let timestamp = chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string();
        Self::with_timestamp(name, image, width, height, timestamp)
    }

    pub fn with_timestamp(
        name: &str,
        mut image: Matrix,
        width: i32,
        height: i32,
        timestamp: String,
    ) -> Result<Self> {
        let view_area = Area::view(width, height);
        let target_area = Area::target(width, height);

        Self::draw_rect(
            &mut image,
            target_area.top_left(),
            target_area.bottom_right(),
            TARGET_COLOR,
        )?;
        Self::draw_rect(
            &mut image,
            view_area.top_left(),
            view_area.bottom_right(),
            VIEW_COLOR,
        )?;

        let mut baseline = 0;
        let text_size = imgproc::get_text_size(
            &timestamp,
            FONT_FACE,
            FONT_SCALE,
            TEXT_THICKNESS,
            &mut baseline,
        )?;
        // right aligned against the view area, just below the top edge
        let origin = core::Point::new(
            view_area.x1 - text_size.width - baseline,
            text_size.height + baseline,
        );
        imgproc::put_text(
            &mut image.0,
            &timestamp,
            origin,
            FONT_FACE,
            FONT_SCALE,
            bgr(VIEW_COLOR),
            TEXT_THICKNESS,
            imgproc::LINE_8,
            false,
        )?;

        Ok(Self {
            name: name.to_owned(),
            image,
            view_area,
            target_area,
            locking_area: None,
            timestamp,
        })
    }

    /// Records the locking rectangle and draws it when it lies strictly inside
    /// the target area. Returns whether it was drawn.
    pub fn add_locking_rect(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<bool> {
        let rect = LockingRect::new(x, y, width, height);
        self.locking_area = Some(rect);

        if !self.target_area.strictly_contains(&rect) {
            return Ok(false);
        }
        Self::draw_rect(
            &mut self.image,
            rect.top_left(),
            rect.bottom_right(),
            LOCKING_COLOR,
        )?;
        Ok(true)
    }

    pub fn show_frame(&self, display: &mut dyn Display) -> Result<i32> {
        display.show(&self.name, &self.image)?;
        display.poll_key(KEY_POLL_MS)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image(&self) -> &Matrix {
        &self.image
    }

    pub fn view_area(&self) -> Area {
        self.view_area
    }

    pub fn target_area(&self) -> Area {
        self.target_area
    }

    pub fn locking_area(&self) -> Option<LockingRect> {
        self.locking_area
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    fn draw_rect(
        image: &mut Matrix,
        from: core::Point,
        to: core::Point,
        color: (f64, f64, f64),
    ) -> Result<()> {
        imgproc::rectangle_points(
            &mut image.0,
            from,
            to,
            bgr(color),
            RECT_THICKNESS,
            imgproc::LINE_8,
            0,
        )?;
        Ok(())
    }
}
