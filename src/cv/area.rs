use opencv::core;

/// Absolute rectangle, `(x0, y0)` top left and `(x1, y1)` bottom right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

/// Locking rectangle as given by the caller: origin plus width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockingRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Area {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Whole frame bounds.
    pub fn view(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// 25%..75% of the width, 10%..90% of the height, truncated.
    pub fn target(width: i32, height: i32) -> Self {
        let (w, h) = (width as f64, height as f64);
        Self::new(
            (w * 0.25) as i32,
            (h * 0.1) as i32,
            (w * 0.75) as i32,
            (h * 0.9) as i32,
        )
    }

    /// Strict on every side. The right and bottom edges of `rect` are
    /// `x + width` and `y + height`, compared against this area's absolute corners.
    /// Sums are taken in i64 so oversized rects never wrap back inside.
    pub fn strictly_contains(&self, rect: &LockingRect) -> bool {
        let (right, bottom) = rect.far_corner();
        rect.x > self.x0
            && right < i64::from(self.x1)
            && rect.y > self.y0
            && bottom < i64::from(self.y1)
    }

    pub fn top_left(&self) -> core::Point {
        core::Point::new(self.x0, self.y0)
    }

    pub fn bottom_right(&self) -> core::Point {
        core::Point::new(self.x1, self.y1)
    }
}

impl LockingRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top_left(&self) -> core::Point {
        core::Point::new(self.x, self.y)
    }

    pub fn bottom_right(&self) -> core::Point {
        core::Point::new(
            self.x.saturating_add(self.width),
            self.y.saturating_add(self.height),
        )
    }

    fn far_corner(&self) -> (i64, i64) {
        (
            i64::from(self.x) + i64::from(self.width),
            i64::from(self.y) + i64::from(self.height),
        )
    }
}

#[cfg(test)]
mod test {
    use rand::Rng;

    use super::{Area, LockingRect};

    #[test]
    fn computes_target_area_from_frame_size() {
        assert_eq!(Area::target(200, 100), Area::new(50, 10, 150, 90));
        assert_eq!(Area::target(640, 480), Area::new(160, 48, 480, 432));
        // truncated, not rounded
        assert_eq!(Area::target(9, 9), Area::new(2, 0, 6, 8));
    }

    #[test]
    fn view_area_covers_whole_frame() {
        assert_eq!(Area::view(1280, 720), Area::new(0, 0, 1280, 720));
    }

    #[test]
    fn locking_rect_uses_width_and_height_for_far_corner() {
        let target = Area::target(200, 100);
        // 60 > 50, 60 + 80 = 140 < 150, 20 > 10, 20 + 60 = 80 < 90
        assert!(target.strictly_contains(&LockingRect::new(60, 20, 80, 60)));
        // 60 + 90 = 150 is on the edge
        assert!(!target.strictly_contains(&LockingRect::new(60, 20, 90, 60)));
    }

    #[test]
    fn touching_edges_are_not_contained() {
        let target = Area::new(50, 10, 150, 90);
        assert!(!target.strictly_contains(&LockingRect::new(50, 20, 10, 10)));
        assert!(!target.strictly_contains(&LockingRect::new(60, 10, 10, 10)));
        assert!(!target.strictly_contains(&LockingRect::new(140, 20, 10, 10)));
        assert!(!target.strictly_contains(&LockingRect::new(60, 80, 10, 10)));
        assert!(target.strictly_contains(&LockingRect::new(51, 11, 98, 78)));
    }

    #[test]
    fn oversized_rects_do_not_wrap_into_target() {
        let target = Area::target(200, 100);
        assert!(!target.strictly_contains(&LockingRect::new(60, 20, i32::MAX, 10)));
        assert!(!target.strictly_contains(&LockingRect::new(60, 20, 10, i32::MAX)));
        let max = i32::MAX;
        assert!(!target.strictly_contains(&LockingRect::new(max, max, max, max)));
        assert_eq!(
            LockingRect::new(60, 20, i32::MAX, 10).bottom_right(),
            opencv::core::Point::new(i32::MAX, 30)
        );
    }

    #[test]
    fn random_rects_inside_target_are_contained() {
        let mut rand = rand::thread_rng();
        let target = Area::target(640, 480);
        for _ in 0..500 {
            let x = rand.gen_range(target.x0 + 1..target.x1 - 1);
            let y = rand.gen_range(target.y0 + 1..target.y1 - 1);
            let width = rand.gen_range(0..target.x1 - x);
            let height = rand.gen_range(0..target.y1 - y);
            assert!(target.strictly_contains(&LockingRect::new(x, y, width, height)));
        }
    }

    #[test]
    fn random_rects_crossing_target_are_not_contained() {
        let mut rand = rand::thread_rng();
        let target = Area::target(640, 480);
        for _ in 0..500 {
            let x = rand.gen_range(0..=target.x0);
            let y = rand.gen_range(target.y0 + 1..target.y1 - 1);
            let width = rand.gen_range(1..target.x1);
            let height = rand.gen_range(0..target.y1 - y);
            assert!(!target.strictly_contains(&LockingRect::new(x, y, width, height)));

            let x = rand.gen_range(target.x0 + 1..target.x1 - 1);
            let y = rand.gen_range(target.y0 + 1..target.y1 - 1);
            let height = rand.gen_range(target.y1 - y..target.y1);
            assert!(!target.strictly_contains(&LockingRect::new(x, y, 1, height)));
        }
    }
}
