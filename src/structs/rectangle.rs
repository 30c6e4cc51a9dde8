use super::point::WindowPoint;

/// Position and size of a window, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowRectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowRectangle {
    pub fn new(position: WindowPoint, size: WindowPoint) -> WindowRectangle {
        WindowRectangle {
            x: position.x,
            y: position.y,
            width: size.x,
            height: size.y,
        }
    }

    /// Builds a rectangle from native `RECT`-style corners.
    pub fn from_corners(left: i32, top: i32, right: i32, bottom: i32) -> WindowRectangle {
        WindowRectangle {
            x: left,
            y: top,
            width: right.wrapping_sub(left),
            height: bottom.wrapping_sub(top),
        }
    }

    pub fn position(&self) -> WindowPoint {
        WindowPoint::new(self.x, self.y)
    }

    pub fn size(&self) -> WindowPoint {
        WindowPoint::new(self.width, self.height)
    }

    pub fn right(&self) -> i32 {
        self.x.wrapping_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.wrapping_add(self.height)
    }

    pub fn contains(&self, point: WindowPoint) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    pub fn offset(&self, delta: WindowPoint) -> WindowRectangle {
        WindowRectangle::new(self.position() + delta, self.size())
    }
}
