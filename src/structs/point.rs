use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Screen coordinates. Component arithmetic wraps on `i32` overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowPoint {
    pub x: i32,
    pub y: i32,
}

impl WindowPoint {
    pub const ORIGIN: WindowPoint = WindowPoint { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> WindowPoint {
        WindowPoint { x, y }
    }
}

impl From<(i32, i32)> for WindowPoint {
    fn from((x, y): (i32, i32)) -> Self {
        WindowPoint::new(x, y)
    }
}

impl From<WindowPoint> for (i32, i32) {
    fn from(p: WindowPoint) -> Self {
        (p.x, p.y)
    }
}

impl Add for WindowPoint {
    type Output = WindowPoint;

    fn add(self, rhs: WindowPoint) -> WindowPoint {
        WindowPoint::new(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl Sub for WindowPoint {
    type Output = WindowPoint;

    fn sub(self, rhs: WindowPoint) -> WindowPoint {
        WindowPoint::new(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

impl AddAssign for WindowPoint {
    fn add_assign(&mut self, rhs: WindowPoint) {
        *self = *self + rhs;
    }
}

impl SubAssign for WindowPoint {
    fn sub_assign(&mut self, rhs: WindowPoint) {
        *self = *self - rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::WindowPoint;

    #[test]
    fn test_add_sub() {
        let a = WindowPoint::new(10, -4);
        let b = WindowPoint::new(3, 7);

        assert_eq!(a + b, WindowPoint::new(13, 3));
        assert_eq!(a - b, WindowPoint::new(7, -11));
    }

    #[test]
    fn test_additive_inverse() {
        let points = [(0, 0), (1, 2), (-50, 300), (1920, -1080), (i32::MAX / 2, i32::MIN / 2), (i32::MAX, i32::MIN), (i32::MIN, -1)];
        for a in points.iter().copied().map(WindowPoint::from) {
            for b in points.iter().copied().map(WindowPoint::from) {
                assert_eq!((a + b) - b, a);
            }
        }
    }

    #[test]
    fn test_overflow_wraps() {
        let a = WindowPoint::new(i32::MAX, i32::MIN);
        let b = WindowPoint::new(1, 1);

        assert_eq!(a + b, WindowPoint::new(i32::MIN, i32::MIN + 1));
        assert_eq!((a + b) - b, a);
        assert_eq!((b - a) + a, b);
    }

    #[test]
    fn test_assign_ops() {
        let mut p = WindowPoint::ORIGIN;
        p += WindowPoint::new(5, 5);
        p -= WindowPoint::new(2, 1);

        assert_eq!(p, WindowPoint::new(3, 4));
        assert_eq!(<(i32, i32)>::from(p), (3, 4));
    }
}
