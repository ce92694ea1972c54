//! Rect value object - Rectangle representation
//!
//! Edges are pixel boundaries: a rect from `left = 10` to `right = 20`
//! covers the ten pixel columns 10..20.

/// A rectangle defined by its bounds
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Create a new rectangle from bounds
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Get width
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Get height
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Check if rectangle is empty (zero or negative area)
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Check if `other` lies entirely inside this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Inset rectangle uniformly
    pub fn inset_uniform(&self, amount: f32) -> Rect {
        Rect::new(
            self.left + amount,
            self.top + amount,
            self.right - amount,
            self.bottom - amount,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_size() {
        let r = Rect::new(10.0, 20.0, 110.0, 70.0);

        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 50.0);
    }

    #[test]
    fn test_rect_contains_rect() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);

        assert!(outer.contains_rect(&Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 20.0, 20.0)));
        assert!(!outer.contains_rect(&Rect::new(10.0, 10.0, 101.0, 20.0)));
    }

    #[test]
    fn test_rect_inset_and_empty() {
        let r = Rect::new(0.0, 0.0, 2.0, 30.0);
        let inset = r.inset_uniform(1.0);

        assert_eq!(inset, Rect::new(1.0, 1.0, 1.0, 29.0));
        assert!(inset.is_empty());
        assert!(!r.is_empty());
    }
}
