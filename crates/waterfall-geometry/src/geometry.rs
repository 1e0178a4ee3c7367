//! Sizes, rectangles and insets in logical pixels. y grows downwards.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

/// Axis-aligned rectangle with a top-left origin; y grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Returns true when the two rects overlap on both axes.
    ///
    /// Spans are half-open, so rects that only touch along an edge do not
    /// intersect. A zero-length span behaves as the single coordinate it sits
    /// on, which keeps zero-height frames visible to queries covering them.
    pub fn intersects(&self, other: &Rect) -> bool {
        spans_overlap(self.min_x(), self.max_x(), other.min_x(), other.max_x())
            && spans_overlap(self.min_y(), self.max_y(), other.min_y(), other.max_y())
    }

    /// Closed-interval overlap: true when the rects intersect or share an edge.
    ///
    /// Coarser than [`Rect::intersects`]; anything that intersects a rect
    /// contained in `self` also touches `self`.
    pub fn touches(&self, other: &Rect) -> bool {
        self.min_x() <= other.max_x()
            && other.min_x() <= self.max_x()
            && self.min_y() <= other.max_y()
            && other.min_y() <= self.max_y()
    }

    /// Bounding box of both rects.
    pub fn union(&self, other: &Rect) -> Rect {
        let min_x = self.min_x().min(other.min_x());
        let min_y = self.min_y().min(other.min_y());
        let max_x = self.max_x().max(other.max_x());
        let max_y = self.max_y().max(other.max_y());
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

fn spans_overlap(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    match (a_min == a_max, b_min == b_max) {
        (true, true) => a_min == b_min,
        (true, false) => b_min <= a_min && a_min < b_max,
        (false, true) => a_min <= b_min && b_min < a_max,
        (false, false) => a_min < b_max && b_min < a_max,
    }
}

/// Padding values for each edge of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl EdgeInsets {
    pub fn uniform(all: f32) -> Self {
        Self {
            left: all,
            top: all,
            right: all,
            bottom: all,
        }
    }

    pub fn horizontal(horizontal: f32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            ..Self::default()
        }
    }

    pub fn from_components(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn horizontal_sum(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical_sum(&self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(0.0, 100.0, 100.0, 50.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Rect::new(50.0, 99.0, 10.0, 10.0)));
    }

    #[test]
    fn zero_height_rect_intersects_at_its_position() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(viewport.intersects(&Rect::new(10.0, 10.0, 50.0, 0.0)));
        assert!(!viewport.intersects(&Rect::new(10.0, 100.0, 50.0, 0.0)));
        assert!(Rect::new(10.0, 0.0, 50.0, 0.0).intersects(&viewport));
    }

    #[test]
    fn union_spans_both_rects() {
        let a = Rect::new(10.0, 0.0, 20.0, 20.0);
        let b = Rect::new(0.0, 50.0, 15.0, 10.0);
        assert_eq!(a.union(&b), Rect::new(0.0, 0.0, 30.0, 60.0));
    }

    #[test]
    fn union_covers_degenerate_rects() {
        let a = Rect::new(10.0, 10.0, 20.0, 20.0);
        let flat = Rect::new(10.0, 80.0, 20.0, 0.0);
        let joined = a.union(&flat);
        assert_eq!(joined, Rect::new(10.0, 10.0, 20.0, 70.0));
        // The flat rect sits on the bottom edge: outside the half-open span,
        // but still touching.
        assert!(!joined.intersects(&flat));
        assert!(joined.touches(&flat));
    }

    #[test]
    fn insets_sum_per_axis() {
        let insets = EdgeInsets::from_components(1.0, 2.0, 3.0, 4.0);
        assert_eq!(insets.horizontal_sum(), 4.0);
        assert_eq!(insets.vertical_sum(), 6.0);
        assert_eq!(EdgeInsets::horizontal(8.0).vertical_sum(), 0.0);
    }
}
