/// Primary scroll axis of a layout.
///
/// The waterfall layout stacks columns vertically; only [`Axis::Vertical`]
/// is accepted as a scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Content scrolls left to right.
    Horizontal,

    /// Content scrolls top to bottom.
    #[default]
    Vertical,
}

impl Axis {
    /// The only direction a waterfall layout scrolls in.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_axis_is_vertical() {
        assert!(Axis::default().is_vertical());
        assert!(!Axis::Horizontal.is_vertical());
    }
}
