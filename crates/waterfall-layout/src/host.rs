use waterfall_geometry::{EdgeInsets, Rect};

/// The scrolling list widget a layout is attached to.
///
/// The host owns the data counts, the scroll position and the insets; the
/// layout only reads them.
pub trait LayoutHost {
    fn number_of_sections(&self) -> usize;

    fn number_of_items(&self, section: usize) -> usize;

    /// Current bounds. The origin is the scroll offset.
    ///
    /// `None` while the host is not attached to anything that has a size.
    fn bounds(&self) -> Option<Rect>;

    fn content_inset(&self) -> EdgeInsets {
        EdgeInsets::default()
    }

    /// Content inset after system adjustments such as bars or safe areas.
    fn adjusted_content_inset(&self) -> EdgeInsets {
        self.content_inset()
    }

    fn safe_area_insets(&self) -> EdgeInsets {
        EdgeInsets::default()
    }

    fn layout_margins(&self) -> EdgeInsets {
        EdgeInsets::default()
    }

    /// Height of a transient overlay at the top of the viewport, such as an
    /// active pull-to-refresh indicator. Zero when none is showing.
    fn refresh_overlay_height(&self) -> f32 {
        0.0
    }
}
