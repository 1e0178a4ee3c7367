//! Per-section configuration provider.
//!
//! This module defines the [`WaterfallLayoutDelegate`] trait through which the
//! host overrides layout settings section by section and supplies item sizes.

use waterfall_geometry::{EdgeInsets, Size};

use crate::attributes::IndexPath;
use crate::config::RenderDirection;

/// Optional per-section overrides for a waterfall layout.
///
/// Every method defaults to `None`, meaning "use the layout-wide value from
/// [`LayoutConfig`](crate::LayoutConfig)". Implement only what varies.
/// `()` is the empty delegate.
pub trait WaterfallLayoutDelegate {
    /// Number of columns in `section`. Must be at least 1.
    fn column_count(&self, section: usize) -> Option<usize> {
        let _ = section;
        None
    }

    fn render_direction(&self, section: usize) -> Option<RenderDirection> {
        let _ = section;
        None
    }

    fn line_spacing(&self, section: usize) -> Option<f32> {
        let _ = section;
        None
    }

    fn interitem_spacing(&self, section: usize) -> Option<f32> {
        let _ = section;
        None
    }

    fn section_inset(&self, section: usize) -> Option<EdgeInsets> {
        let _ = section;
        None
    }

    /// Header size of `section`; only the height is used.
    fn header_size(&self, section: usize) -> Option<Size> {
        let _ = section;
        None
    }

    /// Footer size of `section`; only the height is used.
    fn footer_size(&self, section: usize) -> Option<Size> {
        let _ = section;
        None
    }

    /// Natural size of an item.
    ///
    /// The item is scaled to the column width keeping this aspect ratio. A
    /// zero width keeps the height unscaled; `None` or a zero height yields a
    /// zero-height item.
    fn item_size(&self, index_path: IndexPath) -> Option<Size> {
        let _ = index_path;
        None
    }
}

impl WaterfallLayoutDelegate for () {}
