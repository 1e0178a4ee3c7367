//! In-memory list host.

use waterfall_geometry::{EdgeInsets, Rect};
use waterfall_layout::LayoutHost;

/// A scrollable host with fixed item counts.
///
/// Starts attached at the origin with a 375x667 viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct TestHost {
    pub item_counts: Vec<usize>,
    pub bounds: Option<Rect>,
    pub content_inset: EdgeInsets,
    pub adjusted_content_inset: Option<EdgeInsets>,
    pub safe_area_insets: EdgeInsets,
    pub layout_margins: EdgeInsets,
    pub refresh_overlay_height: f32,
}

impl TestHost {
    pub fn new(item_counts: Vec<usize>) -> Self {
        Self {
            item_counts,
            bounds: Some(Rect::new(0.0, 0.0, 375.0, 667.0)),
            content_inset: EdgeInsets::default(),
            adjusted_content_inset: None,
            safe_area_insets: EdgeInsets::default(),
            layout_margins: EdgeInsets::default(),
            refresh_overlay_height: 0.0,
        }
    }

    /// A host that has not been attached to a window yet.
    pub fn detached(item_counts: Vec<usize>) -> Self {
        Self {
            bounds: None,
            ..Self::new(item_counts)
        }
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        let origin_y = self.bounds.map_or(0.0, |bounds| bounds.y);
        self.bounds = Some(Rect::new(0.0, origin_y, width, height));
        self
    }

    pub fn with_content_inset(mut self, inset: EdgeInsets) -> Self {
        self.content_inset = inset;
        self
    }

    pub fn with_safe_area(mut self, inset: EdgeInsets) -> Self {
        self.safe_area_insets = inset;
        self
    }

    pub fn with_refresh_overlay(mut self, height: f32) -> Self {
        self.refresh_overlay_height = height;
        self
    }

    /// Moves the viewport so its top edge sits at content offset `y`.
    pub fn scroll_to(&mut self, y: f32) {
        if let Some(bounds) = self.bounds.as_mut() {
            bounds.y = y;
        }
    }

    pub fn scrolled_to(mut self, y: f32) -> Self {
        self.scroll_to(y);
        self
    }
}

impl LayoutHost for TestHost {
    fn number_of_sections(&self) -> usize {
        self.item_counts.len()
    }

    fn number_of_items(&self, section: usize) -> usize {
        self.item_counts.get(section).copied().unwrap_or(0)
    }

    fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    fn content_inset(&self) -> EdgeInsets {
        self.content_inset
    }

    fn adjusted_content_inset(&self) -> EdgeInsets {
        self.adjusted_content_inset.unwrap_or(self.content_inset)
    }

    fn safe_area_insets(&self) -> EdgeInsets {
        self.safe_area_insets
    }

    fn layout_margins(&self) -> EdgeInsets {
        self.layout_margins
    }

    fn refresh_overlay_height(&self) -> f32 {
        self.refresh_overlay_height
    }
}
