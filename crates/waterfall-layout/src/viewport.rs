//! Viewport handling for the waterfall layout.
//!
//! Derives the content width columns are laid out in and the visible rect
//! pinned headers and footers are clamped against.

use waterfall_geometry::{EdgeInsets, Rect};

use crate::config::InsetReference;
use crate::error::LayoutError;
use crate::host::LayoutHost;

/// Host geometry captured for one layout query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportHandler {
    bounds: Rect,
    adjusted_inset: EdgeInsets,
    reference_inset: EdgeInsets,
    refresh_overlay_height: f32,
}

impl ViewportHandler {
    /// Reads the host's bounds and insets.
    ///
    /// Fails with [`LayoutError::Detached`] when the host has no bounds yet.
    pub fn new<H>(host: &H, reference: InsetReference) -> Result<Self, LayoutError>
    where
        H: LayoutHost + ?Sized,
    {
        let bounds = host.bounds().ok_or(LayoutError::Detached)?;
        let reference_inset = match reference {
            InsetReference::ContentInset => host.content_inset(),
            InsetReference::SafeArea => host.safe_area_insets(),
            InsetReference::LayoutMargins => host.layout_margins(),
        };
        Ok(Self {
            bounds,
            adjusted_inset: host.adjusted_content_inset(),
            reference_inset,
            refresh_overlay_height: host.refresh_overlay_height(),
        })
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Width available to sections: bounds width minus the referenced
    /// horizontal insets.
    #[inline]
    pub fn content_width(&self) -> f32 {
        self.bounds.width - self.reference_inset.horizontal_sum()
    }

    /// Part of the bounds not covered by insets.
    ///
    /// An active refresh overlay extends the rect upwards by its height.
    pub fn visible_bounds(&self) -> Rect {
        let inset = self.adjusted_inset;
        let overlay = self.refresh_overlay_height;
        Rect::new(
            self.bounds.min_x() + inset.left,
            self.bounds.min_y() + inset.top - overlay,
            self.bounds.width - inset.horizontal_sum(),
            self.bounds.height - inset.vertical_sum() + overlay,
        )
    }
}
