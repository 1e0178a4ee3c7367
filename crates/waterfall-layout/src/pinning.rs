//! Sticky section headers and footers.
//!
//! Moves pinned header and footer frames so they stay in the viewport while
//! their section is on screen, without ever leaving their own section.

use waterfall_geometry::Rect;

use crate::model::LayoutModel;

/// Header y that keeps it at the viewport top, clamped to its section and
/// kept clear of the section's footer.
pub fn pinned_header_y(
    section: Rect,
    visible_top: f32,
    header_height: f32,
    footer_height: f32,
) -> f32 {
    visible_top
        .max(section.min_y())
        .min(section.max_y() - footer_height - header_height)
}

/// Footer y that keeps it at the viewport bottom, clamped to its section and
/// kept clear of the section's header.
pub fn pinned_footer_y(
    section: Rect,
    visible_bottom: f32,
    header_height: f32,
    footer_height: f32,
) -> f32 {
    (visible_bottom - footer_height)
        .min(section.max_y() - footer_height)
        .max(section.min_y() + header_height)
}

/// Applies viewport pinning to an already placed [`LayoutModel`].
///
/// Only y origins change. Results depend on the section spans and the
/// viewport alone, so resolving twice is the same as resolving once.
pub struct PinningResolver {
    visible_bounds: Rect,
}

impl PinningResolver {
    pub fn new(visible_bounds: Rect) -> Self {
        Self { visible_bounds }
    }

    pub fn pin_headers(&self, model: &mut LayoutModel) {
        let LayoutModel {
            attributes,
            headers,
            footers,
            section_rects,
            ..
        } = model;
        for section_rect in section_rects.iter() {
            let Some(&slot) = headers.get(&section_rect.section) else {
                continue;
            };
            let footer_height = footers
                .get(&section_rect.section)
                .map_or(0.0, |&footer| attributes[footer].frame.height);
            let header = &mut attributes[slot].frame;
            header.y = pinned_header_y(
                section_rect.rect,
                self.visible_bounds.min_y(),
                header.height,
                footer_height,
            );
        }
    }

    pub fn pin_footers(&self, model: &mut LayoutModel) {
        let LayoutModel {
            attributes,
            headers,
            footers,
            section_rects,
            ..
        } = model;
        for section_rect in section_rects.iter() {
            let Some(&slot) = footers.get(&section_rect.section) else {
                continue;
            };
            let header_height = headers
                .get(&section_rect.section)
                .map_or(0.0, |&header| attributes[header].frame.height);
            let footer = &mut attributes[slot].frame;
            footer.y = pinned_footer_y(
                section_rect.rect,
                self.visible_bounds.max_y(),
                header_height,
                footer.height,
            );
        }
    }
}
