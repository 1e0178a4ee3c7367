//! Layout-wide settings and their per-section resolution.

use waterfall_geometry::{EdgeInsets, Size};

use crate::delegate::WaterfallLayoutDelegate;

/// Policy deciding which column receives the next item of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderDirection {
    /// Fill the currently shortest column; ties go to the lowest index.
    #[default]
    ShortestFirst,
    /// Round robin starting from the leftmost column.
    LeftToRight,
    /// Round robin starting from the rightmost column.
    RightToLeft,
}

/// Which host insets are subtracted from the bounds width to get the content width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsetReference {
    #[default]
    ContentInset,
    SafeArea,
    LayoutMargins,
}

/// Layout-wide configuration.
///
/// Every per-section value here is a fallback: a
/// [`WaterfallLayoutDelegate`] may override it section by section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Columns per section. Must be at least 1.
    pub column_count: usize,
    pub render_direction: RenderDirection,
    /// Vertical gap between consecutive items of a column.
    pub line_spacing: f32,
    /// Horizontal gap between columns.
    pub interitem_spacing: f32,
    pub section_inset: EdgeInsets,
    /// Only the height is used; zero suppresses the header.
    pub header_reference_size: Size,
    /// Only the height is used; zero suppresses the footer.
    pub footer_reference_size: Size,
    /// Space reserved above the first section, like a list-level header view.
    pub header_offset: f32,
    /// Space reserved below the last section, like a list-level footer view.
    pub footer_offset: f32,
    pub section_headers_pin_to_visible_bounds: bool,
    pub section_footers_pin_to_visible_bounds: bool,
    pub section_inset_reference: InsetReference,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            column_count: 2,
            render_direction: RenderDirection::ShortestFirst,
            line_spacing: 10.0,
            interitem_spacing: 10.0,
            section_inset: EdgeInsets::default(),
            header_reference_size: Size::ZERO,
            footer_reference_size: Size::ZERO,
            header_offset: 0.0,
            footer_offset: 0.0,
            section_headers_pin_to_visible_bounds: false,
            section_footers_pin_to_visible_bounds: false,
            section_inset_reference: InsetReference::ContentInset,
        }
    }
}

impl LayoutConfig {
    /// Returns true when either supplementary kind pins to the viewport.
    #[inline]
    pub fn has_pinning(&self) -> bool {
        self.section_headers_pin_to_visible_bounds || self.section_footers_pin_to_visible_bounds
    }
}

/// Settings for one section after delegate overrides have been applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionConfig {
    pub column_count: usize,
    pub render_direction: RenderDirection,
    pub line_spacing: f32,
    pub interitem_spacing: f32,
    pub inset: EdgeInsets,
    pub header_height: f32,
    pub footer_height: f32,
}

impl SectionConfig {
    /// Resolves a section's settings, preferring delegate values over `config`.
    pub fn resolve<D>(config: &LayoutConfig, delegate: &D, section: usize) -> Self
    where
        D: WaterfallLayoutDelegate + ?Sized,
    {
        Self {
            column_count: resolve_column_count(config, delegate, section),
            render_direction: delegate
                .render_direction(section)
                .unwrap_or(config.render_direction),
            line_spacing: delegate
                .line_spacing(section)
                .unwrap_or(config.line_spacing),
            interitem_spacing: delegate
                .interitem_spacing(section)
                .unwrap_or(config.interitem_spacing),
            inset: delegate
                .section_inset(section)
                .unwrap_or(config.section_inset),
            header_height: delegate
                .header_size(section)
                .unwrap_or(config.header_reference_size)
                .height,
            footer_height: delegate
                .footer_size(section)
                .unwrap_or(config.footer_reference_size)
                .height,
        }
    }

    /// Width of one column inside a host content area of `content_width`.
    ///
    /// Rounded down so columns never overflow the section.
    pub fn item_width(&self, content_width: f32) -> f32 {
        let section_width = content_width - self.inset.horizontal_sum();
        let gaps = (self.column_count - 1) as f32 * self.interitem_spacing;
        ((section_width - gaps) / self.column_count as f32).floor()
    }
}

/// Column count for `section`. A count of zero breaks the caller's contract;
/// it is logged and treated as a single column.
fn resolve_column_count<D>(config: &LayoutConfig, delegate: &D, section: usize) -> usize
where
    D: WaterfallLayoutDelegate + ?Sized,
{
    let count = delegate
        .column_count(section)
        .unwrap_or(config.column_count);
    if count == 0 {
        log::warn!("WaterfallLayout: section {section} resolved to 0 columns, using 1");
        return 1;
    }
    count
}
