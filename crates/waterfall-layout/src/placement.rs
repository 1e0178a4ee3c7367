//! Column placement for the waterfall layout.
//!
//! Walks every section in order, emits header, item and footer attributes and
//! keeps the per-column bottom edges that decide where the next item goes.

use smallvec::smallvec;
use waterfall_geometry::{Rect, Size};

use crate::attributes::{ElementKind, IndexPath, LayoutAttributes, SectionRect};
use crate::config::{LayoutConfig, RenderDirection, SectionConfig};
use crate::delegate::WaterfallLayoutDelegate;
use crate::host::LayoutHost;
use crate::model::{ColumnHeights, LayoutModel};
use crate::union_index::UnionRectIndex;

/// Index of the shortest column. Ties go to the lowest index.
pub fn shortest_column_index(heights: &[f32]) -> usize {
    let mut shortest = 0;
    for (index, height) in heights.iter().enumerate().skip(1) {
        if *height < heights[shortest] {
            shortest = index;
        }
    }
    shortest
}

/// Index of the tallest column. Ties go to the lowest index.
pub fn longest_column_index(heights: &[f32]) -> usize {
    let mut longest = 0;
    for (index, height) in heights.iter().enumerate().skip(1) {
        if *height > heights[longest] {
            longest = index;
        }
    }
    longest
}

/// Column that receives item `item` of a section with the given column bottoms.
///
/// The round-robin directions ignore the heights entirely.
pub fn next_column_index(direction: RenderDirection, item: usize, heights: &[f32]) -> usize {
    let column_count = heights.len().max(1);
    match direction {
        RenderDirection::ShortestFirst => shortest_column_index(heights),
        RenderDirection::LeftToRight => item % column_count,
        RenderDirection::RightToLeft => (column_count - 1) - (item % column_count),
    }
}

/// Height of an item in a column of `item_width`, scaled from its natural size.
pub fn scaled_item_height(natural: Option<Size>, item_width: f32) -> f32 {
    match natural {
        Some(size) if size.height > 0.0 => {
            if size.width > 0.0 {
                (size.height * item_width / size.width).floor()
            } else {
                size.height
            }
        }
        _ => 0.0,
    }
}

/// Runs the placement pass that fills a fresh [`LayoutModel`].
///
/// Every resolved column count must be at least 1 (see
/// [`WaterfallLayoutDelegate::column_count`]).
pub struct PlacementEngine<'a, H: ?Sized, D: ?Sized> {
    config: &'a LayoutConfig,
    host: &'a H,
    delegate: &'a D,
}

impl<'a, H, D> PlacementEngine<'a, H, D>
where
    H: LayoutHost + ?Sized,
    D: WaterfallLayoutDelegate + ?Sized,
{
    pub fn new(config: &'a LayoutConfig, host: &'a H, delegate: &'a D) -> Self {
        Self {
            config,
            host,
            delegate,
        }
    }

    /// Places every section against a content area `content_width` wide.
    ///
    /// `bounds` is recorded in the model for later content-size queries.
    pub fn place(&self, bounds: Rect, content_width: f32) -> LayoutModel {
        let section_count = self.host.number_of_sections();
        let mut model = LayoutModel {
            bounds,
            content_width,
            ..Default::default()
        };

        let mut top = self.config.header_offset;
        for section in 0..section_count {
            let settings = SectionConfig::resolve(self.config, self.delegate, section);
            let item_count = self.host.number_of_items(section);
            let mut placement =
                SectionPlacement::begin(section, settings, item_count, top, content_width);
            placement.place_header(&mut model);
            placement.place_items(&mut model, self.delegate);
            placement.place_footer(&mut model);
            top = placement.close(&mut model);
        }
        model.final_bottom = top;

        model.pinned_headers = self.config.section_headers_pin_to_visible_bounds;
        model.pinned_footers = self.config.section_footers_pin_to_visible_bounds;
        let frames = model.attributes.iter().map(|attributes| attributes.frame);
        model.index = UnionRectIndex::build(frames);
        model
    }
}

/// Where a section is in its placement. Each phase leaves a uniform value in
/// the column heights for the next one to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionPhase {
    Header,
    ItemsPlacing,
    FooterPlacing,
    SectionClosed,
}

struct SectionPlacement {
    section: usize,
    settings: SectionConfig,
    item_count: usize,
    content_width: f32,
    item_width: f32,
    section_top: f32,
    top: f32,
    heights: ColumnHeights,
    phase: SectionPhase,
}

impl SectionPlacement {
    fn begin(
        section: usize,
        settings: SectionConfig,
        item_count: usize,
        top: f32,
        content_width: f32,
    ) -> Self {
        Self {
            section,
            settings,
            item_count,
            content_width,
            item_width: settings.item_width(content_width),
            section_top: top,
            top,
            heights: smallvec![top; settings.column_count],
            phase: SectionPhase::Header,
        }
    }

    fn supplementary_z_index(&self) -> i64 {
        self.item_count as i64 + 1
    }

    fn emit_supplementary(&mut self, model: &mut LayoutModel, kind: ElementKind, height: f32) {
        let frame = Rect::new(0.0, self.top, self.content_width, height);
        let slot = model.attributes.len();
        model.attributes.push(LayoutAttributes::supplementary(
            kind,
            self.section,
            frame,
            self.supplementary_z_index(),
        ));
        match kind {
            ElementKind::SectionHeader => model.headers.insert(self.section, slot),
            _ => model.footers.insert(self.section, slot),
        };
        self.top = frame.max_y();
    }

    fn reset_columns(&mut self, value: f32) {
        self.heights.iter_mut().for_each(|height| *height = value);
    }

    fn place_header(&mut self, model: &mut LayoutModel) {
        debug_assert_eq!(self.phase, SectionPhase::Header);
        if self.settings.header_height > 0.0 {
            self.emit_supplementary(
                model,
                ElementKind::SectionHeader,
                self.settings.header_height,
            );
        }
        self.top += self.settings.inset.top;
        self.reset_columns(self.top);
        self.phase = SectionPhase::ItemsPlacing;
    }

    fn place_items<D>(&mut self, model: &mut LayoutModel, delegate: &D)
    where
        D: WaterfallLayoutDelegate + ?Sized,
    {
        debug_assert_eq!(self.phase, SectionPhase::ItemsPlacing);
        let start = model.attributes.len();
        let stride = self.item_width + self.settings.interitem_spacing;
        for item in 0..self.item_count {
            let index_path = IndexPath::new(self.section, item);
            let column = next_column_index(self.settings.render_direction, item, &self.heights);
            let x = self.settings.inset.left + stride * column as f32;
            let y = self.heights[column];
            let height = scaled_item_height(delegate.item_size(index_path), self.item_width);
            let frame = Rect::new(x, y, self.item_width, height);
            model.attributes.push(LayoutAttributes::cell(
                index_path,
                frame,
                (self.item_count - item) as i64,
            ));
            self.heights[column] = frame.max_y() + self.settings.line_spacing;
        }
        model.section_items.push(start..model.attributes.len());
        self.phase = SectionPhase::FooterPlacing;
    }

    fn place_footer(&mut self, model: &mut LayoutModel) {
        debug_assert_eq!(self.phase, SectionPhase::FooterPlacing);
        let longest = self.heights[longest_column_index(&self.heights)];
        // Only placed items leave trailing line spacing behind them.
        let trailing = if self.item_count > 0 {
            self.settings.line_spacing
        } else {
            0.0
        };
        self.top = longest - trailing + self.settings.inset.bottom;
        if self.settings.footer_height > 0.0 {
            self.emit_supplementary(
                model,
                ElementKind::SectionFooter,
                self.settings.footer_height,
            );
        }
        self.reset_columns(self.top);
        self.phase = SectionPhase::SectionClosed;
    }

    /// Records the section span and column heights, returning the next
    /// section's top.
    fn close(self, model: &mut LayoutModel) -> f32 {
        debug_assert_eq!(self.phase, SectionPhase::SectionClosed);
        if self.top != self.section_top {
            model.section_rects.push(SectionRect {
                section: self.section,
                rect: Rect::new(
                    0.0,
                    self.section_top,
                    self.content_width,
                    self.top - self.section_top,
                ),
            });
        }
        log::trace!(
            "WaterfallLayout: section {} placed {} items in {} columns ({:?}), span {}..{}",
            self.section,
            self.item_count,
            self.settings.column_count,
            self.settings.render_direction,
            self.section_top,
            self.top
        );
        model.column_heights.push(self.heights);
        self.top
    }
}
