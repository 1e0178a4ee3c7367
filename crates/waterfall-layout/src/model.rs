//! Snapshot of one completed layout pass.

use std::ops::Range;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use waterfall_geometry::Rect;

use crate::attributes::{ElementKind, LayoutAttributes, SectionRect};
use crate::union_index::UnionRectIndex;

/// Current bottom edge of each column of a section.
///
/// Inline capacity covers the common column counts without a heap allocation.
pub type ColumnHeights = SmallVec<[f32; 8]>;

/// Geometry produced by one `prepare` pass.
///
/// Built from scratch on every pass and never updated incrementally. The only
/// mutation after construction is the pinning resolver moving header and
/// footer frames along y.
#[derive(Debug, Clone, Default)]
pub struct LayoutModel {
    /// Every element in emission order: per section the header, the items,
    /// then the footer.
    pub(crate) attributes: Vec<LayoutAttributes>,
    /// Per section, the range of `attributes` holding its items.
    pub(crate) section_items: Vec<Range<usize>>,
    /// Section to index into `attributes`.
    pub(crate) headers: FxHashMap<usize, usize>,
    pub(crate) footers: FxHashMap<usize, usize>,
    pub(crate) section_rects: Vec<SectionRect>,
    pub(crate) column_heights: Vec<ColumnHeights>,
    pub(crate) index: UnionRectIndex,
    /// Pinned bands move after indexing and are checked outside the buckets.
    pub(crate) pinned_headers: bool,
    pub(crate) pinned_footers: bool,
    /// Host bounds captured when the pass ran.
    pub(crate) bounds: Rect,
    pub(crate) content_width: f32,
    pub(crate) final_bottom: f32,
}

impl LayoutModel {
    /// All elements in emission order.
    pub fn attributes(&self) -> &[LayoutAttributes] {
        &self.attributes
    }

    pub fn section_count(&self) -> usize {
        self.section_items.len()
    }

    /// Item attributes of `section`, or `None` if the section does not exist.
    pub fn item_attributes(&self, section: usize) -> Option<&[LayoutAttributes]> {
        let range = self.section_items.get(section)?;
        self.attributes.get(range.clone())
    }

    pub fn header(&self, section: usize) -> Option<&LayoutAttributes> {
        self.supplementary(ElementKind::SectionHeader, section)
    }

    pub fn footer(&self, section: usize) -> Option<&LayoutAttributes> {
        self.supplementary(ElementKind::SectionFooter, section)
    }

    pub fn supplementary(&self, kind: ElementKind, section: usize) -> Option<&LayoutAttributes> {
        let slot = match kind {
            ElementKind::SectionHeader => self.headers.get(&section)?,
            ElementKind::SectionFooter => self.footers.get(&section)?,
            ElementKind::Cell => return None,
        };
        self.attributes.get(*slot)
    }

    /// Spans of the sections that have any content, in section order.
    pub fn section_rects(&self) -> &[SectionRect] {
        &self.section_rects
    }

    /// Column bottoms of `section` after the pass. All equal the section's
    /// bottom edge.
    pub fn column_heights(&self, section: usize) -> Option<&[f32]> {
        self.column_heights.get(section).map(|heights| heights.as_slice())
    }

    pub fn union_index(&self) -> &UnionRectIndex {
        &self.index
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    /// Bottom edge of the last section, or the header offset when there are
    /// no sections.
    pub fn final_bottom(&self) -> f32 {
        self.final_bottom
    }

    /// Elements intersecting `rect`, in emission order.
    ///
    /// Prunes with the union-rect index, then filters the candidates by exact
    /// intersection. Pinned headers and footers may have moved away from the
    /// frame their bucket was built from, so they are tested on their own.
    pub fn attributes_in_rect(&self, rect: &Rect) -> Vec<LayoutAttributes> {
        let candidates = self.index.query(rect);
        let mut hits: Vec<usize> = candidates
            .clone()
            .filter(|&slot| rect.intersects(&self.attributes[slot].frame))
            .collect();

        let pinned_headers = self.headers.values().filter(|_| self.pinned_headers);
        let pinned_footers = self.footers.values().filter(|_| self.pinned_footers);
        let before = hits.len();
        hits.extend(
            pinned_headers
                .chain(pinned_footers)
                .copied()
                .filter(|slot| !candidates.contains(slot))
                .filter(|&slot| rect.intersects(&self.attributes[slot].frame)),
        );
        if hits.len() > before {
            hits.sort_unstable();
        }

        hits.into_iter().map(|slot| self.attributes[slot]).collect()
    }
}
