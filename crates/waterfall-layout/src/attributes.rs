use waterfall_geometry::Rect;

/// Position of an element: a section and an item inside it.
///
/// Supplementary elements (headers and footers) use item 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IndexPath {
    pub section: usize,
    pub item: usize,
}

impl IndexPath {
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Cell,
    SectionHeader,
    SectionFooter,
}

impl ElementKind {
    #[inline]
    pub fn is_supplementary(self) -> bool {
        !matches!(self, ElementKind::Cell)
    }
}

/// Placement of one element for the current layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutAttributes {
    pub kind: ElementKind,
    pub index_path: IndexPath,
    pub frame: Rect,
    /// Stacking order; higher draws on top.
    pub z_index: i64,
}

impl LayoutAttributes {
    pub fn cell(index_path: IndexPath, frame: Rect, z_index: i64) -> Self {
        Self {
            kind: ElementKind::Cell,
            index_path,
            frame,
            z_index,
        }
    }

    pub fn supplementary(kind: ElementKind, section: usize, frame: Rect, z_index: i64) -> Self {
        Self {
            kind,
            index_path: IndexPath::new(section, 0),
            frame,
            z_index,
        }
    }
}

/// Vertical span of a section that has visible content, used to keep pinned
/// headers and footers inside their own section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub section: usize,
    pub rect: Rect,
}
