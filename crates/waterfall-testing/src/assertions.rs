//! Layout-aware assertions. Failure messages name the element by kind and
//! index path.

use waterfall_geometry::Rect;
use waterfall_layout::{ElementKind, LayoutAttributes, SectionRect};

const EDGE_TOLERANCE: f32 = 1e-3;

/// Asserts every edge of `attributes.frame` is within `tolerance` of `expected`.
pub fn assert_frame(attributes: &LayoutAttributes, expected: Rect, tolerance: f32) {
    let frame = attributes.frame;
    let off_by = [
        frame.x - expected.x,
        frame.y - expected.y,
        frame.max_x() - expected.max_x(),
        frame.max_y() - expected.max_y(),
    ]
    .into_iter()
    .map(f32::abs)
    .fold(0.0, f32::max);
    assert!(
        off_by <= tolerance,
        "{:?} at {:?}: frame {:?}, expected {:?} (off by {off_by})",
        attributes.kind,
        attributes.index_path,
        frame,
        expected,
    );
}

/// Asserts a header or footer lies inside its section span, clear of
/// `reserved_above` at the top and `reserved_below` at the bottom.
///
/// Pinned bands may move anywhere inside that range but never past it.
pub fn assert_within_section(
    attributes: &LayoutAttributes,
    span: &SectionRect,
    reserved_above: f32,
    reserved_below: f32,
) {
    let frame = attributes.frame;
    let top = span.rect.min_y() + reserved_above;
    let bottom = span.rect.max_y() - reserved_below;
    assert_eq!(attributes.index_path.section, span.section);
    assert!(
        frame.min_y() >= top - EDGE_TOLERANCE && frame.max_y() <= bottom + EDGE_TOLERANCE,
        "{:?} of section {}: y {}..{} escapes {top}..{bottom}",
        attributes.kind,
        span.section,
        frame.min_y(),
        frame.max_y(),
    );
}

fn kind_rank(kind: ElementKind) -> u8 {
    match kind {
        ElementKind::SectionHeader => 0,
        ElementKind::Cell => 1,
        ElementKind::SectionFooter => 2,
    }
}

/// Asserts `found` follows emission order: sections ascending, and within a
/// section the header, then items by index, then the footer.
pub fn assert_emission_order(found: &[LayoutAttributes]) {
    let key = |attributes: &LayoutAttributes| {
        let path = attributes.index_path;
        (path.section, kind_rank(attributes.kind), path.item)
    };
    for pair in found.windows(2) {
        assert!(
            key(&pair[0]) < key(&pair[1]),
            "{:?} at {:?} emitted before {:?} at {:?}",
            pair[0].kind,
            pair[0].index_path,
            pair[1].kind,
            pair[1].index_path,
        );
    }
}

/// Asserts the element kinds of `found`, in order.
pub fn assert_kinds(found: &[LayoutAttributes], expected: &[ElementKind]) {
    let kinds: Vec<ElementKind> = found.iter().map(|attributes| attributes.kind).collect();
    assert_eq!(kinds, expected, "element kinds in query result");
}

/// Linear scan reference for indexed rect queries.
pub fn brute_force_in_rect(attributes: &[LayoutAttributes], rect: &Rect) -> Vec<LayoutAttributes> {
    attributes
        .iter()
        .filter(|attributes| rect.intersects(&attributes.frame))
        .copied()
        .collect()
}
