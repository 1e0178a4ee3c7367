//! A sectioned photo gallery backing the demo.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use waterfall_geometry::{EdgeInsets, Rect, Size};
use waterfall_layout::{IndexPath, LayoutHost, RenderDirection, WaterfallLayoutDelegate};

pub const SECTION_COUNT: usize = 20;
pub const ITEMS_PER_SECTION: usize = 10;

const ASPECT_RATIOS: [f32; 3] = [1.2, 1.5, 1.7];
const COLUMN_COUNTS: [usize; 3] = [3, 4, 5];
const DIRECTIONS: [RenderDirection; 3] = [
    RenderDirection::ShortestFirst,
    RenderDirection::LeftToRight,
    RenderDirection::RightToLeft,
];

/// Scrollable window over the gallery.
pub struct GalleryHost {
    bounds: Rect,
    content_inset: EdgeInsets,
}

impl GalleryHost {
    pub fn new(size: Size) -> Self {
        Self {
            bounds: Rect::from_size(size),
            // Status bar and navigation bar.
            content_inset: EdgeInsets::from_components(0.0, 44.0, 0.0, 34.0),
        }
    }

    pub fn scroll_to(&mut self, offset: f32) {
        self.bounds.y = offset;
    }

    pub fn viewport(&self) -> Rect {
        self.bounds
    }
}

impl LayoutHost for GalleryHost {
    fn number_of_sections(&self) -> usize {
        SECTION_COUNT
    }

    fn number_of_items(&self, _section: usize) -> usize {
        ITEMS_PER_SECTION
    }

    fn bounds(&self) -> Option<Rect> {
        Some(self.bounds)
    }

    fn content_inset(&self) -> EdgeInsets {
        self.content_inset
    }
}

/// Photos with a height-to-width ratio each. Column layout varies by section.
pub struct Gallery {
    ratios: Vec<Vec<f32>>,
}

impl Gallery {
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let ratios = (0..SECTION_COUNT)
            .map(|_| {
                (0..ITEMS_PER_SECTION)
                    .map(|_| ASPECT_RATIOS[rng.random_range(0..ASPECT_RATIOS.len())])
                    .collect()
            })
            .collect();
        Self { ratios }
    }
}

impl WaterfallLayoutDelegate for Gallery {
    fn column_count(&self, section: usize) -> Option<usize> {
        Some(COLUMN_COUNTS[section % COLUMN_COUNTS.len()])
    }

    fn render_direction(&self, section: usize) -> Option<RenderDirection> {
        Some(DIRECTIONS[section % DIRECTIONS.len()])
    }

    /// A unit-wide photo, so the placed height is the ratio times the column width.
    fn item_size(&self, index_path: IndexPath) -> Option<Size> {
        let ratio = self.ratios.get(index_path.section)?.get(index_path.item)?;
        Some(Size::new(1.0, *ratio))
    }
}
