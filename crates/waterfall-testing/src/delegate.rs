//! Table-driven delegate for tests.

use waterfall_geometry::{EdgeInsets, Size};
use waterfall_layout::{IndexPath, RenderDirection, WaterfallLayoutDelegate};

/// Per-section values a [`TestDelegate`] reports. `None` defers to the
/// layout-wide configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionOverrides {
    pub column_count: Option<usize>,
    pub render_direction: Option<RenderDirection>,
    pub line_spacing: Option<f32>,
    pub interitem_spacing: Option<f32>,
    pub inset: Option<EdgeInsets>,
    pub header_height: Option<f32>,
    pub footer_height: Option<f32>,
}

/// Delegate backed by plain tables of per-section overrides and item sizes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestDelegate {
    pub sections: Vec<SectionOverrides>,
    pub item_sizes: Vec<Vec<Size>>,
}

impl TestDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every item of every listed section gets the same unscaled height.
    pub fn uniform_heights(item_counts: &[usize], height: f32) -> Self {
        Self {
            sections: Vec::new(),
            item_sizes: item_counts
                .iter()
                .map(|&count| vec![Size::new(0.0, height); count])
                .collect(),
        }
    }

    pub fn with_section(mut self, section: usize, overrides: SectionOverrides) -> Self {
        if self.sections.len() <= section {
            self.sections.resize(section + 1, SectionOverrides::default());
        }
        self.sections[section] = overrides;
        self
    }

    pub fn with_item_sizes(mut self, section: usize, sizes: Vec<Size>) -> Self {
        if self.item_sizes.len() <= section {
            self.item_sizes.resize(section + 1, Vec::new());
        }
        self.item_sizes[section] = sizes;
        self
    }

    fn overrides(&self, section: usize) -> Option<&SectionOverrides> {
        self.sections.get(section)
    }
}

impl WaterfallLayoutDelegate for TestDelegate {
    fn column_count(&self, section: usize) -> Option<usize> {
        self.overrides(section)?.column_count
    }

    fn render_direction(&self, section: usize) -> Option<RenderDirection> {
        self.overrides(section)?.render_direction
    }

    fn line_spacing(&self, section: usize) -> Option<f32> {
        self.overrides(section)?.line_spacing
    }

    fn interitem_spacing(&self, section: usize) -> Option<f32> {
        self.overrides(section)?.interitem_spacing
    }

    fn section_inset(&self, section: usize) -> Option<EdgeInsets> {
        self.overrides(section)?.inset
    }

    fn header_size(&self, section: usize) -> Option<Size> {
        self.overrides(section)?
            .header_height
            .map(|height| Size::new(0.0, height))
    }

    fn footer_size(&self, section: usize) -> Option<Size> {
        self.overrides(section)?
            .footer_height
            .map(|height| Size::new(0.0, height))
    }

    fn item_size(&self, index_path: IndexPath) -> Option<Size> {
        self.item_sizes
            .get(index_path.section)?
            .get(index_path.item)
            .copied()
    }
}
