//! Seeded random layouts for property-style tests and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use waterfall_geometry::{EdgeInsets, Size};
use waterfall_layout::{LayoutConfig, RenderDirection};

use crate::delegate::{SectionOverrides, TestDelegate};
use crate::host::TestHost;

/// A complete layout input: configuration, host and delegate.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub config: LayoutConfig,
    pub host: TestHost,
    pub delegate: TestDelegate,
}

impl Scenario {
    /// `sections` sections of `items_per_section` items with mixed aspect
    /// ratios, three columns and headers. Used for benchmarks.
    pub fn large(sections: usize, items_per_section: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let item_counts = vec![items_per_section; sections];
        let mut delegate = TestDelegate::new();
        for section in 0..sections {
            let sizes = (0..items_per_section)
                .map(|_| Size::new(100.0, rng.random_range(80.0..240.0_f32).floor()))
                .collect();
            delegate = delegate.with_item_sizes(section, sizes);
        }
        Self {
            config: LayoutConfig {
                column_count: 3,
                header_reference_size: Size::new(0.0, 44.0),
                section_headers_pin_to_visible_bounds: true,
                ..Default::default()
            },
            host: TestHost::new(item_counts),
            delegate,
        }
    }
}

fn random_direction(rng: &mut StdRng) -> RenderDirection {
    match rng.random_range(0..3) {
        0 => RenderDirection::ShortestFirst,
        1 => RenderDirection::LeftToRight,
        _ => RenderDirection::RightToLeft,
    }
}

fn random_band(rng: &mut StdRng) -> f32 {
    if rng.random_bool(0.6) {
        rng.random_range(20..=60) as f32
    } else {
        0.0
    }
}

/// Builds a reproducible random scenario from `seed`.
///
/// Covers empty sections, zero-sized items, unscaled items, every render
/// direction, per-section overrides and both pin flags.
pub fn random_scenario(seed: u64) -> Scenario {
    let mut rng = StdRng::seed_from_u64(seed);
    let section_count = rng.random_range(0..=6);
    let item_counts: Vec<usize> = (0..section_count)
        .map(|_| rng.random_range(0..=80))
        .collect();

    let mut delegate = TestDelegate::new();
    for (section, &count) in item_counts.iter().enumerate() {
        let overrides = if rng.random_bool(0.5) {
            SectionOverrides {
                column_count: Some(rng.random_range(1..=5)),
                render_direction: Some(random_direction(&mut rng)),
                line_spacing: Some(rng.random_range(0..=12) as f32),
                interitem_spacing: Some(rng.random_range(0..=12) as f32),
                inset: Some(EdgeInsets::uniform(rng.random_range(0..=16) as f32)),
                header_height: Some(random_band(&mut rng)),
                footer_height: Some(random_band(&mut rng)),
            }
        } else {
            SectionOverrides::default()
        };
        let sizes = (0..count)
            .map(|_| {
                let width = if rng.random_bool(0.1) {
                    0.0
                } else {
                    rng.random_range(50..=300) as f32
                };
                let height = if rng.random_bool(0.05) {
                    0.0
                } else {
                    rng.random_range(20..=400) as f32
                };
                Size::new(width, height)
            })
            .collect();
        delegate = delegate
            .with_section(section, overrides)
            .with_item_sizes(section, sizes);
    }

    let config = LayoutConfig {
        column_count: rng.random_range(1..=4),
        render_direction: random_direction(&mut rng),
        line_spacing: rng.random_range(0..=10) as f32,
        interitem_spacing: rng.random_range(0..=10) as f32,
        section_inset: EdgeInsets::uniform(rng.random_range(0..=12) as f32),
        header_reference_size: Size::new(0.0, random_band(&mut rng)),
        footer_reference_size: Size::new(0.0, random_band(&mut rng)),
        header_offset: rng.random_range(0..=100) as f32,
        footer_offset: rng.random_range(0..=100) as f32,
        section_headers_pin_to_visible_bounds: rng.random_bool(0.5),
        section_footers_pin_to_visible_bounds: rng.random_bool(0.5),
        ..Default::default()
    };
    let host = TestHost::new(item_counts).with_size(rng.random_range(280..=480) as f32, 640.0);

    Scenario {
        config,
        host,
        delegate,
    }
}
