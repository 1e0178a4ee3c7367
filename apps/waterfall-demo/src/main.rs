mod gallery;

use anyhow::Context;
use waterfall_geometry::{EdgeInsets, Rect, Size};
use waterfall_layout::{ElementKind, LayoutConfig, WaterfallLayout};

use crate::gallery::{Gallery, GalleryHost, SECTION_COUNT};

const WINDOW_SIZE: Size = Size {
    width: 390.0,
    height: 844.0,
};
const SCROLL_STEP: f32 = 600.0;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = LayoutConfig {
        line_spacing: 10.0,
        interitem_spacing: 10.0,
        section_inset: EdgeInsets::uniform(10.0),
        header_reference_size: Size::new(WINDOW_SIZE.width, 60.0),
        footer_reference_size: Size::new(WINDOW_SIZE.width, 60.0),
        header_offset: 100.0,
        footer_offset: 100.0,
        section_headers_pin_to_visible_bounds: true,
        section_footers_pin_to_visible_bounds: true,
        ..Default::default()
    };
    let mut host = GalleryHost::new(WINDOW_SIZE);
    let gallery = Gallery::generate(7);
    let mut layout = WaterfallLayout::new(config);

    for section in 0..3 {
        let width = layout.item_width(section, &host, &gallery)?;
        log::info!("section {section}: column width {width}");
    }

    let elements = layout
        .prepare(&host, &gallery)
        .context("initial layout pass")?
        .attributes()
        .len();
    let content = layout.content_size()?;
    log::info!(
        "{SECTION_COUNT} sections, {elements} elements, content {}x{}",
        content.width,
        content.height
    );

    let mut offset = 0.0;
    while offset < content.height {
        host.scroll_to(offset);
        if layout.should_recompute(host.viewport()) {
            layout.prepare(&host, &gallery)?;
        }
        let viewport = host.viewport();
        let visible = layout.attributes_in_rect(viewport, &host)?;
        let headers: Vec<String> = visible
            .iter()
            .filter(|attributes| attributes.kind == ElementKind::SectionHeader)
            .map(|attributes| format!("{}@{}", attributes.index_path.section, attributes.frame.y))
            .collect();
        log::info!(
            "offset {offset}: {} visible, headers [{}]",
            visible.len(),
            headers.join(", ")
        );
        log::debug!("visible bounds {:?}", layout.visible_bounds(&host)?);
        offset += SCROLL_STEP;
    }

    let last = Rect::new(
        0.0,
        content.height - WINDOW_SIZE.height,
        content.width,
        WINDOW_SIZE.height,
    );
    host.scroll_to(last.y);
    let tail = layout.attributes_in_rect(last, &host)?;
    log::info!("bottom of content: {} visible", tail.len());
    Ok(())
}
