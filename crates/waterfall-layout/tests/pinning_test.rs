//! Sticky headers and footers as seen through the public layout API.

use waterfall_layout::prelude::*;
use waterfall_testing::prelude::*;

/// One single-column section: an optional header, one item of `item_height`
/// and an optional footer, with no spacing or insets.
fn tall_section(header: f32, item_height: f32, footer: f32) -> (LayoutConfig, TestDelegate) {
    let config = LayoutConfig {
        column_count: 1,
        line_spacing: 0.0,
        interitem_spacing: 0.0,
        section_inset: EdgeInsets::default(),
        header_reference_size: Size::new(0.0, header),
        footer_reference_size: Size::new(0.0, footer),
        section_headers_pin_to_visible_bounds: true,
        section_footers_pin_to_visible_bounds: true,
        ..Default::default()
    };
    (config, TestDelegate::uniform_heights(&[1], item_height))
}

fn header_y(layout: &mut WaterfallLayout, host: &TestHost) -> Option<f32> {
    layout
        .attributes_for_supplementary(ElementKind::SectionHeader, IndexPath::new(0, 0), host)
        .unwrap_or_else(|err| panic!("{err}"))
        .map(|attributes| attributes.frame.y)
}

fn footer_y(layout: &mut WaterfallLayout, host: &TestHost) -> Option<f32> {
    layout
        .attributes_for_supplementary(ElementKind::SectionFooter, IndexPath::new(0, 0), host)
        .unwrap_or_else(|err| panic!("{err}"))
        .map(|attributes| attributes.frame.y)
}

#[test]
fn header_rests_at_section_bottom_when_scrolled_past() {
    // Section spans [0, 300): 40pt header plus a 260pt item.
    let (config, delegate) = tall_section(40.0, 260.0, 0.0);
    let mut host = TestHost::new(vec![1]).with_size(375.0, 200.0);
    let mut layout = WaterfallLayout::new(config);
    assert!(layout.prepare(&host, &delegate).is_ok());
    assert_eq!(
        layout.model().map(|model| model.section_rects()[0].rect),
        Some(Rect::new(0.0, 0.0, 375.0, 300.0))
    );

    host.scroll_to(500.0);
    assert_eq!(header_y(&mut layout, &host), Some(260.0));

    host.scroll_to(120.0);
    assert_eq!(header_y(&mut layout, &host), Some(120.0));

    host.scroll_to(-80.0);
    assert_eq!(header_y(&mut layout, &host), Some(0.0));
}

#[test]
fn footer_tracks_viewport_bottom() {
    // Header [0, 40), item [40, 540), footer [540, 570).
    let (config, delegate) = tall_section(40.0, 500.0, 30.0);
    let mut host = TestHost::new(vec![1]).with_size(375.0, 200.0);
    let mut layout = WaterfallLayout::new(config);
    assert!(layout.prepare(&host, &delegate).is_ok());

    host.scroll_to(100.0);
    assert_eq!(footer_y(&mut layout, &host), Some(270.0));

    host.scroll_to(1_000.0);
    assert_eq!(footer_y(&mut layout, &host), Some(540.0));

    // Never climbs above the section's own header.
    host.scroll_to(-500.0);
    assert_eq!(footer_y(&mut layout, &host), Some(40.0));
}

#[test]
fn header_stays_clear_of_pinned_footer() {
    let (config, delegate) = tall_section(40.0, 500.0, 30.0);
    let host = TestHost::new(vec![1]).with_size(375.0, 200.0).scrolled_to(2_000.0);
    let mut layout = WaterfallLayout::new(config);
    assert!(layout.prepare(&host, &delegate).is_ok());
    // 570 - 30 - 40
    assert_eq!(header_y(&mut layout, &host), Some(500.0));
}

#[test]
fn insets_and_refresh_overlay_move_the_visible_top() {
    let (config, delegate) = tall_section(40.0, 1_000.0, 0.0);
    let mut layout = WaterfallLayout::new(config);
    let host = TestHost::new(vec![1]).scrolled_to(200.0);
    assert!(layout.prepare(&host, &delegate).is_ok());

    let refreshing = host.clone().with_refresh_overlay(60.0);
    assert_eq!(header_y(&mut layout, &refreshing), Some(140.0));
    assert_eq!(
        layout.visible_bounds(&refreshing),
        Ok(Rect::new(0.0, 140.0, 375.0, 727.0))
    );

    let inset = host.with_content_inset(EdgeInsets::from_components(0.0, 64.0, 0.0, 0.0));
    assert_eq!(header_y(&mut layout, &inset), Some(264.0));
}

#[test]
fn unpinned_header_keeps_its_frame() {
    let (mut config, delegate) = tall_section(40.0, 1_000.0, 20.0);
    config.section_headers_pin_to_visible_bounds = false;
    config.section_footers_pin_to_visible_bounds = false;
    let host = TestHost::new(vec![1]).scrolled_to(400.0);
    let mut layout = WaterfallLayout::new(config);
    assert!(layout.prepare(&host, &delegate).is_ok());

    assert_eq!(header_y(&mut layout, &host), Some(0.0));
    assert_eq!(footer_y(&mut layout, &host), Some(1_040.0));
    assert!(!layout.should_recompute(Rect::new(0.0, 900.0, 375.0, 667.0)));
}

#[test]
fn pinned_header_shows_up_in_rect_queries() {
    let (config, delegate) = tall_section(40.0, 1_000.0, 0.0);
    let host = TestHost::new(vec![1]).with_size(375.0, 200.0).scrolled_to(600.0);
    let mut layout = WaterfallLayout::new(config);
    assert!(layout.prepare(&host, &delegate).is_ok());

    let visible = layout
        .attributes_in_rect(Rect::new(0.0, 600.0, 375.0, 200.0), &host)
        .unwrap_or_else(|err| panic!("{err}"));
    assert_kinds(&visible, &[ElementKind::SectionHeader, ElementKind::Cell]);
    assert_frame(&visible[0], Rect::new(0.0, 600.0, 375.0, 40.0), 0.0);
}

#[test]
fn adjusted_inset_drives_pinning_not_content_inset() {
    let (config, delegate) = tall_section(40.0, 1_000.0, 30.0);
    let host = TestHost {
        // The host adds a 64pt navigation bar and a 34pt toolbar on top of
        // its own 10pt content inset.
        adjusted_content_inset: Some(EdgeInsets::from_components(0.0, 74.0, 0.0, 44.0)),
        ..TestHost::new(vec![1])
            .with_content_inset(EdgeInsets::from_components(0.0, 10.0, 0.0, 10.0))
            .scrolled_to(300.0)
    };
    let mut layout = WaterfallLayout::new(config);
    assert!(layout.prepare(&host, &delegate).is_ok());

    assert_eq!(
        layout.visible_bounds(&host),
        Ok(Rect::new(0.0, 374.0, 375.0, 549.0))
    );
    assert_eq!(header_y(&mut layout, &host), Some(374.0));
    // Visible bottom 923, footer 30 tall.
    assert_eq!(footer_y(&mut layout, &host), Some(893.0));
}

#[test]
fn pinned_bands_never_leave_their_section() {
    for seed in 0..32 {
        let mut scenario = random_scenario(seed);
        scenario.config.section_headers_pin_to_visible_bounds = true;
        scenario.config.section_footers_pin_to_visible_bounds = true;
        let mut host = scenario.host.clone();
        let mut layout = WaterfallLayout::new(scenario.config);
        assert!(layout.prepare(&host, &scenario.delegate).is_ok());
        let height = layout.content_size().map_or(0.0, |size| size.height);

        let mut y = -300.0;
        while y < height + 300.0 {
            host.scroll_to(y);
            assert!(layout.attributes_in_rect(Rect::ZERO, &host).is_ok());
            let model = layout.model().unwrap_or_else(|| panic!("not prepared"));

            for span in model.section_rects() {
                let header = model.header(span.section);
                let footer = model.footer(span.section);
                let header_height = header.map_or(0.0, |a| a.frame.height);
                let footer_height = footer.map_or(0.0, |a| a.frame.height);

                if let Some(header) = header {
                    assert_within_section(header, span, 0.0, footer_height);
                    let resting = span.rect.max_y() - footer_height - header_height;
                    if y >= span.rect.min_y() && y <= resting {
                        assert!(
                            (header.frame.y - y).abs() <= 1e-3,
                            "seed {seed}: header of section {} at {}, viewport top {y}",
                            span.section,
                            header.frame.y
                        );
                    }
                }
                if let Some(footer) = footer {
                    assert_within_section(footer, span, header_height, 0.0);
                }
            }
            y += 173.0;
        }
    }
}

#[test]
fn supplementary_lookup_errors() {
    let (config, delegate) = tall_section(40.0, 100.0, 0.0);
    let host = TestHost::new(vec![1]);
    let mut layout = WaterfallLayout::new(config);

    let header = IndexPath::new(0, 0);
    assert_eq!(
        layout.attributes_for_supplementary(ElementKind::SectionHeader, header, &host),
        Err(LayoutError::NotPrepared)
    );
    assert!(layout.prepare(&host, &delegate).is_ok());
    assert_eq!(
        layout.attributes_for_supplementary(ElementKind::Cell, header, &host),
        Ok(None)
    );
    assert_eq!(
        layout.attributes_for_supplementary(ElementKind::SectionFooter, header, &host),
        Ok(None)
    );
    assert_eq!(
        layout.attributes_for_supplementary(
            ElementKind::SectionHeader,
            IndexPath::new(3, 0),
            &host
        ),
        Ok(None)
    );
    assert_eq!(
        layout.attributes_for_supplementary(
            ElementKind::SectionHeader,
            IndexPath::new(0, 0),
            &TestHost::detached(vec![1])
        ),
        Err(LayoutError::Detached)
    );
}
