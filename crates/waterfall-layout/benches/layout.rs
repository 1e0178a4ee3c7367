use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use waterfall_layout::{Rect, WaterfallLayout};
use waterfall_testing::Scenario;

const SECTION_COUNT: usize = 4;
const ITEMS_PER_SECTION_SAMPLES: &[usize] = &[250, 2_500];
const VIEWPORT_HEIGHT: f32 = 667.0;
const SCROLL_STEP: f32 = 240.0;

fn bench_prepare(c: &mut Criterion) {
    let mut group = c.benchmark_group("waterfall_prepare");
    for &items_per_section in ITEMS_PER_SECTION_SAMPLES {
        let scenario = Scenario::large(SECTION_COUNT, items_per_section);
        group.bench_with_input(
            BenchmarkId::new("items", SECTION_COUNT * items_per_section),
            &scenario,
            |b, scenario| {
                let mut layout = WaterfallLayout::new(scenario.config);
                b.iter(|| {
                    let model = layout
                        .prepare(&scenario.host, &scenario.delegate)
                        .expect("prepare");
                    black_box(model.attributes().len());
                });
            },
        );
    }
    group.finish();
}

fn bench_scroll_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("waterfall_scroll");
    for &items_per_section in ITEMS_PER_SECTION_SAMPLES {
        let scenario = Scenario::large(SECTION_COUNT, items_per_section);
        group.bench_with_input(
            BenchmarkId::new("items", SECTION_COUNT * items_per_section),
            &scenario,
            |b, scenario| {
                let mut layout = WaterfallLayout::new(scenario.config);
                layout
                    .prepare(&scenario.host, &scenario.delegate)
                    .expect("prepare");
                let content = layout.content_size().expect("content size");
                let mut host = scenario.host.clone();
                let mut offset = 0.0;

                b.iter(|| {
                    host.scroll_to(offset);
                    let viewport = Rect::new(0.0, offset, content.width, VIEWPORT_HEIGHT);
                    let visible = layout
                        .attributes_in_rect(viewport, &host)
                        .expect("attributes in rect");
                    black_box(visible);
                    offset += SCROLL_STEP;
                    if offset > content.height {
                        offset = 0.0;
                    }
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_prepare, bench_scroll_queries);
criterion_main!(benches);
