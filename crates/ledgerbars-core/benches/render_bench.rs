use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ledgerbars_core::{Chart, Dataset, MonthRecord, RenderOptions};

fn build_chart(n: usize) -> Chart {
    let records = (0..n)
        .map(|i| MonthRecord {
            month: format!("m{i}"),
            earn: 100.0 + (i % 13) as f64 * 31.0,
            spend: 80.0 + (i % 7) as f64 * 47.0,
        })
        .collect();
    Chart::new(Dataset::new(records))
}

fn bench_render(c: &mut Criterion) {
    let opts = RenderOptions::default();

    c.bench_function("render_svg_sample", |b| {
        let chart = Chart::new(Dataset::sample().expect("bundled dataset"));
        b.iter(|| black_box(chart.render_to_svg_string(&opts)));
    });

    let mut group = c.benchmark_group("render_svg_string");
    for &n in &[12usize, 120usize] {
        group.bench_function(format!("months_{n}"), |b| {
            let chart = build_chart(n);
            b.iter(|| black_box(chart.render_to_svg_string(&opts)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
