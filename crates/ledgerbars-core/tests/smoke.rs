// File: crates/ledgerbars-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing an SVG file.

use ledgerbars_core::{Chart, Dataset, RenderOptions};

#[test]
fn render_smoke_svg() {
    let chart = Chart::new(Dataset::sample().expect("bundled dataset"));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    chart.render_to_svg(&opts, &out).expect("render should succeed");

    let text = std::fs::read_to_string(&out).expect("output exists");
    assert!(text.trim_start().starts_with("<svg"), "should be SVG markup");
    assert!(text.contains("backgroundBar"));

    // Also verify the in-memory API agrees on structure.
    let in_memory = chart.render_to_svg_string(&opts);
    assert_eq!(
        in_memory.matches("<rect").count(),
        text.matches("<rect").count()
    );
}
