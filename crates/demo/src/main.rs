// File: crates/demo/src/main.rs
// Summary: Demo loads the monthly dataset (bundled or CSV) and renders grouped-bar SVGs.

use anyhow::{Context, Result};
use ledgerbars_core::{theme, Chart, Dataset, RenderOptions};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Accept a CSV path, theme name, and month to highlight; every argument
    // is optional and falls back to the bundled sample / pastel / the first
    // month in the data.
    let mut args = std::env::args().skip(1);
    let input = args.next();
    let theme_name = args.next().unwrap_or_else(|| "pastel".to_string());
    let highlight = args.next();

    let data = match &input {
        Some(path) => Dataset::from_csv_path(path)
            .with_context(|| format!("failed to load CSV '{path}'"))?,
        None => Dataset::sample().context("loading bundled dataset")?,
    };
    println!(
        "Loaded {} months, max amount {:.0}",
        data.len(),
        data.max_amount()
    );

    let mut opts = RenderOptions::default();
    opts.theme = theme::find(&theme_name);
    println!("Theme: {}", opts.theme.name);

    let highlight = highlight.or_else(|| data.months().first().map(|m| m.to_string()));

    // 1) Plain grouped bars
    let chart = Chart::new(data);
    let out = out_name(input.as_deref(), "bars");
    chart.render_to_svg(&opts, &out)?;
    println!("Wrote {}", out.display());

    if let Some(month) = highlight {
        // 2) Same chart with one month highlighted
        let chart = chart.with_selected(month.clone());
        let out = out_name(input.as_deref(), "selected");
        chart.render_to_svg(&opts, &out)?;
        println!("Wrote {} (highlighting {month})", out.display());

        // 3) Dark theme variant
        let mut dark = RenderOptions::default();
        dark.theme = theme::find("dark");
        let out = out_name(input.as_deref(), "dark");
        chart.render_to_svg(&dark, &out)?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}

/// Output path like target/out/earn_spend_<stem>_<suffix>.svg
fn out_name(input: Option<&str>, suffix: &str) -> PathBuf {
    let stem = input
        .map(Path::new)
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("sample");
    PathBuf::from("target/out").join(format!("earn_spend_{stem}_{suffix}.svg"))
}
