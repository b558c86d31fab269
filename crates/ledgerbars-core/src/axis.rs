// File: crates/ledgerbars-core/src/axis.rs
// Summary: Tick layout and label formatting for the chart axes.

/// Length of a tick mark, in pixels.
pub const TICK_LENGTH: f32 = 6.0;
/// Gap between a tick mark and its label, in pixels.
pub const LABEL_GAP: f32 = 3.0;
/// Axis label font size, in pixels.
pub const FONT_SIZE: f32 = 10.0;
/// Number of value ticks on the y axis.
pub const Y_TICK_COUNT: usize = 6;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Whole tick values print as integers, everything else with one decimal.
pub fn format_tick(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{v:.1}")
    }
}
