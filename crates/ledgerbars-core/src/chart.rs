// File: crates/ledgerbars-core/src/chart.rs
// Summary: Chart struct and the layered grouped-bar SVG assembly.

use svg::node;
use svg::node::element::{Group, Line, Rectangle, Text};
use svg::Document;

use crate::axis;
use crate::dataset::{Dataset, Subgroup};
use crate::error::Error;
use crate::scale::{BandScale, LinearScale, OrdinalScale};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Height of the square-cornered cap drawn over each value bar's base, in
/// value units. Fixed: it does not track the y domain, so bars shorter than
/// this render fully square.
pub const BASE_CAP_SPAN: f64 = 30.0;

/// Inter-month padding on the x band scale.
const MONTH_PADDING: f32 = 0.05;
/// Padding between the two bars inside one month's band.
const SUBGROUP_PADDING: f32 = 0.2;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub corner_radius: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::pastel(),
            corner_radius: 16.0,
        }
    }
}

pub struct Chart {
    pub data: Dataset,
    /// Month whose bars render with the theme's selected fills.
    pub selected: Option<String>,
}

impl Chart {
    pub fn new(data: Dataset) -> Self {
        Self { data, selected: None }
    }

    pub fn with_selected(mut self, month: impl Into<String>) -> Self {
        self.selected = Some(month.into());
        self
    }

    /// Assemble the SVG document: x axis, y axis, then per month a stack of
    /// background bar, value bar, and base cap. Scales are rebuilt from the
    /// dataset on every call.
    pub fn document(&self, opts: &RenderOptions) -> Document {
        let x = BandScale::new(
            self.data.months(),
            (opts.insets.left as f32, (opts.width - opts.insets.right as i32) as f32),
            MONTH_PADDING,
        );
        let y = LinearScale::new(
            (0.0, self.data.max_amount()),
            ((opts.height - opts.insets.bottom as i32) as f32, opts.insets.top as f32),
        );
        let sub = BandScale::new(
            Subgroup::ALL.map(Subgroup::as_str),
            (0.0, x.bandwidth()),
            SUBGROUP_PADDING,
        );
        let colors = OrdinalScale::new(
            Subgroup::ALL.map(Subgroup::as_str),
            vec![opts.theme.earn, opts.theme.spend],
        );

        Document::new()
            .set("width", opts.width)
            .set("height", opts.height)
            .add(draw_x_axis(&x, opts))
            .add(draw_y_axis(&y, opts))
            .add(self.background_layer(&x, &y, &sub, opts))
            .add(self.value_layer(&x, &y, &sub, &colors, opts))
            .add(self.cap_layer(&x, &y, &sub, &colors, opts))
    }

    pub fn render_to_svg_string(&self, opts: &RenderOptions) -> String {
        self.document(opts).to_string()
    }

    /// Write the rendered document to `path`, creating parent directories.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        svg::save(path, &self.document(opts))?;
        Ok(())
    }

    fn is_selected(&self, month: &str) -> bool {
        self.selected.as_deref() == Some(month)
    }

    /// Full-height rounded placeholder bars behind every value bar.
    fn background_layer(
        &self,
        x: &BandScale,
        y: &LinearScale,
        sub: &BandScale,
        opts: &RenderOptions,
    ) -> Group {
        let max = self.data.max_amount();
        let top = y.to_px(max);
        let height = bar_height(y, max);
        let mut layer = Group::new();
        for rec in self.data.records() {
            let Some(tx) = x.position(&rec.month) else { continue };
            let fill = if self.is_selected(&rec.month) {
                opts.theme.bar_background_selected
            } else {
                opts.theme.bar_background
            };
            let mut month = month_group("bg", &rec.month, tx);
            for group in Subgroup::ALL {
                let Some(sx) = sub.position(group.as_str()) else { continue };
                month = month.add(
                    Rectangle::new()
                        .set("x", sx)
                        .set("y", top)
                        .set("width", sub.bandwidth())
                        .set("height", height)
                        .set("fill", fill)
                        .set("class", "backgroundBar")
                        .set("rx", opts.corner_radius)
                        .set("ry", opts.corner_radius),
                );
            }
            layer = layer.add(month);
        }
        layer
    }

    /// Rounded bars sized to each subgroup's value.
    fn value_layer(
        &self,
        x: &BandScale,
        y: &LinearScale,
        sub: &BandScale,
        colors: &OrdinalScale<&'static str>,
        opts: &RenderOptions,
    ) -> Group {
        let mut layer = Group::new();
        for rec in self.data.records() {
            let Some(tx) = x.position(&rec.month) else { continue };
            let selected = self.is_selected(&rec.month);
            let mut month = month_group("bar", &rec.month, tx);
            for group in Subgroup::ALL {
                let Some(sx) = sub.position(group.as_str()) else { continue };
                let fill = if selected {
                    opts.theme.selected_fill(group)
                } else {
                    colors
                        .get(group.as_str())
                        .copied()
                        .unwrap_or(opts.theme.bar_background)
                };
                let v = rec.amount(group);
                month = month.add(
                    Rectangle::new()
                        .set("x", sx)
                        .set("y", y.to_px(v))
                        .set("width", sub.bandwidth())
                        .set("height", bar_height(y, v))
                        .set("fill", fill)
                        .set("class", group.as_str())
                        .set("rx", opts.corner_radius)
                        .set("ry", opts.corner_radius),
                );
            }
            layer = layer.add(month);
        }
        layer
    }

    /// Square-cornered rects over the bottom of each value bar, cancelling
    /// the rounding there so only the top corners read as rounded.
    fn cap_layer(
        &self,
        x: &BandScale,
        y: &LinearScale,
        sub: &BandScale,
        colors: &OrdinalScale<&'static str>,
        opts: &RenderOptions,
    ) -> Group {
        let mut layer = Group::new();
        for rec in self.data.records() {
            let Some(tx) = x.position(&rec.month) else { continue };
            let selected = self.is_selected(&rec.month);
            let mut month = month_group("cap", &rec.month, tx);
            for group in Subgroup::ALL {
                let Some(sx) = sub.position(group.as_str()) else { continue };
                let fill = if selected {
                    opts.theme.selected_fill(group)
                } else {
                    colors
                        .get(group.as_str())
                        .copied()
                        .unwrap_or(opts.theme.bar_background)
                };
                let v = rec.amount(group) - BASE_CAP_SPAN;
                month = month.add(
                    Rectangle::new()
                        .set("x", sx)
                        .set("y", y.to_px(v))
                        .set("width", sub.bandwidth())
                        .set("height", bar_height(y, v))
                        .set("fill", fill)
                        .set("class", group.as_str()),
                );
            }
            layer = layer.add(month);
        }
        layer
    }
}

/// Pixel height of a bar for value `v`, measured against the value-1 line
/// and clamped so sub-unit values do not produce negative rects.
pub fn bar_height(y: &LinearScale, v: f64) -> f32 {
    (y.to_px(1.0) - y.to_px(v)).max(0.0)
}

fn month_group(prefix: &str, month: &str, tx: f32) -> Group {
    Group::new()
        .set("class", "month")
        .set("id", format!("{prefix}-{month}"))
        .set("transform", format!("translate({tx},0)"))
}

fn draw_x_axis(x: &BandScale, opts: &RenderOptions) -> Group {
    let theme = &opts.theme;
    let y0 = (opts.height - opts.insets.bottom as i32) as f32;
    let r0 = opts.insets.left as f32;
    let r1 = (opts.width - opts.insets.right as i32) as f32;
    let mut group = Group::new()
        .set("class", "x-axis")
        .set("transform", format!("translate(0,{y0})"))
        .set("font-family", "sans-serif")
        .set("font-size", axis::FONT_SIZE)
        .set("text-anchor", "middle")
        .add(
            Line::new()
                .set("x1", r0)
                .set("x2", r1)
                .set("y1", 0)
                .set("y2", 0)
                .set("stroke", theme.axis_line),
        );
    for month in x.domain() {
        let Some(px) = x.position(month) else { continue };
        let cx = px + x.bandwidth() * 0.5;
        group = group
            .add(
                Line::new()
                    .set("x1", cx)
                    .set("x2", cx)
                    .set("y1", 0)
                    .set("y2", axis::TICK_LENGTH)
                    .set("stroke", theme.axis_line),
            )
            .add(
                Text::new()
                    .set("x", cx)
                    .set("y", axis::TICK_LENGTH + axis::LABEL_GAP)
                    .set("dy", "0.71em")
                    .set("fill", theme.axis_label)
                    .add(node::Text::new(month.as_str())),
            );
    }
    group
}

fn draw_y_axis(y: &LinearScale, opts: &RenderOptions) -> Group {
    let theme = &opts.theme;
    let x0 = opts.insets.left as f32;
    let (bottom, top) = y.range();
    let (d0, d1) = y.domain();
    let mut group = Group::new()
        .set("class", "y-axis")
        .set("transform", format!("translate({x0},0)"))
        .set("font-family", "sans-serif")
        .set("font-size", axis::FONT_SIZE)
        .set("text-anchor", "end")
        .add(
            Line::new()
                .set("x1", 0)
                .set("x2", 0)
                .set("y1", bottom)
                .set("y2", top)
                .set("stroke", theme.axis_line),
        );
    for v in axis::linspace(d0, d1, axis::Y_TICK_COUNT) {
        let py = y.to_px(v);
        group = group
            .add(
                Line::new()
                    .set("x1", -axis::TICK_LENGTH)
                    .set("x2", 0)
                    .set("y1", py)
                    .set("y2", py)
                    .set("stroke", theme.axis_line),
            )
            .add(
                Text::new()
                    .set("x", -(axis::TICK_LENGTH + axis::LABEL_GAP))
                    .set("y", py)
                    .set("dy", "0.32em")
                    .set("fill", theme.axis_label)
                    .add(node::Text::new(axis::format_tick(v))),
            );
    }
    group
}
