//! Plotters-powered chart widgets for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `Chart`/`BarChart` widgets?
//! - nicer axis + tick rendering
//! - free-form shapes (filled bars, radar polygons)
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
// `ratatui::style::Color` below shadows the plotters trait; keep `.filled()` in scope.
use plotters::style::Color as _;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::ArchitectureId;

/// Series color per architecture.
pub fn arch_rgb(id: ArchitectureId) -> (u8, u8, u8) {
    match id {
        ArchitectureId::RdsMultiAz => (0xFF, 0x6B, 0x6B),
        ArchitectureId::DynamoDb => (0x4E, 0xCD, 0xC4),
        ArchitectureId::AuroraServerless => (0x45, 0xB7, 0xD1),
    }
}

/// Ratatui color matching `arch_rgb`.
pub fn arch_color(id: ArchitectureId) -> Color {
    let (r, g, b) = arch_rgb(id);
    Color::Rgb(r, g, b)
}

/// When the available area is too small, Plotters may fail to build a chart.
/// In that case, we render a small hint rather than panicking.
fn too_small(area: Rect, buf: &mut Buffer) -> bool {
    if area.width < 20 || area.height < 8 {
        buf.set_string(
            area.x,
            area.y,
            "Chart area too small (resize terminal).",
            Style::default().fg(Color::Yellow),
        );
        return true;
    }
    false
}

/// One filled bar.
#[derive(Debug, Clone, Copy)]
pub struct Bar {
    pub value: f64,
    pub color: (u8, u8, u8),
}

/// Vertical bar chart; bars are laid out left to right in slice order.
pub struct BarChartWidget<'a> {
    pub bars: &'a [Bar],
    pub y_label: &'a str,
    pub fmt_y: fn(f64) -> String,
}

impl Widget for BarChartWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if too_small(area, buf) {
            return;
        }

        let n = self.bars.len();
        let y_max = self.bars.iter().map(|b| b.value).fold(0.0_f64, f64::max);
        if n == 0 || !(y_max.is_finite() && y_max > 0.0) {
            return;
        }
        let y1 = y_max * 1.1;

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .set_label_area_size(LabelAreaPosition::Left, 8)
                .set_label_area_size(LabelAreaPosition::Bottom, 1)
                .build_cartesian_2d(0.0..n as f64, 0.0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_labels(0)
                .y_labels(5)
                .y_desc(self.y_label)
                .y_label_formatter(&|v| (self.fmt_y)(*v))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .draw()?;

            for (i, bar) in self.bars.iter().enumerate() {
                let (r, g, b) = bar.color;
                let x0 = i as f64 + 0.2;
                let x1 = i as f64 + 0.8;
                chart.draw_series(std::iter::once(Rectangle::new(
                    [(x0, 0.0), (x1, bar.value)],
                    RGBColor(r, g, b).filled(),
                )))?;
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}

/// Multi-series line chart.
pub struct LineChartWidget<'a> {
    pub series: &'a [(Vec<(f64, f64)>, (u8, u8, u8))],
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub fmt_x: fn(f64) -> String,
    pub fmt_y: fn(f64) -> String,
}

impl Widget for LineChartWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if too_small(area, buf) {
            return;
        }

        let [x0, x1] = self.x_bounds;
        let [y0, y1] = self.y_bounds;
        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .set_label_area_size(LabelAreaPosition::Left, 8)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(self.x_label)
                .y_desc(self.y_label)
                .x_labels(6)
                .y_labels(5)
                .x_label_formatter(&|v| (self.fmt_x)(*v))
                .y_label_formatter(&|v| (self.fmt_y)(*v))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .draw()?;

            for (points, (r, g, b)) in self.series {
                chart.draw_series(LineSeries::new(points.iter().copied(), &RGBColor(*r, *g, *b)))?;
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}

/// Radar (spider) chart on a 0–`max` scale.
///
/// Axes start at the top and go clockwise. Axis names are drawn by the caller.
pub struct RadarChartWidget<'a> {
    pub series: &'a [(Vec<f64>, (u8, u8, u8))],
    pub axes: usize,
    pub max: f64,
}

impl Widget for RadarChartWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if too_small(area, buf) {
            return;
        }
        if self.axes < 3 || !(self.max.is_finite() && self.max > 0.0) {
            return;
        }

        // Terminal cells are about twice as tall as wide; widen the shorter
        // span so rings come out round.
        let aspect = f64::from(area.width) / (2.0 * f64::from(area.height));
        let x_span = 1.15 * aspect.max(1.0);
        let y_span = 1.15 * (1.0 / aspect).max(1.0);

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .build_cartesian_2d(-x_span..x_span, -y_span..y_span)?;

            let grid = RGBColor(90, 90, 90);
            for ring in [0.25, 0.5, 0.75, 1.0] {
                let outline = vec![self.max * ring; self.axes];
                chart.draw_series(LineSeries::new(radar_points(&outline, self.max), &grid))?;
            }
            for (x, y) in radar_points(&vec![self.max; self.axes], self.max)
                .into_iter()
                .take(self.axes)
            {
                chart.draw_series(LineSeries::new([(0.0, 0.0), (x, y)], &grid))?;
            }

            for (values, (r, g, b)) in self.series {
                chart.draw_series(LineSeries::new(
                    radar_points(values, self.max),
                    &RGBColor(*r, *g, *b),
                ))?;
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}

/// Closed polygon for radar `values` (first point repeated at the end).
///
/// Axis `i` sits at angle `π/2 - 2πi/n`; values are clamped to `[0, max]`.
pub fn radar_points(values: &[f64], max: f64) -> Vec<(f64, f64)> {
    let n = values.len();
    if n == 0 || !(max > 0.0) {
        return Vec::new();
    }

    let mut out: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let r = (v / max).clamp(0.0, 1.0);
            let theta = std::f64::consts::FRAC_PI_2 - std::f64::consts::TAU * i as f64 / n as f64;
            (r * theta.cos(), r * theta.sin())
        })
        .collect();
    out.push(out[0]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radar_points_go_clockwise_from_top() {
        let pts = radar_points(&[100.0, 50.0, 100.0, 0.0], 100.0);
        assert_eq!(pts.len(), 5);
        let close = |a: (f64, f64), b: (f64, f64)| (a.0 - b.0).abs() < 1e-12 && (a.1 - b.1).abs() < 1e-12;
        assert!(close(pts[0], (0.0, 1.0)));
        assert!(close(pts[1], (0.5, 0.0)));
        assert!(close(pts[2], (0.0, -1.0)));
        assert!(close(pts[3], (0.0, 0.0)));
        assert_eq!(pts[4], pts[0]);
    }

    #[test]
    fn radar_points_clamp_out_of_range_values() {
        let pts = radar_points(&[250.0, -5.0, 100.0], 100.0);
        assert!((pts[0].1 - 1.0).abs() < 1e-12);
        assert!(pts[1].0.abs() < 1e-12 && pts[1].1.abs() < 1e-12);
    }

    fn painted_cells(buf: &Buffer) -> usize {
        buf.content().iter().filter(|c| c.symbol() != " ").count()
    }

    #[test]
    fn bar_chart_paints_filled_bars() {
        let bars: Vec<Bar> = ArchitectureId::ALL
            .iter()
            .zip([585.0, 375.0, 285.0])
            .map(|(id, value)| Bar {
                value,
                color: arch_rgb(*id),
            })
            .collect();
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        BarChartWidget {
            bars: &bars,
            y_label: "USD",
            fmt_y: |v| format!("{v:.0}"),
        }
        .render(area, &mut buf);
        assert!(painted_cells(&buf) > 0);
    }

    #[test]
    fn small_area_shows_resize_hint() {
        let area = Rect::new(0, 0, 50, 4);
        let mut buf = Buffer::empty(area);
        BarChartWidget {
            bars: &[],
            y_label: "USD",
            fmt_y: |v| format!("{v:.0}"),
        }
        .render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "C");
    }

    #[test]
    fn palette_is_distinct() {
        let colors: Vec<_> = ArchitectureId::ALL.iter().map(|id| arch_rgb(*id)).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }
}
