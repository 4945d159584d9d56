//! ASCII/Unicode plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual comparison in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - horizontal bars: `#`
//! - cumulative cost lines: one marker letter per architecture

use crate::domain::{ArchitectureId, ArchitectureOption, Ranking};
use crate::report::{cumulative_costs, group_thousands};

/// Marker letter used for an architecture in line plots.
pub fn marker(id: ArchitectureId) -> char {
    match id {
        ArchitectureId::RdsMultiAz => 'R',
        ArchitectureId::DynamoDb => 'D',
        ArchitectureId::AuroraServerless => 'A',
    }
}

/// Render a horizontal bar chart. Bars scale against the largest value.
pub fn render_bar_chart(title: &str, bars: &[(String, f64)], width: usize, fmt_value: fn(f64) -> String) -> String {
    let width = width.max(10);
    let label_w = bars.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let max = bars.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');

    for (label, value) in bars {
        let len = if max > 0.0 && value.is_finite() {
            ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize
        } else {
            0
        };
        let line = format!(
            "{label:<label_w$} |{}{} {}",
            "#".repeat(len),
            " ".repeat(width - len),
            fmt_value(*value)
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// Monthly cost, monthly carbon and composite score bar charts.
pub fn render_comparison_bars(options: &[ArchitectureOption], ranking: &Ranking, width: usize) -> String {
    let cost: Vec<(String, f64)> = options.iter().map(|o| (o.name.clone(), o.monthly_cost)).collect();
    let carbon: Vec<(String, f64)> = options.iter().map(|o| (o.name.clone(), o.monthly_carbon)).collect();
    let score: Vec<(String, f64)> = ranking
        .results
        .iter()
        .map(|r| {
            let name = options
                .iter()
                .find(|o| o.id == r.architecture_id)
                .map(|o| o.name.clone())
                .unwrap_or_else(|| r.architecture_id.to_string());
            (name, r.composite_score * 100.0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&render_bar_chart("Monthly cost (USD):", &cost, width, fmt_usd0));
    out.push('\n');
    out.push_str(&render_bar_chart("Monthly carbon (kg CO2):", &carbon, width, fmt_kg));
    out.push('\n');
    out.push_str(&render_bar_chart("Overall score (/100):", &score, width, fmt_score));
    out
}

/// Plot cumulative cost over `months` for every option.
pub fn render_projection_plot(options: &[ArchitectureOption], months: u32, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);
    let months = months.max(2);

    let (m_min, m_max) = (1.0, f64::from(months));
    let y_top = options
        .iter()
        .map(|o| o.monthly_cost * f64::from(months))
        .fold(0.0_f64, f64::max);
    let (y_min, y_max) = pad_range(0.0, y_top.max(1.0), 0.05);

    let mut grid = vec![vec![' '; width]; height];

    for o in options {
        let ch = marker(o.id);
        let series = cumulative_costs(o, months);
        draw_series(&mut grid, &series, m_min, m_max, y_min, y_max, ch);
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Cumulative cost: months=[1, {months}] | y=[0, {}] USD\n",
        group_thousands(y_max, 0)
    ));
    for row in grid {
        out.push_str(row.into_iter().collect::<String>().trim_end());
        out.push('\n');
    }
    let legend: Vec<String> = options.iter().map(|o| format!("{}={}", marker(o.id), o.name)).collect();
    out.push_str(&legend.join("  "));
    out.push('\n');

    out
}

fn fmt_usd0(v: f64) -> String {
    format!("${}", group_thousands(v, 0))
}

fn fmt_kg(v: f64) -> String {
    format!("{v:.1} kg")
}

fn fmt_score(v: f64) -> String {
    format!("{v:.1}")
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min, max + pad)
}

fn map_x(t: f64, t_min: f64, t_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((t - t_min) / (t_max - t_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_series(
    grid: &mut [Vec<char>],
    series: &[(f64, f64)],
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    ch: char,
) {
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in series {
        let px = map_x(x, x_min, x_max, width);
        let py = map_y(y, y_min, y_max, height);
        if let Some((x0, y0)) = prev {
            draw_line(grid, x0, y0, px, py, ch);
        } else if grid[py][px] == ' ' {
            grid[py][px] = ch;
        }
        prev = Some((px, py));
    }
}

/// Integer line drawing (Bresenham-ish). Earlier series win on overlap.
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::evaluate_all;
    use crate::domain::Workload;

    #[test]
    fn bar_chart_golden_snapshot_small() {
        let bars = vec![("a".to_string(), 10.0), ("bb".to_string(), 5.0), ("c".to_string(), 0.0)];
        let txt = render_bar_chart("T", &bars, 10, fmt_score);
        let expected = format!(
            "T\na  |{} 10.0\nbb |{}{} 5.0\nc  |{} 0.0\n",
            "#".repeat(10),
            "#".repeat(5),
            " ".repeat(5),
            " ".repeat(10)
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn projection_plot_has_requested_rows_and_legend() {
        let options = evaluate_all(&Workload::default()).unwrap();
        let txt = render_projection_plot(&options, 12, 40, 8);
        let lines: Vec<&str> = txt.lines().collect();
        // header + grid rows + legend
        assert_eq!(lines.len(), 1 + 8 + 1);
        assert!(lines[0].starts_with("Cumulative cost: months=[1, 12]"));
        assert!(lines.last().unwrap().contains("R=RDS Multi-AZ"));
        // The most expensive option reaches the top row at month 12.
        assert!(lines[1].contains('R') || lines[2].contains('R'));
        // The cheapest month-1 cost sits in the bottom-left corner.
        assert!(!lines[8].starts_with(' '));
    }
}
