//! Ratatui-based terminal UI.
//!
//! The TUI provides a settings panel for priority weights and workload size,
//! then renders the ranking and one of five views (cost, carbon, multi-factor
//! radar, projections, details).

use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Tabs, Wrap},
};

use crate::app::pipeline::RunOutput;
use crate::cli::ScoreArgs;
use crate::data::catalog;
use crate::domain::{ArchitectureOption, Dimension, ScoreConfig};
use crate::error::AppError;
use crate::report::{
    Insights, RADAR_AXES, SCORE_BENCHMARK, SCORE_TARGET, ScoreBand, benchmark_delta, cumulative_costs, fmt_usd,
    group_thousands, radar_values, trees_to_offset,
};

mod plotters_chart;

use plotters_chart::{Bar, BarChartWidget, LineChartWidget, RadarChartWidget, arch_color, arch_rgb};

const WEIGHT_MAX: f64 = 10.0;
const STORAGE_STEP: f64 = 100.0;
const STORAGE_RANGE: (f64, f64) = (100.0, 10_000.0);
const REQUESTS_STEP: f64 = 10.0;
const REQUESTS_RANGE: (f64, f64) = (1.0, 1_000.0);
const PROJECTION_MONTHS: u32 = 12;

/// Start the TUI.
pub fn run(args: ScoreArgs) -> Result<(), AppError> {
    if let Some(path) = crate::logging::init_for_tui(Path::new(crate::logging::TUI_LOG_FILE))? {
        tracing::info!(log = %path.display(), "tui logging enabled");
    }

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(crate::app::score_config_from_args(&args));
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Cost,
    Carbon,
    MultiFactor,
    Projections,
    Details,
}

impl View {
    const ALL: [View; 5] = [
        View::Cost,
        View::Carbon,
        View::MultiFactor,
        View::Projections,
        View::Details,
    ];

    fn title(self) -> &'static str {
        match self {
            View::Cost => "Cost",
            View::Carbon => "Carbon",
            View::MultiFactor => "Multi-factor",
            View::Projections => "Projections",
            View::Details => "Details",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Settings rows, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Weight(Dimension),
    StorageGb,
    RequestsMillions,
}

const FIELDS: [Field; 5] = [
    Field::Weight(Dimension::Cost),
    Field::Weight(Dimension::Carbon),
    Field::Weight(Dimension::Security),
    Field::StorageGb,
    Field::RequestsMillions,
];

struct App {
    config: ScoreConfig,
    selected_field: usize,
    view: View,
    status: String,
    run: Option<RunOutput>,
}

impl App {
    fn new(config: ScoreConfig) -> Self {
        let mut app = Self {
            config,
            selected_field: 0,
            view: View::Cost,
            status: "Ready.".to_string(),
            run: None,
        };
        app.recompute();
        app
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field + 1 < FIELDS.len() {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1.0),
            KeyCode::Right => self.adjust_field(1.0),
            KeyCode::Tab => self.view = self.view.next(),
            KeyCode::BackTab => self.view = self.view.prev(),
            KeyCode::Char('n') => {
                self.config.normalization = self.config.normalization.toggle();
                self.recompute();
                self.status = format!("normalization: {}", self.config.normalization.display_name());
            }
            KeyCode::Char('d') => match crate::debug::write_decision_bundle(&self.config) {
                Ok(path) => {
                    self.status = format!("Wrote decision bundle: {}", path.display());
                }
                Err(err) => {
                    self.status = format!("Bundle write failed: {err}");
                }
            },
            _ => {}
        }

        false
    }

    fn adjust_field(&mut self, delta: f64) {
        match FIELDS[self.selected_field] {
            Field::Weight(dim) => {
                let cur = self.config.weights.get(dim);
                let next = (cur.round() + delta).clamp(0.0, WEIGHT_MAX);
                self.config.weights.set(dim, next);
                self.status = format!("{dim}: {next:.0}");
            }
            Field::StorageGb => {
                let next = (self.config.workload.storage_gb + delta * STORAGE_STEP)
                    .clamp(STORAGE_RANGE.0, STORAGE_RANGE.1);
                self.config.workload.storage_gb = next;
                self.status = format!("storage: {} GB", group_thousands(next, 0));
            }
            Field::RequestsMillions => {
                let next = (self.config.workload.requests_millions + delta * REQUESTS_STEP)
                    .clamp(REQUESTS_RANGE.0, REQUESTS_RANGE.1);
                self.config.workload.requests_millions = next;
                self.status = format!("requests: {}M/month", group_thousands(next, 0));
            }
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        match crate::app::pipeline::run_score(&self.config) {
            Ok(run) => {
                self.run = Some(run);
            }
            Err(err) => {
                tracing::warn!(error = %err, "scoring failed");
                self.status = err.to_string();
                self.run = None;
            }
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("garch", Style::default().fg(Color::Cyan)),
            Span::raw(" - green architecture scorecard"),
        ]));

        let pct = self.config.weights.percentages();
        lines.push(Line::from(Span::styled(
            format!(
                "storage: {} GB | requests: {}M/month | weights: cost {:.0}% carbon {:.0}% security {:.0}% | {}",
                group_thousands(self.config.workload.storage_gb, 0),
                group_thousands(self.config.workload.requests_millions, 0),
                pct[0],
                pct[1],
                pct[2],
                self.config.normalization.display_name(),
            ),
            Style::default().fg(Color::Gray),
        )));

        if let Some(run) = &self.run {
            let rec = &run.recommendation;
            lines.push(Line::from(vec![
                Span::raw("Recommended: "),
                Span::styled(
                    format!("{} ({:.1}/100)", rec.name, rec.score * 100.0),
                    Style::default()
                        .fg(arch_color(rec.architecture_id))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", rec.reason), Style::default().fg(Color::Gray)),
            ]));
        }

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(38)])
            .split(area);

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, cols[0]);

        if let Some(run) = &self.run {
            frame.render_widget(winner_gauge(run.recommendation.score), cols[1]);
        }
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(36), Constraint::Min(0)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(cols[0]);
        self.draw_settings(frame, left[0]);
        self.draw_ranking(frame, left[1]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(cols[1]);
        self.draw_tabs(frame, right[0]);
        self.draw_view(frame, right[1]);
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let w = &self.config.weights;
        let items = vec![
            ListItem::new(format!("Cost       {}", slider(w.cost))),
            ListItem::new(format!("Carbon     {}", slider(w.carbon))),
            ListItem::new(format!("Security   {}", slider(w.security))),
            ListItem::new(format!(
                "Storage    {} GB",
                group_thousands(self.config.workload.storage_gb, 0)
            )),
            ListItem::new(format!(
                "Requests   {}M/mo",
                group_thousands(self.config.workload.requests_millions, 0)
            )),
        ];

        let list = List::new(items)
            .block(Block::default().title("Settings").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_ranking(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Ranking").borders(Borders::ALL);
        let Some(run) = &self.run else {
            let msg = Paragraph::new("No ranking (see status).")
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(msg, area);
            return;
        };

        let mut lines = Vec::new();
        for (i, r) in run.ranking.results.iter().enumerate() {
            let name = run
                .option(r.architecture_id)
                .map(|o| o.name.as_str())
                .unwrap_or_else(|| r.architecture_id.as_str());
            lines.push(Line::from(vec![
                Span::raw(format!("{}. ", i + 1)),
                Span::styled(
                    format!("{name:<21}"),
                    Style::default().fg(arch_color(r.architecture_id)),
                ),
                Span::raw(format!("{:>5.1}", r.composite_score * 100.0)),
            ]));
            lines.push(Line::from(Span::styled(
                format!(
                    "   cost {:.2} carbon {:.2} sec {:.2}",
                    r.breakdown.cost, r.breakdown.carbon, r.breakdown.security
                ),
                Style::default().fg(Color::Gray),
            )));
        }

        frame.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
    }

    fn draw_tabs(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let tabs = Tabs::new(View::ALL.iter().map(|v| v.title()))
            .select(self.view.index())
            .block(Block::default().borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, area);
    }

    fn draw_view(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title(self.view.title()).borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        if self.view == View::Details {
            draw_details(frame, inner);
            return;
        }

        let Some(run) = &self.run else {
            let msg = Paragraph::new("Waiting for valid inputs...").style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        };

        match self.view {
            View::Cost => draw_cost(frame, inner, &run.options),
            View::Carbon => draw_carbon(frame, inner, &run.options),
            View::MultiFactor => draw_radar(frame, inner, &run.options),
            View::Projections => draw_projections(frame, inner, &run.options),
            View::Details => {}
        }
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  Tab view  n normalization  d bundle  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Winner score gauge, coloured by band, labelled with the benchmark delta.
fn winner_gauge(score: f64) -> Gauge<'static> {
    let pct = score * 100.0;
    let (r, g, b) = ScoreBand::of(pct).rgb();
    Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Winner score (target {SCORE_TARGET:.0})")),
        )
        .gauge_style(Style::default().fg(Color::Rgb(r, g, b)).bg(Color::DarkGray))
        .ratio(score.clamp(0.0, 1.0))
        .label(format!(
            "{pct:.1} {} {:+.1} vs {SCORE_BENCHMARK:.0}",
            ScoreBand::of(pct).label(),
            benchmark_delta(pct)
        ))
}

fn slider(v: f64) -> String {
    let filled = v.round().clamp(0.0, WEIGHT_MAX) as usize;
    format!(
        "[{}{}] {:>2.0}",
        "■".repeat(filled),
        "·".repeat(WEIGHT_MAX as usize - filled),
        v
    )
}

/// Split `area` into a chart and a legend strip of `legend_rows` lines.
fn chart_and_legend(area: Rect, legend_rows: u16) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(legend_rows)])
        .split(area);
    (chunks[0], chunks[1])
}

fn legend_line(option: &ArchitectureOption, detail: String) -> Line<'static> {
    Line::from(vec![
        Span::styled("■ ", Style::default().fg(arch_color(option.id))),
        Span::styled(format!("{:<22}", option.name), Style::default().fg(arch_color(option.id))),
        Span::raw(detail),
    ])
}

fn bars(options: &[ArchitectureOption], value: fn(&ArchitectureOption) -> f64) -> Vec<Bar> {
    options
        .iter()
        .map(|o| Bar {
            value: value(o),
            color: arch_rgb(o.id),
        })
        .collect()
}

fn draw_cost(frame: &mut ratatui::Frame<'_>, area: Rect, options: &[ArchitectureOption]) {
    let (chart, legend) = chart_and_legend(area, options.len() as u16 + 2);
    let data = bars(options, |o| o.monthly_cost);
    frame.render_widget(
        BarChartWidget {
            bars: &data,
            y_label: "USD / month",
            fmt_y: fmt_axis_usd,
        },
        chart,
    );

    let mut lines: Vec<Line> = options
        .iter()
        .map(|o| {
            legend_line(
                o,
                format!(
                    "{}/mo  {}/yr  {} 5-yr",
                    fmt_usd(o.monthly_cost, 2),
                    fmt_usd(o.annual_cost, 0),
                    fmt_usd(o.five_year_cost, 0)
                ),
            )
        })
        .collect();
    if let Some(i) = Insights::compute(options) {
        lines.push(Line::from(Span::styled(
            format!(
                "{} saves {}/yr vs {}",
                i.cheapest.name,
                fmt_usd(i.annual_savings(), 2),
                i.priciest.name
            ),
            Style::default().fg(Color::Green),
        )));
    }
    frame.render_widget(Paragraph::new(Text::from(lines)), legend);
}

fn draw_carbon(frame: &mut ratatui::Frame<'_>, area: Rect, options: &[ArchitectureOption]) {
    let (chart, legend) = chart_and_legend(area, options.len() as u16 + 2);
    let data = bars(options, |o| o.monthly_carbon);
    frame.render_widget(
        BarChartWidget {
            bars: &data,
            y_label: "kg CO2 / month",
            fmt_y: fmt_axis_plain,
        },
        chart,
    );

    let mut lines: Vec<Line> = options
        .iter()
        .map(|o| {
            legend_line(
                o,
                format!(
                    "{:.1} kg/mo  {:.0} kg/yr  ≈ {:.0} trees",
                    o.monthly_carbon,
                    o.annual_carbon,
                    trees_to_offset(o.annual_carbon)
                ),
            )
        })
        .collect();
    if let Some(i) = Insights::compute(options) {
        lines.push(Line::from(Span::styled(
            format!(
                "{} avoids {:.0} kg CO2/yr vs {}",
                i.greenest.name,
                i.annual_carbon_saved(),
                i.dirtiest.name
            ),
            Style::default().fg(Color::Green),
        )));
    }
    frame.render_widget(Paragraph::new(Text::from(lines)), legend);
}

fn draw_radar(frame: &mut ratatui::Frame<'_>, area: Rect, options: &[ArchitectureOption]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(40)])
        .split(area);

    let series: Vec<(Vec<f64>, (u8, u8, u8))> = options
        .iter()
        .map(|o| (radar_values(o).to_vec(), arch_rgb(o.id)))
        .collect();
    frame.render_widget(
        RadarChartWidget {
            series: &series,
            axes: RADAR_AXES.len(),
            max: 100.0,
        },
        cols[0],
    );

    let arrows = ["↑", "→", "↓", "←"];
    let mut lines: Vec<Line> = RADAR_AXES
        .iter()
        .zip(arrows)
        .map(|(axis, arrow)| Line::from(Span::styled(format!("{arrow} {axis}"), Style::default().fg(Color::Gray))))
        .collect();
    lines.push(Line::raw(""));
    for o in options {
        let v = radar_values(o);
        lines.push(Line::from(Span::styled(o.name.clone(), Style::default().fg(arch_color(o.id)))));
        lines.push(Line::raw(format!(
            "  {:.0} / {:.0} / {:.0} / {:.2}",
            v[0], v[1], v[2], v[3]
        )));
    }
    frame.render_widget(Paragraph::new(Text::from(lines)), cols[1]);
}

fn draw_projections(frame: &mut ratatui::Frame<'_>, area: Rect, options: &[ArchitectureOption]) {
    let (chart, legend) = chart_and_legend(area, options.len() as u16);

    let series: Vec<(Vec<(f64, f64)>, (u8, u8, u8))> = options
        .iter()
        .map(|o| (cumulative_costs(o, PROJECTION_MONTHS), arch_rgb(o.id)))
        .collect();
    let y_top = series
        .iter()
        .flat_map(|(pts, _)| pts.iter().map(|(_, y)| *y))
        .fold(0.0_f64, f64::max)
        .max(1.0);

    frame.render_widget(
        LineChartWidget {
            series: &series,
            x_bounds: [1.0, f64::from(PROJECTION_MONTHS)],
            y_bounds: [0.0, y_top * 1.05],
            x_label: "month",
            y_label: "cumulative USD",
            fmt_x: fmt_axis_month,
            fmt_y: fmt_axis_usd,
        },
        chart,
    );

    let lines: Vec<Line> = options
        .iter()
        .map(|o| {
            legend_line(
                o,
                format!(
                    "12-month {}  5-year TCO {}",
                    fmt_usd(o.annual_cost, 0),
                    fmt_usd(o.five_year_cost, 0)
                ),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(Text::from(lines)), legend);
}

fn draw_details(frame: &mut ratatui::Frame<'_>, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for p in catalog() {
        lines.push(Line::from(vec![
            Span::styled(
                p.name,
                Style::default().fg(arch_color(p.id)).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", p.description), Style::default().fg(Color::Gray)),
        ]));
        let checklist: Vec<String> = p
            .security
            .items()
            .iter()
            .map(|(name, v)| format!("{name} {v}"))
            .collect();
        lines.push(Line::raw(format!(
            "  Security ({:.0}/100): {}",
            p.security.coverage(),
            checklist.join(", ")
        )));
        lines.push(Line::raw(format!(
            "  Pricing: base ${}/mo, ${}/GB, ${}/M requests | Availability {}%",
            p.base_cost, p.cost_per_gb, p.cost_per_million_requests, p.availability
        )));
        lines.push(Line::raw(format!("  Best for: {}", p.use_cases.join("; "))));
        lines.push(Line::raw(""));
    }
    frame.render_widget(Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }), area);
}

fn fmt_axis_usd(v: f64) -> String {
    format!("${}", group_thousands(v, 0))
}

fn fmt_axis_plain(v: f64) -> String {
    format!("{v:.0}")
}

fn fmt_axis_month(v: f64) -> String {
    format!("{v:.0}")
}
