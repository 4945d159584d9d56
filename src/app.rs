//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments (plus `.env` / environment)
//! - evaluates the architecture catalog for the workload
//! - scores, ranks and recommends
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, ScoreArgs, ShowArgs, SweepArgs, WorkloadArgs};
use crate::domain::{ScoreConfig, Workload};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `garch` binary.
pub fn run() -> Result<(), AppError> {
    // Workload flags read GARCH_* variables, which may live in `.env`.
    dotenvy::dotenv().ok();

    // We want `garch` and `garch --cost 9` to behave like `garch tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    // The TUI owns the terminal and sets up its own (file) logging.
    if !matches!(cli.command, Command::Tui(_)) {
        crate::logging::init_stderr();
    }

    match cli.command {
        Command::Score(args) => handle_score(args, OutputMode::Full),
        Command::Rank(args) => handle_score(args, OutputMode::RankOnly),
        Command::Sweep(args) => handle_sweep(args),
        Command::Show(args) => handle_show(args),
        Command::Tui(args) => handle_tui(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    RankOnly,
}

fn handle_score(args: ScoreArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = score_config_from_args(&args);
    let run = pipeline::run_score(&config)?;

    match mode {
        OutputMode::Full => {
            println!("{}", crate::report::format_run_summary(&run, &config));
        }
        OutputMode::RankOnly => {}
    }

    println!("{}", crate::report::format_rankings(&run.ranking, &run.options));

    if mode == OutputMode::Full {
        println!("{}", crate::report::format_comparison_table(&run.options, &run.ranking));
        println!("{}", crate::report::format_insights(&run.options));
        println!("{}", crate::report::format_projections(&run.options));

        if config.plot {
            println!(
                "{}",
                crate::plot::render_comparison_bars(&run.options, &run.ranking, config.plot_width)
            );
            println!(
                "{}",
                crate::plot::render_projection_plot(&run.options, 12, config.plot_width, config.plot_height)
            );
        }
    }

    // Optional exports.
    if let Some(path) = &config.export_results {
        crate::io::export::write_results_csv(path, &run)?;
        tracing::info!(path = %path.display(), "wrote results CSV");
    }
    if let Some(path) = &config.export_scorecard {
        let card = pipeline::build_scorecard(&config, &run);
        crate::io::scorecard::write_scorecard_json(path, &card)?;
        tracing::info!(path = %path.display(), "wrote scorecard JSON");
    }

    Ok(())
}

fn handle_sweep(args: SweepArgs) -> Result<(), AppError> {
    let workload = workload_from_args(&args.workload);
    let options = crate::data::evaluate_all(&workload)?;
    let summary = crate::score::sweep(&options, args.step, args.normalization)?;

    if args.json {
        let text = serde_json::to_string_pretty(&summary)
            .map_err(|e| AppError::new(4, format!("Failed to encode sweep summary: {e}")))?;
        println!("{text}");
    } else {
        println!("{}", crate::report::format_sweep(&summary, &options));
    }
    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let card = crate::io::scorecard::read_scorecard_json(&args.scorecard)?;

    println!("{}", crate::report::format_scorecard_header(&card));
    if let Some(rec) = crate::score::recommend(&card.ranking, &card.options) {
        println!("{}", crate::report::format_recommendation(&rec));
    }
    println!("{}", crate::report::format_rankings(&card.ranking, &card.options));
    println!("{}", crate::report::format_comparison_table(&card.options, &card.ranking));

    if args.plot {
        println!(
            "{}",
            crate::plot::render_comparison_bars(&card.options, &card.ranking, args.width)
        );
        println!(
            "{}",
            crate::plot::render_projection_plot(&card.options, 12, args.width, args.height)
        );
    }
    Ok(())
}

fn handle_tui(args: ScoreArgs) -> Result<(), AppError> {
    crate::tui::run(args)
}

fn workload_from_args(args: &WorkloadArgs) -> Workload {
    Workload {
        storage_gb: args.storage_gb,
        requests_millions: args.requests_millions,
    }
}

pub fn score_config_from_args(args: &ScoreArgs) -> ScoreConfig {
    ScoreConfig {
        workload: workload_from_args(&args.workload),
        weights: args.priorities.priority_weights(),
        normalization: args.priorities.normalization,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_results: args.export.clone(),
        export_scorecard: args.export_json.clone(),
    }
}

/// Rewrite argv so `garch` defaults to `garch tui`.
///
/// Rules:
/// - `garch`                      -> `garch tui`
/// - `garch --cost 9 ...`         -> `garch tui --cost 9 ...`
/// - `garch --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "score" | "rank" | "sweep" | "show" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
