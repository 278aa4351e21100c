use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use haptic_feedback::api::FeedbackKind;
use haptic_feedback::backend::PatternLoader;
use haptic_feedback::config::HapticsConfig;
use haptic_feedback::context::HapticsContext;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(
    name = "haptics-cli",
    about = "Diagnostics for the haptic feedback backend compiled into this build"
)]
struct Cli {
    /// JSON config file (defaults to assets/haptics_config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log backend activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize the service and report its state
    Status {
        #[arg(long)]
        json: bool,
    },
    /// Trigger one feedback kind (light, medium, heavy, selection)
    Trigger { kind: FeedbackKind },
    /// Play a custom pattern through the active backend
    Custom { pattern: String },
    /// Resolve and validate a pattern file without playing it
    CheckPattern {
        pattern: String,
        /// Directory to search instead of the configured ones (repeatable)
        #[arg(long = "search-dir")]
        search_dirs: Vec<PathBuf>,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => HapticsConfig::load_from_file(path),
        None => HapticsConfig::load_platform(),
    };

    match cli.command {
        Commands::Status { json } => run_status(config, json),
        Commands::Trigger { kind } => run_trigger(config, kind),
        Commands::Custom { pattern } => run_custom(config, &pattern),
        Commands::CheckPattern {
            pattern,
            search_dirs,
            json,
        } => run_check_pattern(config, &pattern, search_dirs, json),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run_status(config: HapticsConfig, json: bool) -> Result<ExitCode> {
    let context = HapticsContext::with_config(config);
    let initialized = context.init();
    let report = StatusReport {
        version: env!("CARGO_PKG_VERSION"),
        initialized,
        supported: context.is_supported(),
        backend: context.backend_name(),
    };
    context.dispose();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("version:     {}", report.version);
        println!("initialized: {}", report.initialized);
        println!("supported:   {}", report.supported);
        println!("backend:     {}", report.backend.unwrap_or("none"));
    }

    Ok(if initialized {
        ExitCode::from(0)
    } else {
        ExitCode::from(2)
    })
}

fn run_trigger(config: HapticsConfig, kind: FeedbackKind) -> Result<ExitCode> {
    let context = HapticsContext::with_config(config);
    if !context.init() {
        anyhow::bail!("haptics backend failed to initialize");
    }
    context.trigger(kind);
    println!(
        "triggered {} on {} backend (supported: {})",
        kind,
        context.backend_name().unwrap_or("none"),
        context.is_supported()
    );
    context.dispose();
    Ok(ExitCode::from(0))
}

fn run_custom(config: HapticsConfig, pattern: &str) -> Result<ExitCode> {
    let context = HapticsContext::with_config(config);
    if !context.init() {
        anyhow::bail!("haptics backend failed to initialize");
    }
    let started = context.trigger_custom(pattern);
    context.dispose();

    if started {
        println!("playing pattern {}", pattern);
        Ok(ExitCode::from(0))
    } else {
        eprintln!("pattern {} was not played", pattern);
        Ok(ExitCode::from(2))
    }
}

fn run_check_pattern(
    mut config: HapticsConfig,
    pattern: &str,
    search_dirs: Vec<PathBuf>,
    json: bool,
) -> Result<ExitCode> {
    if !search_dirs.is_empty() {
        config.patterns.search_dirs = search_dirs;
    }
    let loader = PatternLoader::new(&config.patterns);
    let path = loader
        .resolve(pattern)
        .with_context(|| format!("resolving pattern {}", pattern))?;
    let waveform = loader
        .load(pattern)
        .with_context(|| format!("loading pattern {}", pattern))?;

    let report = PatternReport {
        pattern,
        path: path.display().to_string(),
        segments: waveform.segment_count(),
        total_duration_ms: waveform.total_duration_ms(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} -> {} ({} segments, {}ms)",
            report.pattern, report.path, report.segments, report.total_duration_ms
        );
    }
    Ok(ExitCode::from(0))
}

#[derive(Serialize)]
struct StatusReport {
    version: &'static str,
    initialized: bool,
    supported: bool,
    backend: Option<&'static str>,
}

#[derive(Serialize)]
struct PatternReport<'a> {
    pattern: &'a str,
    path: String,
    segments: usize,
    total_duration_ms: u64,
}
