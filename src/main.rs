mod config;
mod decay;
mod report;
mod sources;
mod web;

use clap::{Parser, Subcommand};
use std::path::Path;
use std::process::ExitCode;

use crate::config::{Config, ConfigError, SourceConfig};
use crate::decay::{generate_synthetic_batch, seeded_rng, EstimatorConfig, ReentryCandidate};
use crate::report::{build_report, Report, ReportOptions};
use crate::sources::{load_decay_predictions, load_gp_file, load_tle_file, SourceCatalog};

const DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

#[derive(Parser)]
#[command(name = "reentry-watch")]
#[command(about = "Reentry predictions and decay estimates for low orbiting objects")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a reentry report from the configured source files
    Estimate {
        #[arg(short, long)]
        config: Option<String>,
        /// Maximum altitude of analysed objects (km)
        #[arg(long)]
        altitude_filter: Option<f64>,
        #[arg(long)]
        no_rockets: bool,
        #[arg(long)]
        no_debris: bool,
        #[arg(long)]
        seed: Option<u64>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a synthetic demo batch
    Demo {
        #[arg(short = 'n', long, default_value_t = decay::DEFAULT_BATCH_SIZE)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// Validate a config file and every source file it names
    Validate { config: String },
    /// Serve the report over HTTP
    Serve {
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            config,
            altitude_filter,
            no_rockets,
            no_debris,
            seed,
            json,
        } => estimate(
            config.as_deref(),
            altitude_filter,
            !no_rockets,
            !no_debris,
            seed,
            json,
        ),
        Commands::Demo { count, seed, json } => demo(count, seed, json),
        Commands::Validate { config } => validate(&config),
        Commands::Serve { config } => serve(config.as_deref()),
    }
}

fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::from_file(path),
        None => Ok(Config::default()),
    }
}

fn estimate(
    config_path: Option<&str>,
    altitude_filter: Option<f64>,
    include_rockets: bool,
    include_debris: bool,
    seed: Option<u64>,
    json: bool,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut options = match ReportOptions::from_config(&config) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let filter = altitude_filter.unwrap_or(options.estimator.altitude_filter_km());
    options.estimator = match EstimatorConfig::new(
        filter,
        include_rockets && options.estimator.include_rockets(),
        include_debris && options.estimator.include_debris(),
    ) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Invalid arguments: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut catalog = SourceCatalog::new(config.space_track.clone(), config.celestrak.clone());
    catalog.load_all();

    let mut rng = seeded_rng(seed.or(config.seed));
    let report = build_report(&catalog, &options, chrono::Utc::now(), &mut rng);

    if json {
        return print_json(&report);
    }
    print_report(&report);
    ExitCode::SUCCESS
}

fn demo(count: usize, seed: Option<u64>, json: bool) -> ExitCode {
    if count == 0 {
        eprintln!("Count must be at least 1");
        return ExitCode::FAILURE;
    }

    let mut rng = seeded_rng(seed);
    let mut batch = generate_synthetic_batch(count, chrono::Utc::now(), &mut rng);
    batch.sort_by(|a, b| a.days_to_reentry.total_cmp(&b.days_to_reentry));

    if json {
        return print_json(&batch);
    }
    for candidate in &batch {
        print_candidate(candidate, "Demo/Backup Data");
    }
    ExitCode::SUCCESS
}

fn validate(path: &str) -> ExitCode {
    let config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Config is valid");
    let mut ok = true;
    for (name, source) in [
        ("space_track", &config.space_track),
        ("celestrak", &config.celestrak),
    ] {
        match source {
            Some(source) if source.enabled => ok &= validate_source(name, source),
            Some(_) => println!("  {}: disabled", name),
            None => println!("  {}: not configured", name),
        }
    }

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn validate_source(name: &str, source: &SourceConfig) -> bool {
    println!("  {}:", name);
    let mut ok = true;

    let mut check = |path: &Path, result: Result<usize, sources::SourceError>| match result {
        Ok(n) => println!("    {}: {} records", path.display(), n),
        Err(e) => {
            println!("    {}: {}", path.display(), e);
            ok = false;
        }
    };

    for path in &source.gp_files {
        check(path.as_path(), load_gp_file(path).map(|r| r.len()));
    }
    for path in &source.tle_files {
        check(path.as_path(), load_tle_file(path).map(|r| r.len()));
    }
    for path in &source.decay_prediction_files {
        check(path.as_path(), load_decay_predictions(path).map(|p| p.len()));
    }

    ok
}

fn serve(config_path: Option<&str>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(web::run_server(config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            println!("{}", s);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Serialization error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_report(report: &Report) {
    println!(
        "Report generated {} from {}",
        report.generated_at.format(DATE_FORMAT),
        report.sources_used.join(", ")
    );

    if !report.official_predictions.is_empty() {
        println!("\nOfficial predictions:");
        for p in &report.official_predictions {
            println!(
                "  {:<28} {:>8}  {}  +/- {} min",
                p.object_name, p.catalog_id, p.decay_epoch, p.uncertainty
            );
        }
    }

    if !report.candidates.is_empty() {
        println!("\nEstimated reentries:");
        for sourced in &report.candidates {
            print_candidate(&sourced.candidate, &sourced.source.to_string());
        }
    }

    let stats = &report.statistics;
    println!("\n{} objects, {} over {}", stats.total, stats.over_region, report.region.name);
    for (risk, count) in &stats.by_risk {
        println!("  {:<8} {}", risk, count);
    }
}

fn print_candidate(c: &ReentryCandidate, source: &str) {
    println!(
        "  {:<28} {:>10} {:>6.1} km {:>5.1} d  {}  {:<11} {:<8} {}",
        c.object_name,
        c.catalog_id,
        c.altitude_km,
        c.days_to_reentry,
        c.estimated_reentry.format(DATE_FORMAT),
        c.object_type.to_string(),
        c.risk_level.to_string(),
        source
    );
}
