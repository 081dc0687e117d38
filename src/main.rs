use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::cmp::max;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

mod config;
mod driver;

use config::FileConfig;
use driver::{run_batch, triangulate_file, BatchOptions, Outcome};
use earclip::EarClipper;

/// Ear-clipping triangulation of polygon files
///
/// Examples:
///   # Triangulate one polygon and print the triangles
///   polyclip triangulate input.txt
///
///   # Triangulate every case directory under ./file that has no output yet
///   polyclip batch ./file
#[derive(Parser, Debug)]
#[command(name = "polyclip")]
#[command(version, about, long_about = None)]
struct Cli {
    #[clap(flatten)]
    global_opts: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug, Args)]
struct GlobalOpts {
    /// Path to config file (optional, auto-searches polyclip.toml if not provided)
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    /// Enable debug mode. This will increase the verbosity and detail of the logs.
    #[arg(global = true, long, default_value_t = false)]
    debug: bool,

    /// Set the log level for the application [default: info]
    #[arg(global = true, long)]
    log_level: Option<LevelFilter>,

    /// Disable colored output in the logs.
    #[arg(global = true, long, default_value_t = false)]
    no_colors: bool,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Triangulate a single polygon file
    Triangulate {
        /// Polygon file: a vertex count followed by one "x y" line per vertex
        input: PathBuf,

        /// Output triangle file (defaults to stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Triangulate every case directory under a root directory
    Batch {
        /// Directory whose sub-directories each hold one polygon file
        root: PathBuf,

        /// Polygon file name inside each case directory
        #[arg(long)]
        input_name: Option<String>,

        /// Triangle file name written inside each case directory
        #[arg(long)]
        output_name: Option<String>,

        /// Overwrite existing output files
        #[arg(short = 'f', long)]
        force: bool,
    },
}

fn init_logger(global_opts: &GlobalOpts, file_config: &FileConfig) -> Result<()> {
    let configured = match &file_config.log_level {
        Some(level) => Some(
            LevelFilter::from_str(level)
                .map_err(|_| anyhow!("Invalid log level in config: {:?}", level))?,
        ),
        None => None,
    };
    let log_level = global_opts.log_level.or(configured).unwrap_or(LevelFilter::Info);

    // If debug mode is enabled, set the log level minimum to Debug
    let log_level = if global_opts.debug {
        max(LevelFilter::Debug, log_level)
    } else {
        log_level
    };

    let mut config_builder = ConfigBuilder::new();
    if global_opts.debug {
        config_builder.set_time_level(LevelFilter::Error);
        config_builder.set_time_format_rfc3339();
        config_builder.set_target_level(LevelFilter::Error);
    } else {
        config_builder.set_time_level(LevelFilter::Off);
        config_builder.set_target_level(LevelFilter::Off);
    }
    config_builder.set_thread_level(LevelFilter::Off);
    config_builder.set_location_level(LevelFilter::Off);

    let color_choice = if global_opts.no_colors {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    TermLogger::init(
        log_level,
        config_builder.build(),
        TerminalMode::Stderr,
        color_choice,
    )
    .context("Failed to initialize logger")
}

fn run(args: Cli) -> Result<ExitCode> {
    let file_config = match &args.global_opts.config {
        Some(path) => FileConfig::from_path(path)?,
        None => FileConfig::load().unwrap_or_default(),
    };
    init_logger(&args.global_opts, &file_config)?;

    match args.command {
        Commands::Triangulate { input, output } => {
            let mut clipper = EarClipper::new();
            match triangulate_file(&mut clipper, &input, output.as_deref())? {
                Outcome::Triangulated(count) => log::info!("{} triangles", count),
                Outcome::Rejected => eprintln!("intersect"),
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Batch {
            root,
            input_name,
            output_name,
            force,
        } => {
            if !root.is_dir() {
                bail!("Not a directory: {:?}", root);
            }
            let options = BatchOptions {
                input_name: input_name.unwrap_or(file_config.input_name),
                output_name: output_name.unwrap_or(file_config.output_name),
                force,
            };
            let summary = run_batch(&root, &options)?;
            log::info!(
                "Done: {} triangulated, {} rejected, {} skipped, {} failed",
                summary.triangulated,
                summary.rejected,
                summary.skipped,
                summary.failed
            );
            Ok(if summary.failed > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}

fn main() -> Result<ExitCode> {
    run(Cli::parse())
}
