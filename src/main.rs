//! polidiff: structural diff and integrity analysis for policy documents
//!
//! Compares two revisions of a policy document at section level and scores
//! how trustworthy the comparison itself is.

#![allow(
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    clippy::needless_pass_by_value
)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use polidiff::{
    cli,
    config::{AppConfig, CompareConfig, ComparePaths, InspectConfig},
    pipeline::exit_codes,
    reports::{ErrorResponse, ReportFormat},
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput Formats:",
        "\n  Plain text (UTF-8, UTF-8 with BOM, Latin-1)",
        "\n\nOutput Formats:",
        "\n  summary, json, markdown",
        "\n\nFeatures:",
        "\n  Section matching, movement detection, integrity scoring, narrative generation"
    )
}

#[derive(Parser)]
#[command(name = "polidiff")]
#[command(version, long_version = build_long_version())]
#[command(about = "Structural diff and integrity analysis for policy documents", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No changes detected (or no fail flags given)
    1  Changes detected (--fail-on-change)
    2  Low comparison integrity (--fail-on-low-integrity)
    3  Error occurred

EXAMPLES:
    # Quick comparison of two revisions
    polidiff compare old.txt new.txt

    # CI/CD pipeline check
    polidiff compare old.txt new.txt -o json --fail-on-change --fail-on-low-integrity

    # Markdown report with a generated narrative
    polidiff compare old.txt new.txt -o markdown --narrative > report.md

    # Show the recognized structure of a single document
    polidiff inspect policy.txt")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `compare` subcommand
#[derive(Parser)]
struct CompareArgs {
    /// Path to the old/baseline document
    old: PathBuf,

    /// Path to the new document
    new: PathBuf,

    /// Output format
    #[arg(short, long, alias = "format", default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Include a generated narrative in the report
    #[arg(long)]
    narrative: bool,

    /// Exit with code 1 if any changes detected
    #[arg(long, alias = "fail-on-changes")]
    fail_on_change: bool,

    /// Exit with code 2 if comparison integrity is low
    #[arg(long)]
    fail_on_low_integrity: bool,

    /// Maximum input document size in bytes (default: 16 MiB)
    #[arg(long)]
    max_document_bytes: Option<u64>,
}

/// Arguments for the `inspect` subcommand
#[derive(Parser)]
struct InspectArgs {
    /// Path to the document
    document: PathBuf,

    /// Output format
    #[arg(short, long, alias = "format", default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Maximum input document size in bytes (default: 16 MiB)
    #[arg(long)]
    max_document_bytes: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two revisions of a policy document
    Compare(CompareArgs),

    /// Show the recognized structure of a single document
    Inspect(InspectArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .polidiff.yaml in the current directory
    Init,
    /// Generate JSON Schema for the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. Reports go to stdout, logs stay on stderr.
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    // Dispatch to command handlers
    match cli.command {
        Commands::Compare(args) => {
            let overlay = {
                let mut builder = AppConfig::builder()
                    .output_format(args.output)
                    .output_file(args.output_file)
                    .no_color(cli.no_color)
                    .fail_on_change(args.fail_on_change)
                    .fail_on_low_integrity(args.fail_on_low_integrity)
                    .quiet(cli.quiet)
                    .narrative(args.narrative);
                if let Some(bytes) = args.max_document_bytes {
                    builder = builder.max_document_bytes(bytes);
                }
                builder.build()
            };
            let (merged, _loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overlay);
            let format = merged.output.format;

            let config = CompareConfig {
                paths: ComparePaths {
                    old: args.old,
                    new: args.new,
                },
                output: merged.output,
                behavior: merged.behavior,
                limits: merged.limits,
                narrative: merged.narrative,
            };

            let exit_code =
                cli::run_compare(config).unwrap_or_else(|err| report_error(format, &err));
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Inspect(args) => {
            let overlay = {
                let mut builder = AppConfig::builder()
                    .output_format(args.output)
                    .output_file(args.output_file)
                    .no_color(cli.no_color)
                    .quiet(cli.quiet);
                if let Some(bytes) = args.max_document_bytes {
                    builder = builder.max_document_bytes(bytes);
                }
                builder.build()
            };
            let (merged, _loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overlay);
            let format = merged.output.format;

            let config = InspectConfig {
                path: args.document,
                output: merged.output,
                behavior: merged.behavior,
                limits: merged.limits,
            };

            let exit_code =
                cli::run_inspect(config).unwrap_or_else(|err| report_error(format, &err));
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "polidiff", &mut io::stdout());
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = polidiff::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    ::dirs::config_dir().map(|p| p.join("polidiff").display().to_string()),
                    ::dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in &[
                    ".polidiff.yaml",
                    ".polidiff.yml",
                    "polidiff.yaml",
                    "polidiff.yml",
                ] {
                    eprintln!("  {name}");
                }
                eprintln!();
                match polidiff::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".polidiff.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = polidiff::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
            ConfigAction::Schema { output } => {
                let schema = polidiff::config::generate_json_schema();
                match output {
                    Some(path) => {
                        std::fs::write(&path, &schema)?;
                        eprintln!("Schema written to {}", path.display());
                    }
                    None => println!("{schema}"),
                }
                Ok(())
            }
        },
    }
}

/// Print an error on stderr, plus a JSON envelope on stdout when JSON output
/// was requested so scripted callers always get parseable output.
fn report_error(format: ReportFormat, err: &anyhow::Error) -> i32 {
    if format == ReportFormat::Json {
        let payload = ErrorResponse::new(format!("{err:#}"));
        if let Ok(json) = serde_json::to_string_pretty(&payload) {
            println!("{json}");
        }
    }
    eprintln!("Error: {err:#}");
    exit_codes::ERROR
}
