use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use nameconv::checker::{collect_files, ConventionChecker};
use nameconv::cli::output::{self, OutputFormat};
use nameconv::config::{Config, Overrides};
use nameconv::{cli, detect, path, segment, Convention};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "nameconv")]
#[command(version, about = "Split identifiers and convert between naming conventions", long_about = None)]
struct Cli {
    /// Output format (text, json)
    #[arg(short = 'o', long, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log debug information to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of ./.nameconv.toml
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the words an identifier is made of
    Split {
        #[arg(value_name = "IDENT", required = true)]
        identifiers: Vec<String>,
    },
    /// Convert identifiers to a naming convention (reads stdin when none given)
    Convert {
        /// Target convention (snake, chain, kebab, camel, pascal, flat, upper)
        #[arg(short, long)]
        to: Option<Convention>,

        /// Treat inputs as file names and keep directories and extensions
        #[arg(long)]
        keep_ext: bool,

        #[arg(value_name = "IDENT")]
        identifiers: Vec<String>,
    },
    /// List the conventions identifiers already follow
    Detect {
        #[arg(value_name = "IDENT", required = true)]
        identifiers: Vec<String>,
    },
    /// Report identifiers in files that break a naming convention
    Check {
        /// Expected convention
        #[arg(short, long)]
        expect: Option<Convention>,

        /// Pattern to ignore (regex)
        #[arg(long)]
        ignore_pattern: Vec<String>,

        /// Exit with code 0 even if identifiers are reported
        #[arg(long)]
        no_fail: bool,

        /// Files or directories to check
        #[arg(value_name = "PATHS", required = true)]
        paths: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "nameconv", &mut io::stdout());
        return Ok(());
    }

    let Some(command) = cli.command else {
        anyhow::bail!("No command specified. Use --help for usage information.");
    };

    let mut overrides = Overrides {
        format: cli.format,
        no_color: cli.no_color,
        config_file: cli.config,
        ..Default::default()
    };
    match &command {
        Commands::Convert { to, .. } => overrides.convention = *to,
        Commands::Check {
            expect,
            ignore_pattern,
            ..
        } => {
            overrides.convention = *expect;
            overrides.ignore_patterns = ignore_pattern.clone();
        }
        Commands::Split { .. } | Commands::Detect { .. } => {}
    }
    let config = Config::load(overrides)?;

    handle_command(command, &config)
}

fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Split { identifiers } => {
            let splits: Vec<_> = identifiers
                .iter()
                .map(|ident| (ident.as_str(), segment(ident)))
                .collect();
            output::print_splits(&splits, config.color, config.format)?;
        }
        Commands::Convert {
            keep_ext,
            identifiers,
            ..
        } => {
            let convention = config.default_convention;
            let identifiers = cli::read_identifiers(identifiers, io::stdin().lock())?;
            let conversions: Vec<_> = identifiers
                .into_iter()
                .map(|ident| {
                    let converted = if keep_ext {
                        path::convert_file_name(convention, &ident)
                    } else {
                        convention.convert(&ident)
                    };
                    (ident, converted)
                })
                .collect();
            output::print_conversions(&conversions, convention, config.color, config.format)?;
        }
        Commands::Detect { identifiers } => {
            let detections: Vec<_> = identifiers
                .into_iter()
                .map(|ident| {
                    let conventions = detect(&ident);
                    (ident, conventions)
                })
                .collect();
            output::print_detections(&detections, config.color, config.format)?;
        }
        Commands::Check { no_fail, paths, .. } => {
            let checker = ConventionChecker::new(config.default_convention, config);
            let files = collect_files(&paths)?;

            let mut results = Vec::with_capacity(files.len());
            for file_path in &files {
                match checker.check_file(file_path) {
                    Ok(result) => results.push(result),
                    // Unreadable files are skipped, not fatal
                    Err(e) => tracing::warn!("Skipping {}: {:#}", file_path.display(), e),
                }
            }

            output::print_check_report(&results, checker.expected(), config.color, config.format)?;

            let total: usize = results.iter().map(|r| r.findings.len()).sum();
            if total > 0 && !no_fail {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
