//! panediff CLI
//!
//! Command-line interface for the panediff engine

use clap::{Parser, Subcommand, ValueEnum};
use panediff_core::diff::DiffAlgorithm;
use panediff_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "panediff")]
#[command(about = "panediff - line and word level text diffs", long_about = None)]
struct Cli {
    /// Sequence diff algorithm
    #[arg(long, global = true, value_enum, default_value_t = AlgorithmArg::Myers)]
    algorithm: AlgorithmArg,

    /// Log output on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Off)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print a unified patch
    Unified(commands::unified::UnifiedArgs),
    /// Print the two documents as aligned columns
    SideBySide(commands::side_by_side::SideBySideArgs),
    /// Print the raw line run list
    Lines(commands::lines::LinesArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Myers,
    Patience,
    Lcs,
}

impl From<AlgorithmArg> for DiffAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Myers => DiffAlgorithm::Myers,
            AlgorithmArg::Patience => DiffAlgorithm::Patience,
            AlgorithmArg::Lcs => DiffAlgorithm::Lcs,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Off,
    Pretty,
    Json,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Off => Profile::Test,
            LogFormat::Pretty => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init(cli.log_format.into());

    let engine = commands::engine(cli.algorithm.into());
    let result = match cli.command {
        Commands::Unified(args) => commands::unified::execute(args, &engine),
        Commands::SideBySide(args) => commands::side_by_side::execute(args, &engine),
        Commands::Lines(args) => commands::lines::execute(args, &engine),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
