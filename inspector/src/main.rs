#![forbid(unsafe_code)]
use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use log::{debug, error};

mod analysis;
mod commands;

#[derive(Debug, Parser)]
#[command(author, version)]
/// Inspect MPLIB multi-project scheduling instances
struct App {
    #[command(flatten)]
    verbose: Verbosity,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print counts and precedence bounds of instance files or folders
    Summary {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Create a graphviz notation for the precedence graph of an instance
    Graph {
        instance_file: PathBuf,
        output: PathBuf,
    },
    /// Write a parsed instance as JSON
    Export {
        instance_file: PathBuf,
        /// Target file, stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty print the JSON
        #[arg(short, long, env = "PRETTY_JSON")]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    let args: App = App::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    debug!("{args:?}");

    if let Err(err) = match args.command {
        Commands::Summary { paths } => commands::summary(paths),
        Commands::Graph {
            instance_file,
            output,
        } => commands::graph(instance_file, output),
        Commands::Export {
            instance_file,
            output,
            pretty,
        } => commands::export(instance_file, output, pretty),
    } {
        error!("An error occurred: {err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
