//! Command-line entry point.
//!
//! # Responsibility
//! - Build the graph snapshot from a memory directory.
//! - Query an existing snapshot without rebuilding it.
//! - Keep output short and deterministic for scripting.

use chrono::Utc;
use clap::{Parser, Subcommand};
use log::error;
use mempalace_core::{
    collect_documents, default_log_level, filter_graph, init_console_logging, init_logging,
    load_snapshot_or_empty, snapshot_from_documents, write_snapshot, GraphConfig, GraphStats,
    SourceLayout,
};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_OUTPUT: &str = "public/memories.json";

#[derive(Parser)]
#[command(name = "mempalace")]
#[command(about = "Build and query the Memory Palace graph snapshot")]
#[command(version)]
struct Cli {
    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files (stderr when omitted)
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read MEMORY.md and memory/*.md, then write the snapshot JSON
    Build {
        /// Memory root directory
        #[arg(default_value = ".")]
        memory_dir: PathBuf,

        /// Snapshot output path
        #[arg(long, short, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// JSON file overriding keywords and link weights
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List memories in a snapshot matching a term
    Search {
        term: String,

        /// Snapshot to read
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        snapshot: PathBuf,
    },
    /// Print the core library version
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    let logging = match cli.log_dir.as_deref() {
        Some(dir) => init_logging(&level, dir),
        None => init_console_logging(&level),
    };
    if let Err(message) = logging {
        eprintln!("mempalace: {message}");
        return ExitCode::FAILURE;
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("mempalace: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Build {
            memory_dir,
            output,
            config,
        } => {
            let config = match config {
                Some(path) => GraphConfig::from_json_file(path)?,
                None => GraphConfig::default(),
            };
            let documents = collect_documents(&memory_dir, &SourceLayout::default())?;
            let snapshot = snapshot_from_documents(
                &documents,
                memory_dir.display().to_string(),
                &config,
                Utc::now(),
            );
            write_snapshot(&snapshot, &output)?;

            println!("documents: {}", documents.len());
            println!("memories: {}", snapshot.nodes.len());
            println!("connections: {}", snapshot.links.len());
            println!("written: {}", output.display());
        }
        Command::Search { term, snapshot } => {
            let graph = load_snapshot_or_empty(&snapshot).to_graph();
            let filtered = filter_graph(&graph, &term);
            for node in &filtered.nodes {
                match node.date.as_deref() {
                    Some(date) => println!("{}\t{}\t{}", node.id, date, node.title),
                    None => println!("{}\t-\t{}", node.id, node.title),
                }
            }
            let stats = GraphStats::of(&filtered);
            println!(
                "{} memories ({} total), {} connections",
                stats.node_count,
                graph.nodes.len(),
                stats.link_count
            );
        }
        Command::Version => {
            println!("mempalace_core version={}", mempalace_core::core_version());
        }
    }
    Ok(())
}
