//! repograph - commit graphs for GitHub repositories
//!
//! CLI binary for fetching a repository's recent history and printing its
//! commit graph.

use anstream::eprintln;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::style::{Stylize, cross};

#[derive(Parser)]
#[command(name = "repograph")]
#[command(about = "Commit graphs with inferred lineages for GitHub repositories")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the commit graph of a repository
    Graph {
        /// Repository (owner/repo or GitHub URL)
        repo: Option<String>,

        /// Number of most recent commits in the graph window (1-100)
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u8).range(1..=100))]
        limit: Option<u8>,

        /// Print nodes and edges as JSON
        #[arg(long)]
        json: bool,

        /// Read a snapshot saved by `repograph fetch` instead of fetching
        #[arg(long, value_name = "PATH")]
        from_file: Option<PathBuf>,
    },

    /// Fetch a repository snapshot and save it as JSON
    Fetch {
        /// Repository (owner/repo or GitHub URL)
        repo: String,

        /// Output file
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,

        /// Number of most recent commits to fetch (1-100)
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u8).range(1..=100))]
        limit: Option<u8>,
    },

    /// Show repository details, branches, contributors and activity
    Info {
        /// Repository (owner/repo or GitHub URL)
        repo: Option<String>,

        /// Read a snapshot saved by `repograph fetch` instead of fetching
        #[arg(long, value_name = "PATH")]
        from_file: Option<PathBuf>,
    },

    /// Authentication management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Test authentication
    Test,
    /// Show authentication setup instructions
    Setup,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "repograph=debug",
        _ => "repograph=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Graph {
            repo,
            limit,
            json,
            from_file,
        } => {
            cli::run_graph(repo.as_deref(), from_file.as_deref(), limit, json).await?;
        }
        Commands::Fetch {
            repo,
            output,
            limit,
        } => {
            cli::run_fetch(&repo, &output, limit).await?;
        }
        Commands::Info { repo, from_file } => {
            cli::run_info(repo.as_deref(), from_file.as_deref()).await?;
        }
        Commands::Auth { action } => {
            cli::run_auth(matches!(action, AuthAction::Test)).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", cross(), e.to_string().error());
            ExitCode::FAILURE
        }
    }
}
