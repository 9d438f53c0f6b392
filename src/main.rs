//! fanout-search CLI - query several search engines at once.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use fanout_search::{engines, server, Search, SearchConfig, SearchQuery, SourceResult};

/// Fan a search out to several engines and collect the results per source
#[derive(Parser)]
#[command(name = "fanout-search")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    sources: SourceArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve(ServeArgs),

    /// Run one search and print the results
    Search(SearchArgs),

    /// List available search engines
    Engines,
}

#[derive(Args)]
struct SourceArgs {
    /// Sources to query (comma-separated)
    #[arg(short, long, global = true, value_delimiter = ',', env = "FANOUT_SOURCES")]
    sources: Option<Vec<String>>,

    /// Per-source timeout in seconds
    #[arg(short, long, global = true, default_value = "10", env = "FANOUT_TIMEOUT")]
    timeout: u64,

    /// Save responses that no longer match the expected format here
    #[arg(long, global = true, env = "FANOUT_DUMP_DIR")]
    dump_dir: Option<PathBuf>,

    /// Override the browser User-Agent
    #[arg(long, global = true, env = "FANOUT_USER_AGENT")]
    user_agent: Option<String>,
}

#[derive(Args)]
struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1", env = "FANOUT_HOST")]
    host: String,

    /// Port to bind
    #[arg(short, long, default_value = "5000", env = "FANOUT_PORT")]
    port: u16,
}

#[derive(Args)]
struct SearchArgs {
    /// Search keyword
    keyword: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output, same shape as the HTTP API
    Json,
}

impl SourceArgs {
    fn to_config(&self) -> SearchConfig {
        let defaults = SearchConfig::default();
        SearchConfig {
            sources: self.sources.clone().unwrap_or(defaults.sources),
            timeout_secs: self.timeout,
            user_agent: self.user_agent.clone(),
            diagnostics_dir: self.dump_dir.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Serve(args) => run_server(&cli.sources, args).await,
        Commands::Search(args) => run_search(&cli.sources, args).await,
        Commands::Engines => list_engines(),
    }
}

fn list_engines() -> Result<()> {
    println!("Available search engines:\n");
    println!("    google   - Google (HTML results page)");
    println!("    coccoc   - Coc Coc (embedded JSON results)");
    println!();
    println!("Usage: fanout-search search \"query\" -s {}", engines::AVAILABLE.join(","));
    Ok(())
}

async fn run_server(sources: &SourceArgs, args: ServeArgs) -> Result<()> {
    let search = Search::from_config(&sources.to_config())?;
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    server::serve(Arc::new(search), addr).await
}

async fn run_search(sources: &SourceArgs, args: SearchArgs) -> Result<()> {
    let search = Search::from_config(&sources.to_config())?;
    let response = search
        .aggregate_search(SearchQuery::new(&args.keyword))
        .await?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("\nSearch results for \"{}\":", args.keyword);
            for (source, outcome) in response.iter() {
                println!();
                match outcome {
                    SourceResult::Success { records, .. } => {
                        println!("[{}] {} results", source, records.len());
                        for (i, record) in records.iter().enumerate() {
                            println!("{}. {}", i + 1, record.title);
                            if !record.description.is_empty() {
                                println!("   {}", record.description);
                            }
                        }
                    }
                    SourceResult::Failure { message, .. } => {
                        println!("[{}] error: {}", source, message);
                    }
                }
            }
        }
    }

    Ok(())
}
