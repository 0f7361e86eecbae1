mod config;
mod extract;
mod fetch;
mod filename;
mod pipeline;
mod ruleset;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rulegen", about = "Convert hosts-style blocklists into sing-box rule-sets")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every source and write one rule-set file per URL
    Run {
        /// Source list file (JSON array of URLs)
        #[arg(long, default_value = "rules_list.json")]
        rules: PathBuf,
        /// Output directory for rule-set files
        #[arg(long, default_value = "json")]
        out: PathBuf,
        /// Per-request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,
        /// Max sources to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Show each source URL and the output filename it maps to
    List {
        /// Source list file (JSON array of URLs)
        #[arg(long, default_value = "rules_list.json")]
        rules: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            rules,
            out,
            timeout,
            limit,
        } => {
            let mut urls = config::load_sources(&rules)?;
            if let Some(n) = limit {
                urls.truncate(n);
            }
            if urls.is_empty() {
                println!("No sources in {}.", rules.display());
                return Ok(());
            }

            let planned = pipeline::plan_sources(&urls)?;
            println!("Converting {} sources...", planned.len());

            let client = fetch::build_client(Duration::from_secs(timeout))?;
            let stats = pipeline::convert_sources(&client, &planned, &out).await?;
            println!(
                "Done: {} sources ({} ok, {} errors), {} domains written.",
                stats.total, stats.ok, stats.errors, stats.domains
            );
            Ok(())
        }
        Commands::List { rules } => {
            let urls = config::load_sources(&rules)?;
            if urls.is_empty() {
                println!("No sources in {}.", rules.display());
                return Ok(());
            }

            let planned = pipeline::plan_sources(&urls)?;
            for p in &planned {
                println!("{} -> {}", p.url, p.file_name);
            }
            println!("\n{} sources", planned.len());
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
