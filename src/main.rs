use std::fs;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use threadcheck::batch::{extract_file, list_pages, process_pages};
use threadcheck::session::Session;
use threadcheck::settings::Settings;
use threadcheck::transport::ScoringClient;

#[derive(Parser)]
#[command(name = "threadcheck", about = "Extract clothing attributes from saved product pages")]
struct Cli {
    /// Settings file (default: ./threadcheck.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract one page and print the record as JSON
    Extract {
        /// Saved product page (.html)
        file: PathBuf,
    },
    /// Extract every .html page in a directory (JSON Lines output)
    Batch {
        dir: PathBuf,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Extract one page and send the record to the scoring service
    Submit {
        file: PathBuf,
        /// URL the page was saved from
        #[arg(short, long)]
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { file } => {
            let record = extract_file(&file)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Batch { dir, output } => {
            let pages = list_pages(&dir)?;
            if pages.is_empty() {
                println!("No .html pages in {}", dir.display());
                return Ok(());
            }
            info!("Processing {} pages...", pages.len());
            let counts = match output {
                Some(path) => {
                    let file = fs::File::create(&path)
                        .with_context(|| format!("Failed to create {}", path.display()))?;
                    process_pages(&pages, BufWriter::new(file))?
                }
                None => process_pages(&pages, io::stdout().lock())?,
            };
            counts.print();
        }
        Commands::Submit { file, url } => {
            let settings = Settings::load(cli.config.as_deref())?;
            let record = extract_file(&file)?;
            let client = ScoringClient::new(&settings)?;
            let session = Session::new();
            let verdict = client.submit(&session, &url, &record).await?;

            let name = record.name.as_deref().unwrap_or("-");
            match verdict.sustainable {
                Some(true) => println!("{}: sustainable", name),
                Some(false) => println!("{}: not sustainable", name),
                None => println!(
                    "{}: submitted ({})",
                    name,
                    verdict.message.as_deref().unwrap_or("no verdict")
                ),
            }
        }
    }

    info!("Done in {:.2}s", t0.elapsed().as_secs_f64());
    Ok(())
}
