use clap::{Parser, Subcommand};
use evidex::classify::category_label;
use evidex::evidence;
use evidex::search::paginate;
use evidex::{Engine, StudyFacets};
use evidex_core::config::Config;
use evidex_core::{Corpus, EvidenceLevel, StudyType};

#[derive(Parser)]
#[command(name = "evidex", about = "evidex — integrative-medicine research search")]
struct Cli {
    /// Write debug logs to /tmp/evidex-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Emit JSON instead of text, regardless of configured output format.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Free-text search across conditions, compounds, therapies, and studies.
    Search {
        query: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// List curated studies, optionally narrowed by facets.
    Studies {
        #[arg(long = "type")]
        study_type: Option<StudyType>,
        #[arg(long)]
        evidence: Option<EvidenceLevel>,
        #[arg(long)]
        compound: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show per-category condition counts.
    Categories,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/evidex-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("evidex debug log started — tail -f /tmp/evidex-debug.log");
    }

    let config = Config::load().unwrap_or_else(|_| Config::defaults());
    let json = cli.json || config.output.format == "json";

    // A corpus error here means the embedded snapshot is corrupt — fatal.
    let corpus = Corpus::load()?;
    let engine = Engine::new(corpus);

    match cli.command {
        Command::Search { query, page } => {
            let hits = engine.search(&query);
            let hits = &hits[..hits.len().min(config.search.max_results)];
            let paged = paginate(hits, page, config.search.page_size);
            if json {
                println!("{}", serde_json::to_string_pretty(&paged)?);
            } else {
                println!(
                    "{} result(s), page {page} of {}",
                    hits.len(),
                    paged.total_pages
                );
                for hit in &paged.page_items {
                    println!(
                        "  [{}] {} — {}",
                        hit.item.kind, hit.item.title, hit.item.link
                    );
                }
            }
        }
        Command::Studies {
            study_type,
            evidence: level,
            compound,
            page,
        } => {
            let facets = StudyFacets {
                study_type,
                evidence: level,
                compound,
            };
            let studies = engine.filter_studies(engine.corpus().studies(), &facets);
            let paged = paginate(&studies, page, config.search.page_size);
            if json {
                println!("{}", serde_json::to_string_pretty(&paged)?);
            } else {
                println!(
                    "{} study(ies), page {page} of {}",
                    studies.len(),
                    paged.total_pages
                );
                for study in &paged.page_items {
                    let tier = evidence::tier(study.evidence);
                    println!(
                        "  {} ({}, {}) [{}] {}",
                        study.title,
                        study.study_type.label(),
                        study.year,
                        tier.label,
                        study.source_url()
                    );
                }
            }
        }
        Command::Categories => {
            let counts = engine.categorize_all();
            if json {
                println!("{}", serde_json::to_string_pretty(&counts)?);
            } else {
                for (id, count) in &counts {
                    println!("  {:<24} {}", category_label(id), count);
                }
            }
        }
    }

    Ok(())
}
