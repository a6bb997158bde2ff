mod config;
mod model;
mod output;
mod parser;
mod tree;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::bail;
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use config::Paths;
use model::{Category, DecisionTree, FaqCatalog};

#[derive(Parser)]
#[command(name = "faq_extractor", about = "Help-center FAQ page to JSON catalog + decision tree")]
struct Cli {
    #[command(flatten)]
    paths: PathArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PathArgs {
    /// HTML page to read [env: FAQ_SOURCE_PATH]
    #[arg(long, global = true)]
    source: Option<PathBuf>,
    /// FAQ catalog output [env: FAQ_CATALOG_PATH]
    #[arg(long, global = true)]
    faqs: Option<PathBuf>,
    /// Decision tree output [env: FAQ_TREE_PATH]
    #[arg(long, global = true)]
    tree: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract FAQs and write faqs.json + decision_tree.json
    Build,
    /// Extract only; print categories and skip counters
    Stats,
    /// Check cross-references between previously written artifacts
    Verify,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let paths = Paths::resolve(cli.paths.source, cli.paths.faqs, cli.paths.tree);

    match cli.command {
        Commands::Build => {
            let html = output::read_source(&paths.source)?;
            info!("Read {} bytes from {:?}", html.len(), paths.source);
            let (categories, stats) = parser::extract_categories(&html);
            if stats.cards_malformed > 0 || stats.cards_empty_question > 0 {
                warn!(
                    "Skipped {} non-conforming cards and {} cards without a question",
                    stats.cards_malformed, stats.cards_empty_question
                );
            }
            let (catalog, tree) = tree::build_artifacts(categories);
            output::write_artifacts(&paths, &catalog, &tree)?;
            print_summary(&catalog.categories);
        }
        Commands::Stats => {
            let html = output::read_source(&paths.source)?;
            let (categories, stats) = parser::extract_categories(&html);
            print_summary(&categories);
            println!();
            stats.print();
        }
        Commands::Verify => {
            let catalog: FaqCatalog = output::read_artifact(&paths.faqs_out)?;
            let tree: DecisionTree = output::read_artifact(&paths.tree_out)?;
            let problems = tree::validate(&catalog, &tree);
            if !problems.is_empty() {
                for p in &problems {
                    println!("  {}", p);
                }
                bail!("{} problems in {:?} / {:?}", problems.len(), paths.faqs_out, paths.tree_out);
            }
            let faqs: usize = catalog.categories.iter().map(|c| c.faqs.len()).sum();
            println!(
                "OK: {} categories, {} FAQs, {} nodes",
                catalog.categories.len(),
                faqs,
                tree.nodes.len()
            );
        }
    }

    info!("Finished in {:.2}s", t0.elapsed().as_secs_f64());
    Ok(())
}

fn print_summary(categories: &[Category]) {
    println!("Extracted {} categories.", categories.len());
    for cat in categories {
        println!("- {}: {} FAQs", cat.title, cat.faqs.len());
    }
}
