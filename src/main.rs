mod analogy;
mod config;
mod query;
mod space;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use config::SpaceConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use space::WordEntry;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "wordgalaxy")]
#[command(version)]
#[command(about = "Synthetic word-embedding galaxy generator with cluster and search queries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Alternate space layout (TOML); defaults to the built-in layout
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible generation; omit for fresh numbers per run
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the configured clusters
    Clusters,
    /// Generate the dataset and dump it as JSON to stdout
    Generate {
        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },
    /// Search words by case-insensitive substring (at most 10 results)
    Search {
        /// Substring to look for
        query: String,
    },
    /// Show a cluster's details, member count and centroid
    Cluster {
        /// Cluster id (e.g. "animals")
        id: String,
    },
    /// Show the precomputed neighbor list of a word
    Neighbors {
        /// Word to look up
        word: String,
    },
    /// List the built-in demonstration analogies
    Analogies,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SpaceConfig::load(path)
            .with_context(|| format!("Failed to load layout from {}", path.display()))?,
        None => SpaceConfig::builtin(),
    };
    // A layout that fails validation must never reach the generator.
    config.validate().context("Invalid space layout")?;

    match cli.command {
        Commands::Clusters => cmd_clusters(&config),
        Commands::Generate { pretty } => cmd_generate(&config, cli.seed, pretty),
        Commands::Search { query } => cmd_search(&config, cli.seed, &query),
        Commands::Cluster { id } => cmd_cluster(&config, cli.seed, &id),
        Commands::Neighbors { word } => cmd_neighbors(&config, cli.seed, &word),
        Commands::Analogies => cmd_analogies(&config, cli.seed),
    }
}

/// Run the generator once, seeded when requested
fn build_dataset(config: &SpaceConfig, seed: Option<u64>) -> Vec<WordEntry> {
    let entries = match seed {
        Some(seed) => {
            debug!(seed, "generating with fixed seed");
            space::generate(config, &mut StdRng::seed_from_u64(seed))
        }
        None => space::generate(config, &mut rand::thread_rng()),
    };
    debug!(entries = entries.len(), "dataset generated");
    entries
}

fn cmd_clusters(config: &SpaceConfig) -> Result<()> {
    for cluster in &config.clusters {
        println!(
            "{:<12} {:<16} {}  ({} words)",
            cluster.id,
            cluster.name,
            cluster.color,
            cluster.words.len()
        );
        if !cluster.description.is_empty() {
            println!("             {}", cluster.description);
        }
    }
    println!();
    println!(
        "{} clusters, {} words, spread {}",
        config.clusters.len(),
        config.word_count(),
        config.spread
    );
    Ok(())
}

fn cmd_generate(config: &SpaceConfig, seed: Option<u64>, pretty: bool) -> Result<()> {
    let entries = build_dataset(config, seed);
    let json = if pretty {
        serde_json::to_string_pretty(&entries)?
    } else {
        serde_json::to_string(&entries)?
    };
    println!("{json}");
    Ok(())
}

fn cmd_search(config: &SpaceConfig, seed: Option<u64>, query: &str) -> Result<()> {
    // An empty substring matches everything, so the CLI refuses it instead of
    // printing arbitrary early entries.
    if query.trim().is_empty() {
        bail!("Search query must not be empty");
    }

    let entries = build_dataset(config, seed);
    let results = query::search(query, &entries);

    if results.is_empty() {
        println!("No words match '{query}'");
        return Ok(());
    }

    for entry in results {
        println!(
            "{:<14} {:<12} [{:>7.3}, {:>7.3}, {:>7.3}]",
            entry.word,
            entry.cluster_id,
            entry.position[0],
            entry.position[1],
            entry.position[2]
        );
    }
    Ok(())
}

fn cmd_cluster(config: &SpaceConfig, seed: Option<u64>, id: &str) -> Result<()> {
    let Some(cluster) = config.cluster_by_id(id) else {
        println!("No cluster with id '{id}'");
        return Ok(());
    };

    let entries = build_dataset(config, seed);
    let members = entries.iter().filter(|e| e.cluster_id == id).count();

    println!("{} ({})", cluster.name, cluster.id);
    println!("  Color:       {}", cluster.color);
    if !cluster.description.is_empty() {
        println!("  Description: {}", cluster.description);
    }
    println!(
        "  Center:      [{}, {}, {}]",
        cluster.center[0], cluster.center[1], cluster.center[2]
    );
    println!("  Members:     {members}");
    match query::cluster_centroid(id, &entries) {
        Some(centroid) => println!(
            "  Centroid:    [{:.3}, {:.3}, {:.3}]",
            centroid[0], centroid[1], centroid[2]
        ),
        None => println!("  Centroid:    n/a (no members)"),
    }
    Ok(())
}

fn cmd_neighbors(config: &SpaceConfig, seed: Option<u64>, word: &str) -> Result<()> {
    let entries = build_dataset(config, seed);

    let Some(entry) = query::find_word(word, &entries) else {
        println!("'{word}' is not in the dataset");
        return Ok(());
    };

    println!("{} ({})", entry.word, entry.cluster_id);
    for neighbor in &entry.neighbors {
        println!("  {:<14} {:.3}", neighbor.word, neighbor.similarity);
    }
    Ok(())
}

fn cmd_analogies(config: &SpaceConfig, seed: Option<u64>) -> Result<()> {
    let entries = build_dataset(config, seed);

    for analogy in analogy::builtin_analogies() {
        println!("{}", analogy.equation);
        let missing = analogy.missing_words(&entries);
        if missing.is_empty() {
            println!("  all words present in the dataset");
        } else {
            println!("  missing from the dataset: {}", missing.join(", "));
        }
    }
    Ok(())
}
