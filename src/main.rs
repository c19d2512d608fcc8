use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use starmatch::{
    extract, Catalog, CatalogStore, Category, CsvCatalogSource, Metric, Query, Ranker,
};

/// A similarity recommender for astronomical catalogs
#[derive(Parser, Debug)]
#[command(name = "starmatch")]
#[command(about = "Category-filtered top-K similarity search over an astronomical catalog", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank the catalog objects closest to a query vector
    Similar {
        /// Path to the catalog CSV
        #[arg(short, long)]
        catalog: PathBuf,

        /// Category filter (GALAXY, QSO or STAR)
        #[arg(long)]
        category: String,

        /// Query features as a JSON object, e.g.
        /// '{"alpha":135.7,"delta":32.5,"u":23.9,"g":22.3,"r":20.4,"i":19.2,"z":18.8,"redshift":0.64}'
        #[arg(long)]
        query: String,

        /// Maximum number of results
        #[arg(short, default_value_t = 10)]
        k: usize,

        /// Distance metric
        #[arg(long, value_enum, default_value_t = MetricArg::Euclidean)]
        metric: MetricArg,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print catalog summary statistics
    Stats {
        /// Path to the catalog CSV
        #[arg(short, long)]
        catalog: PathBuf,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum MetricArg {
    Euclidean,
    Manhattan,
}

impl From<MetricArg> for Metric {
    fn from(metric: MetricArg) -> Metric {
        match metric {
            MetricArg::Euclidean => Metric::Euclidean,
            MetricArg::Manhattan => Metric::Manhattan,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Similar {
            catalog,
            category,
            query,
            k,
            metric,
            json,
        } => similar(&catalog, &category, &query, k, metric.into(), json),
        Command::Stats { catalog, json } => stats(&catalog, json),
    }
}

fn load(path: &Path) -> anyhow::Result<Arc<Catalog>> {
    let store = CatalogStore::new(CsvCatalogSource::new(path));
    let catalog = store.get()?;
    info!(rows = catalog.len(), "catalog ready");
    Ok(catalog)
}

fn similar(
    catalog_path: &Path,
    category: &str,
    query_json: &str,
    k: usize,
    metric: Metric,
    json: bool,
) -> anyhow::Result<()> {
    let catalog = load(catalog_path)?;

    let category = Category::from_str(category)?;
    let fields: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(query_json).context("query must be a JSON object")?;
    let features = extract(&fields)?;

    let ranker = Ranker::new(metric);
    let results = ranker.rank(&catalog, &Query::new(category, features, k))?;

    if json {
        let rows: Vec<serde_json::Value> = results
            .iter()
            .map(|result| {
                serde_json::json!({
                    "id": result.entry.id,
                    "category": result.entry.category,
                    "distance": result.distance,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if results.is_empty() {
        println!("no matching objects");
    } else {
        println!("{:<20} {:<8} {:>14}", "id", "class", "distance");
        for result in &results {
            println!(
                "{:<20} {:<8} {:>14.6}",
                result.entry.id, result.entry.category, result.distance
            );
        }
    }

    Ok(())
}

fn stats(catalog_path: &Path, json: bool) -> anyhow::Result<()> {
    let catalog = load(catalog_path)?;

    let counts = catalog.category_counts();
    let summary = catalog.feature_summary();

    if json {
        let categories: serde_json::Map<String, serde_json::Value> = counts
            .iter()
            .map(|(category, count)| (category.as_str().to_string(), serde_json::json!(count)))
            .collect();
        let output = serde_json::json!({
            "rows": catalog.len(),
            "categories": categories,
            "features": summary,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("rows: {}", catalog.len());
        for (category, count) in counts {
            println!("{:<8} {:>10}", category, count);
        }
        println!();
        println!("{:<10} {:>14} {:>14} {:>14}", "feature", "min", "mean", "max");
        for feature in summary {
            println!(
                "{:<10} {:>14.4} {:>14.4} {:>14.4}",
                feature.name, feature.min, feature.mean, feature.max
            );
        }
    }

    Ok(())
}
