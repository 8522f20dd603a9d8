use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use emergentdb_client::{
    ClientConfig, EmergentDb, InsertRequest, SearchRequest, VectorEntry,
};

#[derive(Parser)]
#[command(name = "emergentdb", about = "Command-line client for the EmergentDB vector database API")]
struct Cli {
    /// EmergentDB API key (emdb_...)
    #[arg(long, env = "EMERGENTDB_API_KEY")]
    api_key: String,

    /// API base URL
    #[arg(long, default_value = "https://api.emergentdb.com", env = "EMERGENTDB_BASE_URL")]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", env = "EMERGENTDB_TIMEOUT")]
    timeout_seconds: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Insert a single vector
    Insert {
        /// Positive integer vector ID, unique per namespace
        id: u64,

        /// Embedding as an inline JSON array, e.g. '[0.1, 0.2]'
        #[arg(long, conflicts_with = "vector_file")]
        vector: Option<String>,

        /// Path to a JSON file holding the embedding array
        #[arg(long)]
        vector_file: Option<PathBuf>,

        /// Metadata as an inline JSON object
        #[arg(long)]
        metadata: Option<String>,

        #[arg(long)]
        namespace: Option<String>,
    },

    /// Insert vectors from a JSON file, auto-chunked into 1000-vector batches
    BatchInsert {
        /// JSON file: array of {"id", "vector", "metadata"?} entries
        file: PathBuf,

        #[arg(long)]
        namespace: Option<String>,
    },

    /// Search for the nearest neighbors of a query vector
    Search {
        /// Query embedding as an inline JSON array
        #[arg(long, conflicts_with = "vector_file")]
        vector: Option<String>,

        /// Path to a JSON file holding the query embedding
        #[arg(long)]
        vector_file: Option<PathBuf>,

        /// Number of results (1-100)
        #[arg(short, long, default_value = "10")]
        k: u64,

        /// Include stored metadata in the results
        #[arg(long)]
        include_metadata: bool,

        #[arg(long)]
        namespace: Option<String>,
    },

    /// Delete a vector by ID
    Delete {
        id: u64,

        #[arg(long)]
        namespace: Option<String>,
    },

    /// List all namespaces for the authenticated tenant
    Namespaces,

    /// Read usage analytics (last 30 days; growth covers 90)
    Analytics {
        #[command(subcommand)]
        report: AnalyticsReport,
    },
}

#[derive(Subcommand)]
enum AnalyticsReport {
    /// Request breakdown by endpoint
    Endpoints,
    /// Usage breakdown by namespace
    Namespaces,
    /// Latency percentiles per day
    Latency,
    /// Error rates per day
    Errors,
    /// Per-API-key usage
    Keys,
    /// Daily vector-count snapshots
    Growth,
}

fn load_vector(
    inline: Option<String>,
    file: Option<PathBuf>,
) -> Result<Vec<f32>, Box<dyn std::error::Error>> {
    let raw = match (inline, file) {
        (Some(inline), _) => inline,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => return Err("provide --vector or --vector-file".into()),
    };
    Ok(serde_json::from_str(&raw)?)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("emergentdb=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ClientConfig {
        base_url: cli.base_url,
        timeout: Duration::from_secs(cli.timeout_seconds),
        ..ClientConfig::default()
    };
    let db = EmergentDb::with_config(cli.api_key, config)?;

    match cli.command {
        Command::Insert {
            id,
            vector,
            vector_file,
            metadata,
            namespace,
        } => {
            let vector = load_vector(vector, vector_file)?;
            let mut request = InsertRequest::new(id, vector);
            if let Some(raw) = metadata {
                request = request.with_metadata(serde_json::from_str(&raw)?);
            }
            if let Some(ns) = namespace {
                request = request.with_namespace(ns);
            }
            let result = db.insert(request).await?;
            print_json(&result)?;
        }

        Command::BatchInsert { file, namespace } => {
            let raw = std::fs::read_to_string(&file)?;
            let entries: Vec<VectorEntry> = serde_json::from_str(&raw)?;
            tracing::info!("Inserting {} vectors from {:?}", entries.len(), file);
            let summary = db.batch_insert_all(&entries, namespace.as_deref()).await?;
            print_json(&summary)?;
        }

        Command::Search {
            vector,
            vector_file,
            k,
            include_metadata,
            namespace,
        } => {
            let vector = load_vector(vector, vector_file)?;
            let mut request = SearchRequest::new(vector)
                .with_k(k)
                .with_metadata(include_metadata);
            if let Some(ns) = namespace {
                request = request.with_namespace(ns);
            }
            let response = db.search(request).await?;
            print_json(&response)?;
        }

        Command::Delete { id, namespace } => {
            let result = db.delete(id, namespace.as_deref()).await?;
            print_json(&result)?;
        }

        Command::Namespaces => {
            let namespaces = db.list_namespaces().await?;
            print_json(&namespaces)?;
        }

        Command::Analytics { report } => match report {
            AnalyticsReport::Endpoints => print_json(&db.analytics_endpoints().await?)?,
            AnalyticsReport::Namespaces => print_json(&db.analytics_namespaces().await?)?,
            AnalyticsReport::Latency => print_json(&db.analytics_latency().await?)?,
            AnalyticsReport::Errors => print_json(&db.analytics_errors().await?)?,
            AnalyticsReport::Keys => print_json(&db.analytics_keys().await?)?,
            AnalyticsReport::Growth => print_json(&db.analytics_growth().await?)?,
        },
    }

    Ok(())
}
