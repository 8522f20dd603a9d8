//! Client SDK for the EmergentDB vector database API.
//!
//! ```no_run
//! use emergentdb_client::{EmergentDb, InsertRequest, SearchRequest};
//!
//! # async fn run() -> emergentdb_client::Result<()> {
//! let db = EmergentDb::new("emdb_your_api_key")?;
//!
//! db.insert(InsertRequest::new(1, vec![0.1, 0.2, 0.3])).await?;
//!
//! let hits = db.search(SearchRequest::new(vec![0.1, 0.2, 0.3]).with_k(5)).await?;
//! for hit in &hits.results {
//!     println!("{} {:.4}", hit.id, hit.score);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod model;

pub use client::{EmergentDb, MAX_BATCH_SIZE};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use model::analytics::{
    EndpointStats, ErrorEntry, GrowthEntry, KeyStats, LatencyEntry, NamespaceStats,
};
pub use model::vector::{
    BatchInsertResult, BatchInsertSummary, DeleteResult, InsertRequest, InsertResult,
    SearchRequest, SearchResponse, SearchResult, VectorEntry,
};
