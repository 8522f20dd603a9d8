//! Dashboard analytics models.
//!
//! The analytics endpoints report rolling 30-day usage (90 days for vector
//! growth) aggregated per day. Wire field names are camelCase; counters that
//! the service has not populated yet are absent and read as zero.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request breakdown for one endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EndpointStats {
    pub endpoint: String,
    #[serde(default)]
    pub request_count: u64,
    #[serde(default)]
    pub total_bytes: u64,
    #[serde(default)]
    pub avg_latency_ms: f64,
    #[serde(default)]
    pub p95_latency_ms: f64,
    #[serde(default)]
    pub error_count: u64,
}

/// Usage breakdown for one namespace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceStats {
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub request_count: u64,
    #[serde(default)]
    pub total_vectors: u64,
    #[serde(default)]
    pub avg_latency_ms: f64,
}

/// Latency percentiles for one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LatencyEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub p50: f64,
    #[serde(default)]
    pub p95: f64,
    #[serde(default)]
    pub p99: f64,
    #[serde(default)]
    pub request_count: u64,
}

/// Error-rate breakdown for one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub total_requests: u64,
    #[serde(default)]
    pub error_count: u64,
    #[serde(default, rename = "error4xx")]
    pub error_4xx: u64,
    #[serde(default, rename = "error5xx")]
    pub error_5xx: u64,
}

/// Per-API-key usage. Key identity fields may be withheld by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeyStats {
    #[serde(default)]
    pub api_key_id: Option<String>,
    #[serde(default)]
    pub key_name: Option<String>,
    #[serde(default)]
    pub key_prefix: Option<String>,
    #[serde(default)]
    pub request_count: u64,
    #[serde(default)]
    pub total_bytes: u64,
    #[serde(default)]
    pub avg_latency_ms: f64,
    /// Backend-defined timestamp format, passed through verbatim.
    #[serde(default)]
    pub last_used: Option<String>,
}

/// Vector count snapshot for one day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GrowthEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub vector_count: u64,
}
