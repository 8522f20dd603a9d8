use reqwest::header;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::model::analytics::{
    EndpointStats, ErrorEntry, GrowthEntry, KeyStats, LatencyEntry, NamespaceStats,
};
use crate::model::vector::{
    BatchInsertResult, BatchInsertSummary, DeleteResult, InsertRequest, InsertResult,
    SearchRequest, SearchResponse, VectorEntry,
};

/// Hard limit of `POST /vectors/batch_insert`; larger inserts go through
/// [`EmergentDb::batch_insert_all`].
pub const MAX_BATCH_SIZE: usize = 1000;

/// Client for the EmergentDB vector database API.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct EmergentDb {
    http: reqwest::Client,
    base_url: String,
}

impl EmergentDb {
    /// Create a client with the default configuration (production endpoint,
    /// 30 s request timeout). Keys are issued with an `emdb_` prefix;
    /// anything else is rejected here rather than with a 401 later.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let api_key = api_key.into();
        if !api_key.starts_with("emdb_") {
            return Err(Error::ApiKey(
                "API key must start with \"emdb_\"".to_string(),
            ));
        }

        let mut auth = header::HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| Error::ApiKey("API key contains non-header characters".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("emergentdb-rust/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Insert a single vector. Re-inserting an existing ID overwrites it and
    /// reports `upserted = true`.
    pub async fn insert(&self, mut request: InsertRequest) -> Result<InsertResult> {
        request.namespace = normalize_namespace(request.namespace);
        self.post("/vectors/insert", &request).await
    }

    /// Insert up to [`MAX_BATCH_SIZE`] vectors in one request. `namespace`
    /// applies to every entry.
    pub async fn batch_insert(
        &self,
        entries: &[VectorEntry],
        namespace: Option<&str>,
    ) -> Result<BatchInsertResult> {
        if entries.len() > MAX_BATCH_SIZE {
            return Err(Error::Validation(format!(
                "batch insert supports at most {MAX_BATCH_SIZE} vectors per request"
            )));
        }
        let body = BatchInsertBody {
            vectors: entries,
            namespace: normalize_namespace_ref(namespace),
        };
        self.post("/vectors/batch_insert", &body).await
    }

    /// Insert any number of vectors, chunked into sequential
    /// [`MAX_BATCH_SIZE`]-entry requests. Fails on the first failing chunk;
    /// earlier chunks remain inserted.
    pub async fn batch_insert_all(
        &self,
        entries: &[VectorEntry],
        namespace: Option<&str>,
    ) -> Result<BatchInsertSummary> {
        let mut summary = BatchInsertSummary::default();
        for chunk in entries.chunks(MAX_BATCH_SIZE) {
            let result = self.batch_insert(chunk, namespace).await?;
            tracing::debug!(
                inserted = result.count,
                total = summary.ids.len() + result.ids.len(),
                "batch chunk inserted"
            );
            summary.ids.extend(result.ids);
            summary.new_count += result.new_count;
            summary.upserted_count += result.upserted_count;
        }
        summary.count = summary.ids.len() as u64;
        Ok(summary)
    }

    /// Search for the nearest neighbors of a query vector.
    pub async fn search(&self, mut request: SearchRequest) -> Result<SearchResponse> {
        request.namespace = normalize_namespace(request.namespace);
        self.post("/vectors/search", &request).await
    }

    /// Delete a vector by ID.
    pub async fn delete(&self, id: u64, namespace: Option<&str>) -> Result<DeleteResult> {
        let body = DeleteBody {
            id,
            namespace: normalize_namespace_ref(namespace),
        };
        self.post("/vectors/delete", &body).await
    }

    /// List all namespaces owned by the authenticated tenant.
    pub async fn list_namespaces(&self) -> Result<Vec<String>> {
        let list: NamespaceList = self.get("/vectors/namespaces").await?;
        Ok(list.namespaces)
    }

    /// Request breakdown by endpoint (last 30 days).
    pub async fn analytics_endpoints(&self) -> Result<Vec<EndpointStats>> {
        let report: EndpointReport = self.get("/api/dashboard/analytics/endpoints").await?;
        Ok(report.endpoints)
    }

    /// Usage breakdown by namespace (last 30 days).
    pub async fn analytics_namespaces(&self) -> Result<Vec<NamespaceStats>> {
        let report: NamespaceReport = self.get("/api/dashboard/analytics/namespaces").await?;
        Ok(report.namespaces)
    }

    /// Latency percentiles per day (last 30 days).
    pub async fn analytics_latency(&self) -> Result<Vec<LatencyEntry>> {
        let report: LatencyReport = self.get("/api/dashboard/analytics/latency").await?;
        Ok(report.latency)
    }

    /// Error rates per day (last 30 days).
    pub async fn analytics_errors(&self) -> Result<Vec<ErrorEntry>> {
        let report: ErrorReport = self.get("/api/dashboard/analytics/errors").await?;
        Ok(report.errors)
    }

    /// Per-API-key usage (last 30 days).
    pub async fn analytics_keys(&self) -> Result<Vec<KeyStats>> {
        let report: KeyReport = self.get("/api/dashboard/analytics/keys").await?;
        Ok(report.keys)
    }

    /// Daily vector-count snapshots (last 90 days).
    pub async fn analytics_growth(&self) -> Result<Vec<GrowthEntry>> {
        let report: GrowthReport = self.get("/api/dashboard/analytics/growth").await?;
        Ok(report.growth)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.decode(path, response).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        self.decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body: Option<serde_json::Value> = serde_json::from_slice(&bytes).ok();
            let message = body
                .as_ref()
                .and_then(|b| b.get("error"))
                .and_then(|e| e.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            tracing::debug!(path, status = status.as_u16(), %message, "API request failed");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
                body,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

// The "default" namespace (and the empty string) is the server-side default
// and never appears in request bodies.
fn normalize_namespace(namespace: Option<String>) -> Option<String> {
    namespace.filter(|ns| !ns.is_empty() && ns != "default")
}

fn normalize_namespace_ref(namespace: Option<&str>) -> Option<&str> {
    namespace.filter(|ns| !ns.is_empty() && *ns != "default")
}

#[derive(Serialize)]
struct BatchInsertBody<'a> {
    vectors: &'a [VectorEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<&'a str>,
}

#[derive(Serialize)]
struct DeleteBody<'a> {
    id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<&'a str>,
}

#[derive(Deserialize)]
struct NamespaceList {
    #[serde(default)]
    namespaces: Vec<String>,
}

#[derive(Deserialize)]
struct EndpointReport {
    #[serde(default)]
    endpoints: Vec<EndpointStats>,
}

#[derive(Deserialize)]
struct NamespaceReport {
    #[serde(default)]
    namespaces: Vec<NamespaceStats>,
}

#[derive(Deserialize)]
struct LatencyReport {
    #[serde(default)]
    latency: Vec<LatencyEntry>,
}

#[derive(Deserialize)]
struct ErrorReport {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct KeyReport {
    #[serde(default)]
    keys: Vec<KeyStats>,
}

#[derive(Deserialize)]
struct GrowthReport {
    #[serde(default)]
    growth: Vec<GrowthEntry>,
}
