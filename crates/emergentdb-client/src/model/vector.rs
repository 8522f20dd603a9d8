use serde::{Deserialize, Serialize};

fn default_namespace() -> String {
    "default".to_string()
}

/// One row of a batch insert: an ID, its embedding, and optional metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VectorEntry {
    pub id: u64,
    pub vector: Vec<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl VectorEntry {
    pub fn new(id: u64, vector: Vec<f32>) -> Self {
        Self {
            id,
            vector,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Body of `POST /vectors/insert`.
///
/// IDs are positive integers, unique per namespace. `metadata` and
/// `namespace` are omitted from the wire when unset.
#[derive(Debug, Clone, Serialize)]
pub struct InsertRequest {
    pub id: u64,
    pub vector: Vec<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl InsertRequest {
    pub fn new(id: u64, vector: Vec<f32>) -> Self {
        Self {
            id,
            vector,
            metadata: None,
            namespace: None,
        }
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

/// Body of `POST /vectors/search`. `k` defaults to 10.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub vector: Vec<f32>,
    pub k: u64,
    pub include_metadata: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl SearchRequest {
    pub fn new(vector: Vec<f32>) -> Self {
        Self {
            vector,
            k: 10,
            include_metadata: false,
            namespace: None,
        }
    }

    pub fn with_k(mut self, k: u64) -> Self {
        self.k = k;
        self
    }

    /// Ask the service to return stored metadata alongside each hit.
    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsertResult {
    pub success: bool,
    pub id: u64,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// True when an existing vector with the same ID was overwritten.
    #[serde(default)]
    pub upserted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchInsertResult {
    pub success: bool,
    pub ids: Vec<u64>,
    pub count: u64,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default)]
    pub new_count: u64,
    #[serde(default)]
    pub upserted_count: u64,
}

/// Aggregate of the per-chunk results from
/// [`batch_insert_all`](crate::EmergentDb::batch_insert_all).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BatchInsertSummary {
    pub ids: Vec<u64>,
    pub count: u64,
    pub new_count: u64,
    pub upserted_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub id: u64,
    pub score: f32,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub count: u64,
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteResult {
    pub deleted: bool,
    pub id: u64,
    #[serde(default = "default_namespace")]
    pub namespace: String,
}
