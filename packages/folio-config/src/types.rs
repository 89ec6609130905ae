use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub search: Search,
	pub index: Index,
	pub paging: Paging,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

/// Connection settings for the search engine behind the pagination API.
#[derive(Debug, Deserialize)]
pub struct Search {
	pub endpoint: String,
	pub username: Option<String>,
	pub password: Option<String>,
	pub timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct Index {
	pub shards: u32,
	pub replicas: u32,
	/// Embedding width used when an index is created without an explicit
	/// dimension. Must match the embedding model the ingest side runs.
	#[serde(default = "default_vector_dim")]
	pub vector_dim: u32,
}

#[derive(Debug, Deserialize)]
pub struct Paging {
	#[serde(default = "default_page_size")]
	pub default_page_size: u32,
	#[serde(default = "default_max_page_size")]
	pub max_page_size: u32,
}

fn default_vector_dim() -> u32 {
	2_048
}

fn default_page_size() -> u32 {
	10
}

fn default_max_page_size() -> u32 {
	100
}
