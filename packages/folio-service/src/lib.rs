pub mod ensure_index;
pub mod list_chunks;
pub mod list_files;

mod error;

pub use error::{Error, Result};

use std::{future::Future, pin::Pin, sync::Arc};

use serde_json::Value;

pub use ensure_index::{EnsureIndexRequest, EnsureIndexResponse};
pub use list_chunks::{ChunkHit, ListChunksRequest};
pub use list_files::{GroupItem, ListFilesRequest, TopHit};

use folio_config::Config;
use folio_search::{client::SearchClient, response::SearchResponse};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Round-trips to the search engine, pluggable so tests can script
/// responses without a live backend.
pub trait SearchBackend
where
	Self: Send + Sync,
{
	fn search<'a>(
		&'a self,
		index: &'a str,
		body: &'a Value,
	) -> BoxFuture<'a, folio_search::Result<SearchResponse>>;

	fn index_exists<'a>(&'a self, index: &'a str) -> BoxFuture<'a, folio_search::Result<bool>>;

	fn create_index<'a>(
		&'a self,
		index: &'a str,
		body: &'a Value,
	) -> BoxFuture<'a, folio_search::Result<bool>>;
}

struct HttpBackend {
	client: SearchClient,
}

impl SearchBackend for HttpBackend {
	fn search<'a>(
		&'a self,
		index: &'a str,
		body: &'a Value,
	) -> BoxFuture<'a, folio_search::Result<SearchResponse>> {
		Box::pin(self.client.search(index, body))
	}

	fn index_exists<'a>(&'a self, index: &'a str) -> BoxFuture<'a, folio_search::Result<bool>> {
		Box::pin(self.client.index_exists(index))
	}

	fn create_index<'a>(
		&'a self,
		index: &'a str,
		body: &'a Value,
	) -> BoxFuture<'a, folio_search::Result<bool>> {
		Box::pin(self.client.create_index(index, body))
	}
}

pub struct FolioService {
	pub cfg: Config,
	pub search: Arc<dyn SearchBackend>,
}

impl FolioService {
	pub fn new(cfg: Config) -> folio_search::Result<Self> {
		let client = SearchClient::new(&cfg.search)?;

		Ok(Self { cfg, search: Arc::new(HttpBackend { client }) })
	}

	pub fn with_backend(cfg: Config, search: Arc<dyn SearchBackend>) -> Self {
		Self { cfg, search }
	}

	pub(crate) fn clamp_paging(&self, page: u32, size: u32) -> Result<(u32, u32)> {
		if page == 0 {
			return Err(Error::InvalidRequest {
				message: "page is 1-based and must be positive.".to_string(),
			});
		}
		if size == 0 {
			return Err(Error::InvalidRequest {
				message: "size must be positive.".to_string(),
			});
		}

		Ok((page, size.min(self.cfg.paging.max_page_size)))
	}
}
