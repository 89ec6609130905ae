use serde::{Deserialize, Serialize};
use serde_json::Value;

use folio_domain::{page::Page, sanitize};
use folio_search::query;

use crate::{Error, FolioService, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct ListChunksRequest {
	pub index: String,
	pub doc_path: String,
	pub page: u32,
	pub size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkHit {
	pub index: String,
	pub id: String,
	pub score: Option<f64>,
	pub source: Value,
}

impl FolioService {
	/// Pages through the chunks of one file in ascending `chunk_seq` order.
	///
	/// This is plain offset pagination: term-filtered queries return an
	/// exact total, and reading a file front to back has nothing to do with
	/// relevance scores.
	pub async fn list_chunks(&self, req: ListChunksRequest) -> Result<Page<ChunkHit>> {
		let (page, size) = self.clamp_paging(req.page, req.size)?;
		let doc_path = req.doc_path.trim();

		if doc_path.is_empty() {
			return Err(Error::InvalidRequest { message: "doc_path is required.".to_string() });
		}

		let body = query::file_chunks(doc_path, page, size);
		let response = self.search.search(&req.index, &body).await?;
		let total = response.hits.total.0;
		let content = response
			.hits
			.hits
			.into_iter()
			.map(|hit| ChunkHit {
				index: hit.index,
				id: hit.id,
				score: hit.score,
				source: sanitize::sanitized(&hit.source),
			})
			.collect();

		Ok(Page::new(content, page, size, total))
	}
}
