use serde::{Deserialize, Serialize};

use folio_search::schema;

use crate::{Error, FolioService, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct EnsureIndexRequest {
	pub index: String,
	/// Embedding width for the new index. Absent or zero falls back to the
	/// configured platform default.
	pub dimension: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnsureIndexResponse {
	pub created: bool,
}

impl FolioService {
	/// Creates the knowledge index unless it already exists.
	pub async fn ensure_index(&self, req: EnsureIndexRequest) -> Result<EnsureIndexResponse> {
		let index = req.index.trim();

		if index.is_empty() {
			return Err(Error::InvalidRequest { message: "index is required.".to_string() });
		}
		if self.search.index_exists(index).await? {
			return Ok(EnsureIndexResponse { created: false });
		}

		let body = schema::knowledge_index_body(&self.cfg.index, req.dimension);
		let created = self.search.create_index(index, &body).await?;

		tracing::info!(index, created, "Created knowledge index.");

		Ok(EnsureIndexResponse { created })
	}
}
