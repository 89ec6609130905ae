use serde::{Deserialize, Serialize};
use serde_json::Value;

use folio_domain::{fields::FIELD_DOC_PATH, page::Page, sanitize};
use folio_search::{
	query,
	response::{CardinalityAgg, CompositeAgg, CompositeBucket},
};

use crate::{FolioService, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct ListFilesRequest {
	pub index: String,
	pub page: u32,
	pub size: u32,
	pub search: Option<String>,
	pub uuid: Option<String>,
}

/// One distinct file, represented by its chunk count and a preview document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupItem {
	pub doc_path: Option<String>,
	pub doc_count: u64,
	pub top_hit: Option<TopHit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopHit {
	pub index: String,
	pub id: String,
	pub score: Option<f64>,
	pub source: Value,
}

impl FolioService {
	/// Lists distinct files, one numbered page at a time.
	///
	/// Composite aggregations only cursor forward, so page N costs N
	/// round-trips from the start. That is the intended trade for complete,
	/// duplicate-free enumeration; the target workload is shallow browse
	/// pagination. The total is a cardinality estimate and may be
	/// approximate when there are very many files.
	pub async fn list_files(&self, req: ListFilesRequest) -> Result<Page<GroupItem>> {
		let (page, size) = self.clamp_paging(req.page, req.size)?;
		let filter = query::file_filter(req.search.as_deref(), req.uuid.as_deref());
		let total = self.estimate_distinct_files(&req.index, &filter).await?;
		let groups = self.walk_to_page(&req.index, &filter, page, size).await?;

		Ok(Page::new(groups, page, size, total))
	}

	/// Approximate count of distinct file groups under `filter`. A missing
	/// or malformed aggregation counts as zero: the estimate only feeds the
	/// page metadata, never the page content.
	async fn estimate_distinct_files(&self, index: &str, filter: &Value) -> Result<u64> {
		let body = query::distinct_files(filter);
		let response = self.search.search(index, &body).await?;
		let estimate = response
			.aggregation::<CardinalityAgg>(query::AGG_DISTINCT_FILES)
			.map(|agg| agg.value as u64)
			.unwrap_or(0);

		Ok(estimate)
	}

	async fn walk_to_page(
		&self,
		index: &str,
		filter: &Value,
		page: u32,
		size: u32,
	) -> Result<Vec<GroupItem>> {
		let mut after = None;

		for current in 1..=page {
			let body = query::grouped_files(filter, size, after.as_ref());
			let response = self.search.search(index, &body).await?;
			let Some(agg) = response.aggregation::<CompositeAgg>(query::AGG_UNIQUE_DOCS) else {
				return Ok(Vec::new());
			};

			tracing::debug!(index, current, buckets = agg.buckets.len(), "Walked one group page.");

			if current == page {
				return Ok(agg.buckets.into_iter().map(group_item).collect());
			}
			if agg.buckets.is_empty() || agg.after_key.is_none() {
				// The cursor ran out before the requested page; an empty
				// page, not an error.
				return Ok(Vec::new());
			}

			after = agg.after_key;
		}

		Ok(Vec::new())
	}
}

fn group_item(bucket: CompositeBucket) -> GroupItem {
	let doc_path = bucket.key.get(FIELD_DOC_PATH).and_then(Value::as_str).map(str::to_string);
	let top_hit =
		bucket.top_doc.and_then(|top| top.hits.hits.into_iter().next()).map(|hit| TopHit {
			index: hit.index,
			id: hit.id,
			score: hit.score,
			source: sanitize::sanitized(&hit.source),
		});

	GroupItem { doc_path, doc_count: bucket.doc_count, top_hit }
}
