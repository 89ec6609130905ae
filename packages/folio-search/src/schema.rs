//! Settings and mappings for a knowledge index.

use serde_json::{Value, json};

use folio_domain::fields::{
	DATE_FORMAT, DATETIME_FORMAT, FIELD_CHUNK_CONTENTS, FIELD_CHUNK_EMBEDDING, FIELD_CHUNK_ID,
	FIELD_CHUNK_REG_DTM, FIELD_CHUNK_SEQ, FIELD_CHUNK_UPD_DTM, FIELD_DATASET_CODE,
	FIELD_DOC_KEYWORDS, FIELD_DOC_NAME, FIELD_DOC_PATH, FIELD_DOC_REG_DATE, FIELD_DOC_SUMMARY,
	FIELD_DOC_UUID,
};

/// Builds the `{settings, mappings}` creation body for a knowledge index.
///
/// `dimension` of `None` or `Some(0)` falls back to the configured platform
/// default instead of failing; the ingest side was shipped with the same
/// fallback. The mapping is closed (`dynamic: false`), so unknown fields are
/// rejected rather than silently indexed.
pub fn knowledge_index_body(cfg: &folio_config::Index, dimension: Option<u32>) -> Value {
	let dims = resolve_dimension(cfg, dimension);

	json!({
		"settings": {
			"number_of_shards": cfg.shards,
			"number_of_replicas": cfg.replicas
		},
		"mappings": {
			"dynamic": false,
			"properties": {
				FIELD_DOC_PATH: { "type": "keyword" },
				FIELD_DOC_UUID: { "type": "keyword" },
				FIELD_DATASET_CODE: { "type": "keyword" },
				FIELD_DOC_NAME: {
					"type": "keyword",
					"fields": { "text": { "type": "text" } }
				},
				FIELD_DOC_SUMMARY: { "type": "text" },
				FIELD_DOC_KEYWORDS: { "type": "text" },
				FIELD_CHUNK_ID: { "type": "keyword" },
				FIELD_CHUNK_SEQ: {
					"type": "keyword",
					"fields": {
						// Legacy writers stored non-numeric sequences; those
						// documents must still index.
						"num": { "type": "long", "ignore_malformed": true }
					}
				},
				FIELD_CHUNK_CONTENTS: { "type": "text" },
				FIELD_CHUNK_EMBEDDING: {
					"type": "dense_vector",
					"dims": dims,
					"index": true,
					"similarity": "cosine"
				},
				FIELD_DOC_REG_DATE: { "type": "date", "format": DATE_FORMAT },
				FIELD_CHUNK_REG_DTM: { "type": "date", "format": DATETIME_FORMAT },
				FIELD_CHUNK_UPD_DTM: { "type": "date", "format": DATETIME_FORMAT }
			}
		}
	})
}

fn resolve_dimension(cfg: &folio_config::Index, dimension: Option<u32>) -> u32 {
	match dimension {
		Some(dims) if dims > 0 => dims,
		_ => cfg.vector_dim,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn index_cfg() -> folio_config::Index {
		folio_config::Index { shards: 3, replicas: 1, vector_dim: 2_048 }
	}

	#[test]
	fn unset_dimension_falls_back_to_the_configured_default() {
		let body = knowledge_index_body(&index_cfg(), None);

		assert_eq!(body["mappings"]["properties"]["chunk_embedding"]["dims"], 2_048);
	}

	#[test]
	fn zero_dimension_falls_back_to_the_configured_default() {
		let body = knowledge_index_body(&index_cfg(), Some(0));

		assert_eq!(body["mappings"]["properties"]["chunk_embedding"]["dims"], 2_048);
	}

	#[test]
	fn explicit_dimension_is_used() {
		let body = knowledge_index_body(&index_cfg(), Some(1_024));

		assert_eq!(body["mappings"]["properties"]["chunk_embedding"]["dims"], 1_024);
		assert_eq!(
			body["mappings"]["properties"]["chunk_embedding"]["similarity"],
			"cosine"
		);
	}

	#[test]
	fn mapping_is_closed_and_carries_the_configured_shards() {
		let body = knowledge_index_body(&index_cfg(), None);

		assert_eq!(body["mappings"]["dynamic"], false);
		assert_eq!(body["settings"]["number_of_shards"], 3);
		assert_eq!(body["settings"]["number_of_replicas"], 1);
	}

	#[test]
	fn date_fields_pin_the_ingest_formats() {
		let body = knowledge_index_body(&index_cfg(), None);
		let properties = &body["mappings"]["properties"];

		assert_eq!(properties["doc_reg_dt"]["format"], "yyyyMMdd");
		assert_eq!(properties["chunk_reg_dtm"]["format"], "yyyy-MM-dd HH:mm:ss");
		assert_eq!(properties["chunk_seq"]["fields"]["num"]["ignore_malformed"], true);
	}
}
