//! Query-document builders for the knowledge index.

use serde_json::{Map, Value, json};

use folio_domain::fields::{
	FIELD_CHUNK_SEQ_NUM, FIELD_DOC_NAME_TEXT, FIELD_DOC_PATH, FIELD_DOC_UUID,
};

pub const AGG_DISTINCT_FILES: &str = "distinct_files";
pub const AGG_UNIQUE_DOCS: &str = "unique_docs";
pub const AGG_TOP_DOC: &str = "top_doc";

/// Filter shared by the count query and the cursor walk. With neither term
/// present every document qualifies.
pub fn file_filter(search: Option<&str>, uuid: Option<&str>) -> Value {
	let mut clauses = Vec::new();

	if let Some(term) = non_empty(search) {
		clauses.push(json!({ "wildcard": { FIELD_DOC_NAME_TEXT: { "value": format!("*{term}*") } } }));
	}
	if let Some(term) = non_empty(uuid) {
		clauses.push(json!({ "wildcard": { FIELD_DOC_UUID: { "value": format!("*{term}*") } } }));
	}

	match clauses.len() {
		0 => json!({ "match_all": {} }),
		1 => clauses.remove(0),
		_ => json!({ "bool": { "must": clauses } }),
	}
}

/// Zero-hit cardinality query estimating the number of distinct files.
pub fn distinct_files(filter: &Value) -> Value {
	json!({
		"size": 0,
		"query": filter,
		"aggs": {
			AGG_DISTINCT_FILES: { "cardinality": { "field": FIELD_DOC_PATH } }
		}
	})
}

/// One step of the composite cursor walk over file groups. `after` is the
/// after-key returned by the previous step, absent on the first.
pub fn grouped_files(filter: &Value, page_size: u32, after: Option<&Map<String, Value>>) -> Value {
	let mut composite = json!({
		"size": page_size,
		"sources": [
			{ FIELD_DOC_PATH: { "terms": { "field": FIELD_DOC_PATH } } }
		]
	});

	if let Some(after) = after {
		composite["after"] = Value::Object(after.clone());
	}

	json!({
		"size": 0,
		"query": filter,
		"aggs": {
			AGG_UNIQUE_DOCS: {
				"composite": composite,
				"aggs": {
					AGG_TOP_DOC: { "top_hits": { "size": 1 } }
				}
			}
		}
	})
}

/// Offset page over the chunks of one file, in reading order. Relevance is
/// irrelevant here: the sort is the chunk sequence, always ascending.
pub fn file_chunks(doc_path: &str, page: u32, size: u32) -> Value {
	json!({
		"query": { "term": { FIELD_DOC_PATH: doc_path } },
		"sort": [
			{ FIELD_CHUNK_SEQ_NUM: { "order": "asc" } }
		],
		"from": u64::from(page.saturating_sub(1)) * u64::from(size),
		"size": size
	})
}

fn non_empty(term: Option<&str>) -> Option<&str> {
	term.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_filter_matches_all() {
		assert_eq!(file_filter(None, None), json!({ "match_all": {} }));
		assert_eq!(file_filter(Some("  "), None), json!({ "match_all": {} }));
	}

	#[test]
	fn name_filter_wraps_the_term_in_wildcards() {
		let filter = file_filter(Some("report"), None);

		assert_eq!(filter["wildcard"]["doc_nm.text"]["value"], "*report*");
	}

	#[test]
	fn both_terms_combine_into_a_bool_query() {
		let filter = file_filter(Some("report"), Some("b37a"));
		let must = filter["bool"]["must"].as_array().expect("Expected a must clause.");

		assert_eq!(must.len(), 2);
		assert_eq!(must[1]["wildcard"]["doc_uuid"]["value"], "*b37a*");
	}

	#[test]
	fn distinct_files_query_returns_no_hits() {
		let query = distinct_files(&json!({ "match_all": {} }));

		assert_eq!(query["size"], 0);
		assert_eq!(
			query["aggs"]["distinct_files"]["cardinality"]["field"],
			"doc_path_anony"
		);
	}

	#[test]
	fn first_walk_step_carries_no_after_key() {
		let query = grouped_files(&json!({ "match_all": {} }), 10, None);
		let composite = &query["aggs"]["unique_docs"]["composite"];

		assert_eq!(composite["size"], 10);
		assert!(composite.get("after").is_none());
		assert_eq!(
			query["aggs"]["unique_docs"]["aggs"]["top_doc"]["top_hits"]["size"],
			1
		);
	}

	#[test]
	fn later_walk_steps_resume_at_the_after_key() {
		let mut after = Map::new();

		after.insert("doc_path_anony".to_string(), json!("a/b.pdf"));

		let query = grouped_files(&json!({ "match_all": {} }), 10, Some(&after));

		assert_eq!(
			query["aggs"]["unique_docs"]["composite"]["after"]["doc_path_anony"],
			"a/b.pdf"
		);
	}

	#[test]
	fn chunk_page_sorts_by_sequence_and_offsets_from_the_page() {
		let query = file_chunks("a/b.pdf", 2, 10);

		assert_eq!(query["query"]["term"]["doc_path_anony"], "a/b.pdf");
		assert_eq!(query["sort"][0]["chunk_seq.num"]["order"], "asc");
		assert_eq!(query["from"], 10);
		assert_eq!(query["size"], 10);
	}
}
