//! Typed decoding of `_search` responses.
//!
//! Every aggregation shape the engine returns is decoded in one step here.
//! Absent or malformed pieces degrade to `None` (or are skipped) instead of
//! failing the surrounding page; callers decide what a missing piece means.

use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Map, Value};

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
	#[serde(default)]
	pub hits: Hits,
	#[serde(default)]
	pub aggregations: Map<String, Value>,
}

impl SearchResponse {
	/// Decodes one named aggregation, `None` when absent or malformed.
	pub fn aggregation<T>(&self, name: &str) -> Option<T>
	where
		T: DeserializeOwned,
	{
		let raw = self.aggregations.get(name)?;

		serde_json::from_value(raw.clone()).ok()
	}
}

#[derive(Debug, Default, Deserialize)]
pub struct Hits {
	#[serde(default)]
	pub total: TotalHits,
	#[serde(default)]
	pub hits: Vec<Hit>,
}

/// Total-hit count. Depending on engine version the wire shape is either a
/// bare number or `{"value": n, "relation": ...}`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TotalHits(pub u64);

impl<'de> Deserialize<'de> for TotalHits {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Repr {
			Number(u64),
			Object { value: u64 },
		}

		let (Repr::Number(value) | Repr::Object { value }) = Repr::deserialize(deserializer)?;

		Ok(Self(value))
	}
}

#[derive(Debug, Deserialize)]
pub struct Hit {
	#[serde(rename = "_index", default)]
	pub index: String,
	#[serde(rename = "_id", default)]
	pub id: String,
	#[serde(rename = "_score", default)]
	pub score: Option<f64>,
	#[serde(rename = "_source", default)]
	pub source: Value,
}

/// Probabilistic distinct-count result; approximate for high cardinalities.
#[derive(Debug, Deserialize)]
pub struct CardinalityAgg {
	pub value: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct CompositeAgg {
	#[serde(default, deserialize_with = "lenient_buckets")]
	pub buckets: Vec<CompositeBucket>,
	/// Cursor for the next bucket page; absent on the last one.
	#[serde(default)]
	pub after_key: Option<Map<String, Value>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CompositeBucket {
	#[serde(default)]
	pub key: Map<String, Value>,
	#[serde(default)]
	pub doc_count: u64,
	#[serde(default, deserialize_with = "lenient_top_hits")]
	pub top_doc: Option<TopHits>,
}

#[derive(Debug, Deserialize)]
pub struct TopHits {
	#[serde(default)]
	pub hits: Hits,
}

/// A bucket the engine rendered in an unexpected shape is skipped; the rest
/// of the page still decodes.
fn lenient_buckets<'de, D>(deserializer: D) -> Result<Vec<CompositeBucket>, D::Error>
where
	D: serde::Deserializer<'de>,
{
	let raw = Vec::<Value>::deserialize(deserializer)?;

	Ok(raw.into_iter().filter_map(|bucket| serde_json::from_value(bucket).ok()).collect())
}

/// An unreadable top hit leaves the bucket without a preview document.
fn lenient_top_hits<'de, D>(deserializer: D) -> Result<Option<TopHits>, D::Error>
where
	D: serde::Deserializer<'de>,
{
	let raw = Value::deserialize(deserializer)?;

	Ok(serde_json::from_value(raw).ok())
}
