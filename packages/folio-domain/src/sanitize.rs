use serde_json::Value;

use crate::fields::FIELD_CHUNK_EMBEDDING;

/// Returns a copy of `source` with the embedding vector removed.
///
/// The vector is large and never useful to a caller. Idempotent: a source
/// without the field comes back unchanged, and the caller's value is never
/// mutated.
pub fn sanitized(source: &Value) -> Value {
	let mut out = source.clone();

	if let Some(map) = out.as_object_mut() {
		map.remove(FIELD_CHUNK_EMBEDDING);
	}

	out
}
