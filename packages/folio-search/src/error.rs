#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Reqwest(#[from] reqwest::Error),
	#[error(transparent)]
	SerdeJson(#[from] serde_json::Error),
	#[error("Index not found: {index}")]
	IndexNotFound { index: String },
	#[error("Search backend returned status {status}: {body}")]
	Backend { status: u16, body: String },
}
