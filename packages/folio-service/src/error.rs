pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Search backend error: {message}")]
	Backend { message: String },
}

impl From<folio_search::Error> for Error {
	fn from(err: folio_search::Error) -> Self {
		match err {
			folio_search::Error::IndexNotFound { index } =>
				Self::NotFound { message: format!("Index {index} does not exist.") },
			other => Self::Backend { message: other.to_string() },
		}
	}
}
