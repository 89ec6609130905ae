mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Index, Paging, Search, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.search.endpoint.trim().is_empty() {
		return Err(Error::Validation {
			message: "search.endpoint must be non-empty.".to_string(),
		});
	}
	if cfg.search.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "search.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.index.shards == 0 {
		return Err(Error::Validation {
			message: "index.shards must be greater than zero.".to_string(),
		});
	}
	if cfg.index.vector_dim == 0 {
		return Err(Error::Validation {
			message: "index.vector_dim must be greater than zero.".to_string(),
		});
	}
	if cfg.paging.default_page_size == 0 {
		return Err(Error::Validation {
			message: "paging.default_page_size must be greater than zero.".to_string(),
		});
	}
	if cfg.paging.max_page_size < cfg.paging.default_page_size {
		return Err(Error::Validation {
			message: "paging.max_page_size must not be below paging.default_page_size."
				.to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	while cfg.search.endpoint.ends_with('/') {
		cfg.search.endpoint.pop();
	}
	if cfg.search.username.as_deref().is_some_and(|value| value.trim().is_empty()) {
		cfg.search.username = None;
	}
	if cfg.search.password.as_deref().is_some_and(|value| value.trim().is_empty()) {
		cfg.search.password = None;
	}
}
