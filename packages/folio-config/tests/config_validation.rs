use toml::Value;

use folio_config::{Config, Error};

const SAMPLE_CONFIG_TOML: &str = r#"
[service]
http_bind = "127.0.0.1:8080"
log_level = "info"

[search]
endpoint   = "http://localhost:9200"
timeout_ms = 10000

[index]
shards     = 1
replicas   = 1
vector_dim = 2048

[paging]
default_page_size = 10
max_page_size     = 100
"#;

fn sample_with(section: &str, key: &str, value: Value) -> String {
	let mut root: Value = toml::from_str(SAMPLE_CONFIG_TOML).expect("Failed to parse sample.");
	let table = root
		.get_mut(section)
		.and_then(Value::as_table_mut)
		.expect("Sample config must include the section.");

	table.insert(key.to_string(), value);

	toml::to_string(&root).expect("Failed to render sample config.")
}

fn parse_and_validate(raw: &str) -> Result<Config, Error> {
	let cfg: Config = toml::from_str(raw).expect("Failed to parse config.");

	folio_config::validate(&cfg).map(|()| cfg)
}

#[test]
fn accepts_sample_config() {
	let cfg = parse_and_validate(SAMPLE_CONFIG_TOML).expect("Sample config must validate.");

	assert_eq!(cfg.search.endpoint, "http://localhost:9200");
	assert_eq!(cfg.index.vector_dim, 2_048);
	assert_eq!(cfg.paging.default_page_size, 10);
}

#[test]
fn defaults_vector_dim_when_absent() {
	let raw = SAMPLE_CONFIG_TOML.replace("vector_dim = 2048", "");
	let cfg = parse_and_validate(&raw).expect("Config without vector_dim must validate.");

	assert_eq!(cfg.index.vector_dim, 2_048);
}

#[test]
fn rejects_empty_endpoint() {
	let raw = sample_with("search", "endpoint", Value::String(" ".to_string()));

	assert!(matches!(parse_and_validate(&raw), Err(Error::Validation { .. })));
}

#[test]
fn rejects_zero_timeout() {
	let raw = sample_with("search", "timeout_ms", Value::Integer(0));

	assert!(matches!(parse_and_validate(&raw), Err(Error::Validation { .. })));
}

#[test]
fn rejects_zero_shards() {
	let raw = sample_with("index", "shards", Value::Integer(0));

	assert!(matches!(parse_and_validate(&raw), Err(Error::Validation { .. })));
}

#[test]
fn rejects_max_page_size_below_default() {
	let raw = sample_with("paging", "max_page_size", Value::Integer(5));

	assert!(matches!(parse_and_validate(&raw), Err(Error::Validation { .. })));
}
