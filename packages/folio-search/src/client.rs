use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result, response::SearchResponse};

/// HTTP gateway to the search engine.
pub struct SearchClient {
	http: Client,
	endpoint: String,
	username: Option<String>,
	password: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Acknowledged {
	acknowledged: bool,
}

/// Result of a single-document insert.
#[derive(Debug, Deserialize)]
pub struct IndexedDoc {
	#[serde(rename = "_id")]
	pub id: String,
	pub result: String,
}

impl SearchClient {
	pub fn new(cfg: &folio_config::Search) -> Result<Self> {
		let http = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;

		Ok(Self {
			http,
			endpoint: cfg.endpoint.trim_end_matches('/').to_string(),
			username: cfg.username.clone(),
			password: cfg.password.clone(),
		})
	}

	pub async fn index_exists(&self, index: &str) -> Result<bool> {
		let res = self.send(self.http.get(self.url(index))).await?;

		if res.status() == StatusCode::NOT_FOUND {
			return Ok(false);
		}

		Self::checked(res).await?;

		Ok(true)
	}

	/// Creates an index, waiting for one active shard before returning.
	pub async fn create_index(&self, index: &str, body: &Value) -> Result<bool> {
		let builder =
			self.http.put(self.url(index)).query(&[("wait_for_active_shards", "1")]).json(body);
		let res = Self::checked(self.send(builder).await?).await?;
		let ack: Acknowledged = res.json().await?;

		Ok(ack.acknowledged)
	}

	pub async fn delete_index(&self, index: &str) -> Result<()> {
		let res = self.send(self.http.delete(self.url(index))).await?;

		if res.status() == StatusCode::NOT_FOUND {
			return Err(Error::IndexNotFound { index: index.to_string() });
		}

		Self::checked(res).await?;

		Ok(())
	}

	/// Executes an arbitrary query document against `/{index}/_search`.
	pub async fn search(&self, index: &str, body: &Value) -> Result<SearchResponse> {
		let builder = self.http.post(format!("{}/_search", self.url(index))).json(body);
		let res = self.send(builder).await?;

		if res.status() == StatusCode::NOT_FOUND {
			return Err(Error::IndexNotFound { index: index.to_string() });
		}

		Ok(Self::checked(res).await?.json().await?)
	}

	/// Inserts one document via `/{index}/_doc`.
	pub async fn index_doc(&self, index: &str, doc: &Value) -> Result<IndexedDoc> {
		let builder = self.http.post(format!("{}/_doc", self.url(index))).json(doc);
		let res = self.send(builder).await?;

		if res.status() == StatusCode::NOT_FOUND {
			return Err(Error::IndexNotFound { index: index.to_string() });
		}

		Ok(Self::checked(res).await?.json().await?)
	}

	fn url(&self, index: &str) -> String {
		format!("{}/{index}", self.endpoint)
	}

	async fn send(&self, builder: RequestBuilder) -> Result<Response> {
		let builder = match &self.username {
			Some(username) => builder.basic_auth(username, self.password.as_deref()),
			None => builder,
		};

		Ok(builder.send().await?)
	}

	async fn checked(res: Response) -> Result<Response> {
		let status = res.status();

		if status.is_success() {
			return Ok(res);
		}

		let body = res.text().await.unwrap_or_default();

		Err(Error::Backend { status: status.as_u16(), body })
	}
}
