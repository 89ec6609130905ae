use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use folio_domain::page::Page;
use folio_service::{
    ChunkHit, EnsureIndexRequest, EnsureIndexResponse, Error as ServiceError, GroupItem,
    ListChunksRequest, ListFilesRequest,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/indices/{index}", put(ensure_index))
        .route("/v1/indices/{index}/files", get(list_files))
        .route("/v1/indices/{index}/chunks", get(list_chunks))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

#[derive(Debug, Deserialize)]
struct ListFilesQuery {
    page: Option<u32>,
    size: Option<u32>,
    search: Option<String>,
    uuid: Option<String>,
}

async fn list_files(
    State(state): State<AppState>,
    Path(index): Path<String>,
    Query(query): Query<ListFilesQuery>,
) -> Result<Json<Page<GroupItem>>, ApiError> {
    let request = ListFilesRequest {
        index,
        page: query.page.unwrap_or(1),
        size: query.size.unwrap_or(state.service.cfg.paging.default_page_size),
        search: query.search,
        uuid: query.uuid,
    };
    let response = state.service.list_files(request).await?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct ListChunksQuery {
    doc_path: String,
    page: Option<u32>,
    size: Option<u32>,
}

async fn list_chunks(
    State(state): State<AppState>,
    Path(index): Path<String>,
    Query(query): Query<ListChunksQuery>,
) -> Result<Json<Page<ChunkHit>>, ApiError> {
    let request = ListChunksRequest {
        index,
        doc_path: query.doc_path,
        page: query.page.unwrap_or(1),
        size: query.size.unwrap_or(state.service.cfg.paging.default_page_size),
    };
    let response = state.service.list_chunks(request).await?;
    Ok(Json(response))
}

#[derive(Debug, Default, Deserialize)]
struct EnsureIndexBody {
    dimension: Option<u32>,
}

async fn ensure_index(
    State(state): State<AppState>,
    Path(index): Path<String>,
    body: Option<Json<EnsureIndexBody>>,
) -> Result<Json<EnsureIndexResponse>, ApiError> {
    let body = body.map(|Json(inner)| inner).unwrap_or_default();
    let request = EnsureIndexRequest {
        index,
        dimension: body.dimension,
    };
    let response = state.service.ensure_index(request).await?;
    Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error_code: String,
    message: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error_code: &'static str,
    message: String,
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidRequest { message } => Self {
                status: StatusCode::BAD_REQUEST,
                error_code: "INVALID_REQUEST",
                message,
            },
            ServiceError::NotFound { message } => Self {
                status: StatusCode::NOT_FOUND,
                error_code: "NOT_FOUND",
                message,
            },
            ServiceError::Backend { message } => Self {
                status: StatusCode::BAD_GATEWAY,
                error_code: "SEARCH_BACKEND_UNAVAILABLE",
                message,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error_code: self.error_code.to_string(),
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}
