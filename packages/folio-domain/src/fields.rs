//! Field names and date formats of the knowledge index.
//!
//! The index mapping is closed (`dynamic: false`): writers and readers must
//! agree on these exact names or the engine drops the data silently.

pub const FIELD_DOC_PATH: &str = "doc_path_anony";
pub const FIELD_DOC_UUID: &str = "doc_uuid";
pub const FIELD_DATASET_CODE: &str = "dataset_cd";
pub const FIELD_DOC_NAME: &str = "doc_nm";
pub const FIELD_DOC_NAME_TEXT: &str = "doc_nm.text";
pub const FIELD_DOC_SUMMARY: &str = "doc_summary";
pub const FIELD_DOC_KEYWORDS: &str = "doc_keywords";
pub const FIELD_CHUNK_ID: &str = "chunk_id";
pub const FIELD_CHUNK_SEQ: &str = "chunk_seq";
pub const FIELD_CHUNK_SEQ_NUM: &str = "chunk_seq.num";
pub const FIELD_CHUNK_CONTENTS: &str = "chunk_conts";
pub const FIELD_CHUNK_EMBEDDING: &str = "chunk_embedding";
pub const FIELD_DOC_REG_DATE: &str = "doc_reg_dt";
pub const FIELD_CHUNK_REG_DTM: &str = "chunk_reg_dtm";
pub const FIELD_CHUNK_UPD_DTM: &str = "chunk_upd_dtm";

/// Calendar dates as the ingest side writes them.
pub const DATE_FORMAT: &str = "yyyyMMdd";
/// Timestamps as the ingest side writes them.
pub const DATETIME_FORMAT: &str = "yyyy-MM-dd HH:mm:ss";
