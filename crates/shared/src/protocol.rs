use serde::{Deserialize, Serialize};

use crate::domain::DocumentId;

/// Entry of the `GET /pdfs` listing. `id` is canonical; `_id` is accepted
/// from document-store backends that expose their primary key verbatim, and
/// `id` wins when both are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDocumentRecord")]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub filename: String,
}

#[derive(Deserialize)]
struct RawDocumentRecord {
    id: Option<DocumentId>,
    #[serde(rename = "_id")]
    legacy_id: Option<DocumentId>,
    filename: String,
}

impl TryFrom<RawDocumentRecord> for DocumentRecord {
    type Error = String;

    fn try_from(raw: RawDocumentRecord) -> Result<Self, Self::Error> {
        let id = raw
            .id
            .or(raw.legacy_id)
            .ok_or_else(|| format!("document '{}' has neither `id` nor `_id`", raw.filename))?;
        Ok(Self {
            id,
            filename: raw.filename,
        })
    }
}

/// Entry of the `GET /search` response, ordered best match first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub filename: String,
    pub content: String,
}

/// Body of a successful `POST /upload`. The shape is backend-defined and
/// only ever logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadReceipt(pub serde_json::Value);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    pub q: String,
}

pub const UPLOAD_FIELD_NAME: &str = "pdf";
