use async_trait::async_trait;
use reqwest::{
    multipart::{Form, Part},
    Client, Response,
};
use serde::de::DeserializeOwned;
use shared::protocol::{
    DocumentRecord, SearchQuery, SearchResult, UploadReceipt, UPLOAD_FIELD_NAME,
};
use tracing::{debug, info};

pub mod config;
pub mod error;

pub use config::ClientSettings;
pub use error::ClientError;

const PDF_MIME_TYPE: &str = "application/pdf";

const LIST_ENDPOINT: &str = "/pdfs";
const UPLOAD_ENDPOINT: &str = "/upload";
const SEARCH_ENDPOINT: &str = "/search";

/// A single PDF picked by the user, read fully into memory.
#[derive(Debug, Clone)]
pub struct PdfUpload {
    pub filename: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// The three remote operations of the document backend. Ranking, extraction
/// and storage all live behind this seam.
#[async_trait]
pub trait DocumentService: Send + Sync {
    async fn list_documents(&self) -> Result<Vec<DocumentRecord>, ClientError>;
    async fn upload_pdf(&self, upload: PdfUpload) -> Result<UploadReceipt, ClientError>;
    /// Results come back in backend relevance order; callers must not re-sort.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClientError>;
}

pub struct PdfServiceClient {
    http: Client,
    server_url: String,
}

impl PdfServiceClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), server_url)
    }

    pub fn with_http_client(http: Client, server_url: impl Into<String>) -> Self {
        let server_url = server_url.into();
        Self {
            http,
            server_url: server_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.server_url)
    }
}

fn ensure_success(endpoint: &'static str, response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Status { endpoint, status })
    }
}

async fn decode_json<T: DeserializeOwned>(
    endpoint: &'static str,
    response: Response,
) -> Result<T, ClientError> {
    response
        .json()
        .await
        .map_err(|source| ClientError::Decode { endpoint, source })
}

#[async_trait]
impl DocumentService for PdfServiceClient {
    async fn list_documents(&self) -> Result<Vec<DocumentRecord>, ClientError> {
        let response = self
            .http
            .get(self.endpoint_url(LIST_ENDPOINT))
            .send()
            .await?;
        let documents: Vec<DocumentRecord> =
            decode_json(LIST_ENDPOINT, ensure_success(LIST_ENDPOINT, response)?).await?;
        debug!(count = documents.len(), "fetched document listing");
        Ok(documents)
    }

    async fn upload_pdf(&self, upload: PdfUpload) -> Result<UploadReceipt, ClientError> {
        let PdfUpload {
            filename,
            mime_type,
            bytes,
        } = upload;
        let size_bytes = bytes.len();
        let part = Part::bytes(bytes)
            .file_name(filename.clone())
            .mime_str(mime_type.as_deref().unwrap_or(PDF_MIME_TYPE))?;
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        let response = self
            .http
            .post(self.endpoint_url(UPLOAD_ENDPOINT))
            .multipart(form)
            .send()
            .await?;
        let receipt: UploadReceipt =
            decode_json(UPLOAD_ENDPOINT, ensure_success(UPLOAD_ENDPOINT, response)?).await?;
        info!(%filename, size_bytes, receipt = %receipt.0, "pdf upload accepted");
        Ok(receipt)
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClientError> {
        let response = self
            .http
            .get(self.endpoint_url(SEARCH_ENDPOINT))
            .query(&SearchQuery {
                q: query.to_string(),
            })
            .send()
            .await?;
        let results: Vec<SearchResult> =
            decode_json(SEARCH_ENDPOINT, ensure_success(SEARCH_ENDPOINT, response)?).await?;
        debug!(count = results.len(), "search returned results");
        Ok(results)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
