//! Backend commands queued from UI to backend worker.

use std::path::PathBuf;

use crate::controller::events::UiErrorContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    ListDocuments,
    UploadPdf { path: PathBuf },
    Search { query: String },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::ListDocuments => "list_documents",
            BackendCommand::UploadPdf { .. } => "upload_pdf",
            BackendCommand::Search { .. } => "search",
        }
    }

    /// Which handler boundary owns a failure of this command.
    pub fn error_context(&self) -> UiErrorContext {
        match self {
            BackendCommand::ListDocuments => UiErrorContext::DocumentSync,
            BackendCommand::UploadPdf { .. } => UiErrorContext::Upload,
            BackendCommand::Search { .. } => UiErrorContext::Search,
        }
    }
}
