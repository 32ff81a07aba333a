//! UI/backend events and error modeling for desktop GUI controller.

use shared::protocol::{DocumentRecord, SearchResult};

#[derive(Debug, Clone)]
pub enum UiEvent {
    Info(String),
    DocumentsLoaded(Vec<DocumentRecord>),
    UploadSucceeded { filename: String },
    SearchAnswered(Vec<SearchResult>),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    DocumentSync,
    Upload,
    Search,
}

impl UiErrorContext {
    pub fn label(self) -> &'static str {
        match self {
            UiErrorContext::BackendStartup => "backend startup",
            UiErrorContext::DocumentSync => "document list sync",
            UiErrorContext::Upload => "pdf upload",
            UiErrorContext::Search => "search",
        }
    }
}

/// A failed remote operation. Transport failures and non-success statuses
/// share this one shape; `message` is diagnostic only.
#[derive(Debug, Clone)]
pub struct UiError {
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            context,
            message: message.into(),
        }
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
