//! Interaction state and its transitions.
//!
//! `ControllerState` is the single owner of everything the window shows. It is
//! only changed through the methods below; each one returns the backend
//! command (if any) that the transition requires, and the caller queues it.
//! Rendering reads the state through the accessors and never mutates it
//! directly, except for the composer text bound to the input widget.

use std::path::PathBuf;

use shared::{
    domain::ChatMessage,
    protocol::{DocumentRecord, SearchResult},
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub const NO_RELEVANT_INFORMATION: &str =
    "Sorry, I couldn't find relevant information in the PDF database.";
pub const SEARCH_FAILURE: &str =
    "Sorry, there was an error processing your question. Please try again.";
pub const UPLOAD_FAILURE: &str = "Error uploading or processing the PDF. Please try again.";

/// Number of characters of the best match quoted back to the user.
pub const ANSWER_EXCERPT_CHARS: usize = 200;

/// The remote operation currently holding the pending flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingOperation {
    Upload,
    Search,
}

#[derive(Debug, Default)]
pub struct ControllerState {
    messages: Vec<ChatMessage>,
    documents: Vec<DocumentRecord>,
    /// Composer contents, bound to the text input.
    pub input: String,
    pending: Option<PendingOperation>,
    status: String,
}

impl ControllerState {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Initial document sync when the window first opens.
    pub fn mount(&mut self) -> BackendCommand {
        BackendCommand::ListDocuments
    }

    /// Sends the composer contents as a question. Empty input or an operation
    /// already in flight makes this a no-op.
    pub fn submit_input(&mut self) -> Option<BackendCommand> {
        let query = self.input.trim();
        if query.is_empty() || self.pending.is_some() {
            return None;
        }
        let query = query.to_string();

        self.pending = Some(PendingOperation::Search);
        self.messages
            .push(ChatMessage::user(std::mem::take(&mut self.input)));
        Some(BackendCommand::Search { query })
    }

    /// Starts uploading a picked file. The pending flag is advisory here: the
    /// upload affordance is disabled while it is set, nothing else stops a
    /// second upload.
    pub fn begin_upload(&mut self, path: PathBuf) -> BackendCommand {
        self.pending = Some(PendingOperation::Upload);
        BackendCommand::UploadPdf { path }
    }

    pub fn apply(&mut self, event: UiEvent) -> Option<BackendCommand> {
        match event {
            UiEvent::Info(message) => {
                self.status = message;
                None
            }
            UiEvent::DocumentsLoaded(documents) => {
                self.documents = documents;
                None
            }
            UiEvent::UploadSucceeded { filename } => {
                self.pending = None;
                self.messages
                    .push(ChatMessage::system(upload_success_text(&filename)));
                Some(BackendCommand::ListDocuments)
            }
            UiEvent::SearchAnswered(results) => {
                self.pending = None;
                self.messages
                    .push(ChatMessage::bot(answer_from_results(&results)));
                None
            }
            UiEvent::Error(err) => {
                self.apply_error(err);
                None
            }
        }
    }

    fn apply_error(&mut self, err: UiError) {
        tracing::error!(
            context = err.context().label(),
            "remote operation failed: {}",
            err.message()
        );
        match err.context() {
            // A stale list is preferred over a cleared one.
            UiErrorContext::DocumentSync => {}
            UiErrorContext::Upload => {
                self.pending = None;
                self.messages.push(ChatMessage::system(UPLOAD_FAILURE));
            }
            UiErrorContext::Search => {
                self.pending = None;
                self.messages.push(ChatMessage::bot(SEARCH_FAILURE));
            }
            // The worker never came up, so whatever was queued is lost.
            UiErrorContext::BackendStartup => {
                match self.pending.take() {
                    Some(PendingOperation::Search) => {
                        self.messages.push(ChatMessage::bot(SEARCH_FAILURE));
                    }
                    Some(PendingOperation::Upload) => {
                        self.messages.push(ChatMessage::system(UPLOAD_FAILURE));
                    }
                    None => {}
                }
                self.status = err.message().to_string();
            }
        }
    }
}

pub fn upload_success_text(filename: &str) -> String {
    format!("PDF \"{filename}\" uploaded and processed successfully.")
}

/// Turns a ranked result list into the bot's reply. Only the first result is
/// used; backend order is taken as given.
pub fn answer_from_results(results: &[SearchResult]) -> String {
    let Some(top) = results.first() else {
        return NO_RELEVANT_INFORMATION.to_string();
    };
    let excerpt: String = top.content.chars().take(ANSWER_EXCERPT_CHARS).collect();
    format!(
        "Based on the information found in the PDF \"{}\": {excerpt}...",
        top.filename
    )
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
