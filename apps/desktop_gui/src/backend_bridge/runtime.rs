//! Runtime bridge between UI command queue and backend event intake.
//!
//! One worker thread owns a tokio runtime and the HTTP client. Commands are
//! handled strictly in arrival order, each awaited to completion before its
//! result event is sent back, so at most one remote call is in flight.

use std::{path::Path, thread};

use client_core::{ClientError, DocumentService, PdfServiceClient, PdfUpload};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

const FALLBACK_UPLOAD_NAME: &str = "document.pdf";

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, server_url: String) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let client = PdfServiceClient::new(server_url);
        let _ = ui_tx.try_send(UiEvent::Info(format!(
            "Connected to {}",
            client.server_url()
        )));

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                let event = handle_command(&client, cmd).await;
                if ui_tx.send(event).is_err() {
                    tracing::debug!("ui event receiver dropped; stopping backend worker");
                    break;
                }
            }
        });
    });
}

/// Runs one command against `service` and converts the outcome into the event
/// the controller consumes. Never fails: errors become `UiEvent::Error`.
pub async fn handle_command(service: &dyn DocumentService, cmd: BackendCommand) -> UiEvent {
    let cmd_name = cmd.name();
    let context = cmd.error_context();

    let result = match cmd {
        BackendCommand::ListDocuments => service
            .list_documents()
            .await
            .map(UiEvent::DocumentsLoaded),
        BackendCommand::UploadPdf { path } => upload_from_path(service, &path).await,
        BackendCommand::Search { query } => {
            service.search(&query).await.map(UiEvent::SearchAnswered)
        }
    };

    match result {
        Ok(event) => {
            tracing::info!(command = cmd_name, "backend command completed");
            event
        }
        Err(err) => {
            tracing::warn!(
                command = cmd_name,
                status = ?err.status(),
                "backend command failed"
            );
            UiEvent::Error(UiError::from_message(context, err.to_string()))
        }
    }
}

async fn upload_from_path(
    service: &dyn DocumentService,
    path: &Path,
) -> Result<UiEvent, ClientError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| ClientError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(FALLBACK_UPLOAD_NAME)
        .to_string();
    let mime_type = mime_guess::from_path(path)
        .first_raw()
        .map(str::to_string);

    service
        .upload_pdf(PdfUpload {
            filename: filename.clone(),
            mime_type,
            bytes,
        })
        .await?;
    Ok(UiEvent::UploadSucceeded { filename })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        env, fs,
        path::PathBuf,
        sync::Mutex,
        time::{SystemTime, UNIX_EPOCH},
    };

    use async_trait::async_trait;
    use reqwest::StatusCode;
    use shared::{
        domain::{DocumentId, Sender},
        protocol::{DocumentRecord, SearchResult, UploadReceipt},
    };

    use crate::controller::reducer::{ControllerState, UPLOAD_FAILURE};

    #[derive(Default)]
    struct Calls {
        list: usize,
        uploads: Vec<PdfUpload>,
        searches: Vec<String>,
    }

    struct FakeService {
        fail_with: Option<StatusCode>,
        results: Vec<SearchResult>,
        calls: Mutex<Calls>,
    }

    impl FakeService {
        fn healthy(results: Vec<SearchResult>) -> Self {
            Self {
                fail_with: None,
                results,
                calls: Mutex::new(Calls::default()),
            }
        }

        fn failing(status: StatusCode) -> Self {
            Self {
                fail_with: Some(status),
                ..Self::healthy(Vec::new())
            }
        }

        fn check(&self, endpoint: &'static str) -> Result<(), ClientError> {
            match self.fail_with {
                Some(status) => Err(ClientError::Status { endpoint, status }),
                None => Ok(()),
            }
        }

        fn list_calls(&self) -> usize {
            self.calls.lock().expect("calls").list
        }
    }

    #[async_trait]
    impl DocumentService for FakeService {
        async fn list_documents(&self) -> Result<Vec<DocumentRecord>, ClientError> {
            self.calls.lock().expect("calls").list += 1;
            self.check("/pdfs")?;
            Ok(vec![DocumentRecord {
                id: DocumentId("1".to_string()),
                filename: "zapatas.pdf".to_string(),
            }])
        }

        async fn upload_pdf(&self, upload: PdfUpload) -> Result<UploadReceipt, ClientError> {
            self.calls.lock().expect("calls").uploads.push(upload);
            self.check("/upload")?;
            Ok(UploadReceipt(serde_json::json!({ "message": "ok" })))
        }

        async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ClientError> {
            self.calls
                .lock()
                .expect("calls")
                .searches
                .push(query.to_string());
            self.check("/search")?;
            Ok(self.results.clone())
        }
    }

    /// Feeds `cmd` and every follow-up through the service and the reducer
    /// until the controller asks for nothing more.
    async fn drive(state: &mut ControllerState, service: &FakeService, cmd: BackendCommand) {
        let mut next = Some(cmd);
        while let Some(cmd) = next.take() {
            let event = handle_command(service, cmd).await;
            next = state.apply(event);
        }
    }

    fn temp_pdf(name: &str) -> PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let dir = env::temp_dir().join(format!("civil_pdf_assistant_upload_{suffix}"));
        fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join(name);
        fs::write(&path, b"%PDF-1.4 test").expect("write pdf");
        path
    }

    #[tokio::test]
    async fn successful_upload_resyncs_document_list_once() {
        let service = FakeService::healthy(Vec::new());
        let mut state = ControllerState::default();
        let path = temp_pdf("columnas.pdf");

        let cmd = state.begin_upload(path.clone());
        drive(&mut state, &service, cmd).await;

        assert_eq!(service.list_calls(), 1);
        assert_eq!(state.documents().len(), 1);
        assert!(!state.is_pending());
        {
            let calls = service.calls.lock().expect("calls");
            assert_eq!(calls.uploads.len(), 1);
            assert_eq!(calls.uploads[0].filename, "columnas.pdf");
            assert_eq!(calls.uploads[0].mime_type.as_deref(), Some("application/pdf"));
            assert_eq!(calls.uploads[0].bytes, b"%PDF-1.4 test");
        }
        let last = state.messages().last().expect("system message");
        assert_eq!(last.sender, Sender::System);
        assert!(last.text.contains("columnas.pdf"));

        fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
    }

    #[tokio::test]
    async fn rejected_upload_never_resyncs() {
        let service = FakeService::failing(StatusCode::INTERNAL_SERVER_ERROR);
        let mut state = ControllerState::default();
        let path = temp_pdf("rechazado.pdf");

        let cmd = state.begin_upload(path.clone());
        drive(&mut state, &service, cmd).await;

        assert_eq!(service.list_calls(), 0);
        assert!(!state.is_pending());
        assert_eq!(state.messages().last().map(|m| m.text.as_str()), Some(UPLOAD_FAILURE));

        fs::remove_dir_all(path.parent().expect("parent")).expect("cleanup");
    }

    #[tokio::test]
    async fn unreadable_file_fails_upload_without_calling_backend() {
        let service = FakeService::healthy(Vec::new());
        let mut state = ControllerState::default();

        let cmd = state.begin_upload(env::temp_dir().join("civil_pdf_assistant_missing.pdf"));
        drive(&mut state, &service, cmd).await;

        assert!(service.calls.lock().expect("calls").uploads.is_empty());
        assert_eq!(service.list_calls(), 0);
        assert_eq!(state.messages().last().map(|m| m.text.as_str()), Some(UPLOAD_FAILURE));
    }

    #[tokio::test]
    async fn question_round_trip_appends_user_then_bot() {
        let service = FakeService::healthy(vec![SearchResult {
            filename: "f.pdf".to_string(),
            content: "X".repeat(300),
        }]);
        let mut state = ControllerState::default();
        state.input = " resistencia del hormigón ".to_string();

        let cmd = state.submit_input().expect("search command");
        drive(&mut state, &service, cmd).await;

        assert_eq!(
            service.calls.lock().expect("calls").searches,
            ["resistencia del hormigón".to_string()]
        );
        assert_eq!(state.messages().len(), 2);
        assert_eq!(state.messages()[0].sender, Sender::User);
        assert_eq!(state.messages()[1].sender, Sender::Bot);
        assert!(state.messages()[1].text.contains("f.pdf"));
        assert!(!state.is_pending());
    }

    #[tokio::test]
    async fn failed_listing_is_reported_as_document_sync_error() {
        let service = FakeService::failing(StatusCode::BAD_GATEWAY);

        let event = handle_command(&service, BackendCommand::ListDocuments).await;

        match event {
            UiEvent::Error(err) => {
                assert_eq!(err.context(), UiErrorContext::DocumentSync);
                assert!(err.message().contains("502"));
            }
            other => panic!("expected error event, got {other:?}"),
        }
    }
}
