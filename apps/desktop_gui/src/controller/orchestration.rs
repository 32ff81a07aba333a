//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};
use crate::controller::reducer::ControllerState;

/// Queues `cmd` for the backend worker. A command that cannot be queued is
/// reported as a failure of its own operation.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), UiError> {
    let cmd_name = cmd.name();
    let context = cmd.error_context();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err(UiError::from_message(
            context,
            "UI command queue is full; please retry",
        )),
        Err(TrySendError::Disconnected(_)) => Err(UiError::from_message(
            context,
            "Backend command processor disconnected (possible startup/runtime failure)",
        )),
    }
}

/// Queues `cmd` and every follow-up command the controller asks for when a
/// dispatch fails, so the pending flag can never outlive a lost command.
pub fn run_command(
    state: &mut ControllerState,
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) {
    let mut next = Some(cmd);
    while let Some(cmd) = next.take() {
        if let Err(err) = dispatch_backend_command(cmd_tx, cmd) {
            next = state.apply(UiEvent::Error(err));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use shared::domain::ChatMessage;

    use crate::controller::reducer::SEARCH_FAILURE;

    #[test]
    fn queued_command_reaches_worker_queue() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let mut state = ControllerState::default();

        run_command(&mut state, &cmd_tx, BackendCommand::ListDocuments);

        assert_eq!(cmd_rx.try_recv().ok(), Some(BackendCommand::ListDocuments));
    }

    #[test]
    fn disconnected_worker_fails_search_and_releases_pending() {
        let (cmd_tx, cmd_rx) = bounded(4);
        drop(cmd_rx);
        let mut state = ControllerState::default();
        state.input = "question".to_string();
        let cmd = state.submit_input().expect("search command");

        run_command(&mut state, &cmd_tx, cmd);

        assert!(!state.is_pending());
        assert_eq!(state.messages().len(), 2);
        assert_eq!(state.messages()[1], ChatMessage::bot(SEARCH_FAILURE));
    }

    #[test]
    fn full_queue_fails_with_the_command_context() {
        let (cmd_tx, _cmd_rx) = bounded(1);
        cmd_tx
            .try_send(BackendCommand::ListDocuments)
            .expect("fill queue");

        let err = dispatch_backend_command(
            &cmd_tx,
            BackendCommand::Search {
                query: "q".to_string(),
            },
        )
        .expect_err("queue is full");

        assert_eq!(
            err.context(),
            crate::controller::events::UiErrorContext::Search
        );
    }
}
