//! Worker thread hosting the tokio runtime that performs network calls for the UI.

use std::{sync::Arc, thread, time::Duration};

use crossbeam_channel::{Receiver, Sender};
use portfolio_core::{ContactSender, HttpContactSender};
use url::Url;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(
    endpoint: Url,
    timeout: Duration,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> std::io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("portfolio-backend".into())
        .spawn(move || {
            let sender = match HttpContactSender::new(endpoint, timeout) {
                Ok(sender) => sender,
                Err(err) => {
                    tracing::error!("failed to build contact sender: {err}");
                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                        UiErrorContext::BackendStartup,
                        format!("backend worker startup failure: {err}"),
                    )));
                    return;
                }
            };
            tracing::info!(endpoint = %sender.endpoint(), "contact form endpoint configured");
            run_worker(Arc::new(sender), cmd_rx, ui_tx);
        })
}

/// Serves commands until the UI side hangs up. One command is handled at a
/// time, so contact submissions never overlap.
pub fn run_worker(
    sender: Arc<dyn ContactSender>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
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

    runtime.block_on(async move {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

        while let Ok(cmd) = cmd_rx.recv() {
            tracing::debug!(command = cmd.name(), "backend received command");
            match cmd {
                BackendCommand::SubmitContact(submission) => {
                    let event = match sender.send(&submission).await {
                        Ok(()) => UiEvent::ContactDelivered,
                        Err(err) => UiEvent::ContactFailed(err),
                    };
                    // Blocking send: the UI must hear about every finished
                    // attempt or its busy flag never clears.
                    if ui_tx.send(event).is_err() {
                        tracing::debug!("ui event channel closed; stopping backend worker");
                        break;
                    }
                }
            }
        }
    });
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
