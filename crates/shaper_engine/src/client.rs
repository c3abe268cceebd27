use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use shaper_logging::shaper_debug;

use crate::clipboard::{SystemClipboard, TextClipboard};
use crate::shorten::{HttpShortenService, ServiceSettings, ShortenService};
use crate::types::{ClientEvent, CopyId, RequestId, ShortenError};

enum ClientCommand {
    Shorten {
        request_id: RequestId,
        long_url: String,
    },
    Copy {
        copy_id: CopyId,
        text: String,
    },
    ScheduleAckReset {
        copy_id: CopyId,
        after: Duration,
    },
    CancelAckReset,
}

/// Command side of the effect-execution thread.
///
/// Shorten requests run concurrently on the thread's runtime; at most one
/// acknowledgement-reset timer is pending at a time.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
}

impl ClientHandle {
    pub fn start(
        settings: ServiceSettings,
    ) -> Result<(Self, mpsc::Receiver<ClientEvent>), ShortenError> {
        let service = Arc::new(HttpShortenService::new(settings)?);
        Ok(Self::with_parts(service, Arc::new(SystemClipboard)))
    }

    pub fn with_parts(
        service: Arc<dyn ShortenService>,
        clipboard: Arc<dyn TextClipboard>,
    ) -> (Self, mpsc::Receiver<ClientEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let mut pending_ack: Option<tokio::task::JoinHandle<()>> = None;

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    ClientCommand::Shorten {
                        request_id,
                        long_url,
                    } => {
                        shaper_debug!("dispatching shorten request {}", request_id);
                        let service = service.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = service.shorten(&long_url).await;
                            let _ = event_tx.send(ClientEvent::ShortenCompleted {
                                request_id,
                                result,
                            });
                        });
                    }
                    ClientCommand::Copy { copy_id, text } => {
                        let result = clipboard.write_text(&text);
                        let _ = event_tx.send(ClientEvent::CopyCompleted { copy_id, result });
                    }
                    ClientCommand::ScheduleAckReset { copy_id, after } => {
                        if let Some(task) = pending_ack.take() {
                            shaper_debug!("superseding pending ack-reset timer");
                            task.abort();
                        }
                        let event_tx = event_tx.clone();
                        pending_ack = Some(runtime.spawn(async move {
                            tokio::time::sleep(after).await;
                            let _ = event_tx.send(ClientEvent::AckResetElapsed { copy_id });
                        }));
                    }
                    ClientCommand::CancelAckReset => {
                        if let Some(task) = pending_ack.take() {
                            task.abort();
                        }
                    }
                }
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn shorten(&self, request_id: RequestId, long_url: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Shorten {
            request_id,
            long_url: long_url.into(),
        });
    }

    pub fn copy_text(&self, copy_id: CopyId, text: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Copy {
            copy_id,
            text: text.into(),
        });
    }

    pub fn schedule_ack_reset(&self, copy_id: CopyId, after: Duration) {
        let _ = self
            .cmd_tx
            .send(ClientCommand::ScheduleAckReset { copy_id, after });
    }

    pub fn cancel_ack_reset(&self) {
        let _ = self.cmd_tx.send(ClientCommand::CancelAckReset);
    }
}
