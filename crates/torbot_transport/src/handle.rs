use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::{client_debug, client_warn};

use crate::{LinkRequest, RequestId, Transport, TransportEvent};

enum TransportCommand {
    Submit {
        request_id: RequestId,
        request: LinkRequest,
    },
}

/// Sends requests to a background worker that owns the async runtime.
///
/// Dropping the handle stops the worker; requests still in flight are
/// abandoned and never reported.
pub struct TransportHandle {
    cmd_tx: mpsc::Sender<TransportCommand>,
}

/// Receiving side for completed requests.
pub struct TransportEvents {
    event_rx: mpsc::Receiver<TransportEvent>,
}

impl TransportHandle {
    pub fn spawn(transport: Arc<dyn Transport>) -> io::Result<(Self, TransportEvents)> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("torbot-transport".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let transport = transport.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(transport.as_ref(), command, event_tx).await;
                    });
                }
                client_debug!("Transport worker stopped");
            })?;

        Ok((Self { cmd_tx }, TransportEvents { event_rx }))
    }

    /// Queues one request. Returns `false` when the worker is gone.
    pub fn submit(&self, request_id: RequestId, request: LinkRequest) -> bool {
        let sent = self
            .cmd_tx
            .send(TransportCommand::Submit {
                request_id,
                request,
            })
            .is_ok();
        if !sent {
            client_warn!("Transport worker unavailable; request {} dropped", request_id);
        }
        sent
    }
}

impl TransportEvents {
    /// Blocks until the next completion, or `None` once the worker is gone.
    pub fn recv(&self) -> Option<TransportEvent> {
        self.event_rx.recv().ok()
    }
}

async fn handle_command(
    transport: &dyn Transport,
    command: TransportCommand,
    event_tx: mpsc::Sender<TransportEvent>,
) {
    match command {
        TransportCommand::Submit {
            request_id,
            request,
        } => {
            let result = transport.retrieve_links(&request).await;
            let _ = event_tx.send(TransportEvent::Completed { request_id, result });
        }
    }
}
