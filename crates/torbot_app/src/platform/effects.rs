use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::{client_debug, client_warn};
use torbot_core::{Effect, LinkResultSet, Msg, RequestOutcome};
use torbot_transport::{LinkRequest, Transport, TransportEvent, TransportEvents, TransportHandle};

/// Executes core effects and feeds transport completions back as messages.
pub struct EffectRunner {
    transport: TransportHandle,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(transport: Arc<dyn Transport>, msg_tx: mpsc::Sender<Msg>) -> io::Result<Self> {
        let (handle, events) = TransportHandle::spawn(transport)?;
        spawn_event_loop(events, msg_tx.clone())?;
        Ok(Self {
            transport: handle,
            msg_tx,
        })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitRequest {
                    request_id,
                    operation,
                    website,
                } => {
                    client_debug!("SubmitRequest request_id={} option={}", request_id, operation);
                    let request = LinkRequest::new(operation.label(), website);
                    if !self.transport.submit(request_id, request) {
                        // Resolve it here so the form does not stay frozen.
                        let _ = self.msg_tx.send(Msg::RequestResolved {
                            request_id,
                            outcome: RequestOutcome::Failure(
                                "transport worker is not running".to_string(),
                            ),
                        });
                    }
                }
                Effect::Notify { message } => {
                    client_warn!("Notification raised: {}", message);
                }
            }
        }
    }
}

fn spawn_event_loop(events: TransportEvents, msg_tx: mpsc::Sender<Msg>) -> io::Result<()> {
    thread::Builder::new()
        .name("torbot-events".to_string())
        .spawn(move || {
            while let Some(event) = events.recv() {
                if msg_tx.send(map_event(event)).is_err() {
                    break;
                }
            }
        })?;
    Ok(())
}

fn map_event(event: TransportEvent) -> Msg {
    match event {
        TransportEvent::Completed { request_id, result } => {
            let outcome = match result {
                Ok(links) => RequestOutcome::Success(LinkResultSet::from_pairs(
                    links.into_iter().map(|status| (status.link, status.reachable)),
                )),
                Err(err) => RequestOutcome::Failure(err.to_string()),
            };
            Msg::RequestResolved {
                request_id,
                outcome,
            }
        }
    }
}
