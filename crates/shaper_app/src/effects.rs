use std::sync::mpsc;
use std::thread;

use shaper_core::{Effect, Msg, ShortenOutcome, ShortenedLink};
use shaper_engine::{ClientEvent, ClientHandle, ServiceSettings, ShortenError};
use shaper_logging::{shaper_info, shaper_warn};

use crate::app::ShellMsg;

/// Executes core effects against the engine and feeds engine events back
/// into the shell loop as core messages.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(
        settings: ServiceSettings,
        msg_tx: mpsc::Sender<ShellMsg>,
    ) -> Result<Self, ShortenError> {
        let (client, events) = ClientHandle::start(settings)?;
        spawn_event_loop(events, msg_tx);
        Ok(Self { client })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Shorten { request_id, url } => {
                    shaper_info!("Shorten request_id={} url_len={}", request_id, url.len());
                    self.client.shorten(request_id, url);
                }
                Effect::WriteClipboard { copy_id, text } => {
                    self.client.copy_text(copy_id, text);
                }
                Effect::ScheduleAckReset { copy_id, after } => {
                    self.client.schedule_ack_reset(copy_id, after);
                }
                Effect::CancelAckReset => {
                    self.client.cancel_ack_reset();
                }
            }
        }
    }
}

fn spawn_event_loop(events: mpsc::Receiver<ClientEvent>, msg_tx: mpsc::Sender<ShellMsg>) {
    thread::spawn(move || {
        for event in events {
            let msg = match event {
                ClientEvent::ShortenCompleted { request_id, result } => Msg::ShortenDone {
                    request_id,
                    result: match result {
                        Ok(link) => ShortenOutcome::Success(map_link(link)),
                        Err(err) => {
                            shaper_warn!("shorten request {} failed: {}", request_id, err);
                            ShortenOutcome::Failed
                        }
                    },
                },
                ClientEvent::CopyCompleted { copy_id, result } => match result {
                    Ok(()) => Msg::CopyDone { copy_id },
                    Err(err) => {
                        // Clipboard failures are logged, never surfaced as workflow state.
                        shaper_warn!("clipboard copy {} failed: {}", copy_id, err);
                        continue;
                    }
                },
                ClientEvent::AckResetElapsed { copy_id } => Msg::CopyAckExpired { copy_id },
            };
            if msg_tx.send(ShellMsg::Core(msg)).is_err() {
                break;
            }
        }
    });
}

fn map_link(link: shaper_engine::ShortenedLink) -> ShortenedLink {
    ShortenedLink {
        original_url: link.original_url,
        short_url: link.short_url,
    }
}
