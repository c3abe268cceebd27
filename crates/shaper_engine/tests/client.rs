use std::sync::{Arc, Mutex};
use std::time::Duration;

use shaper_engine::{
    ClientEvent, ClientHandle, ClipboardError, ShortenError, ShortenService, ShortenedLink,
    TextClipboard,
};

struct StubService {
    outcome: Result<ShortenedLink, ShortenError>,
}

#[async_trait::async_trait]
impl ShortenService for StubService {
    async fn shorten(&self, _long_url: &str) -> Result<ShortenedLink, ShortenError> {
        self.outcome.clone()
    }
}

#[derive(Default)]
struct StubClipboard {
    fail: bool,
    writes: Mutex<Vec<String>>,
}

impl TextClipboard for StubClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::WriteFailed("denied".to_string()));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

fn example_link() -> ShortenedLink {
    ShortenedLink {
        original_url: "https://example.com/a/b".to_string(),
        short_url: "http://127.0.0.1:8000/abc123".to_string(),
    }
}

fn start_with(
    outcome: Result<ShortenedLink, ShortenError>,
    clipboard: Arc<StubClipboard>,
) -> (ClientHandle, std::sync::mpsc::Receiver<ClientEvent>) {
    ClientHandle::with_parts(Arc::new(StubService { outcome }), clipboard)
}

#[test]
fn shorten_result_carries_the_request_token() {
    let (client, events) = start_with(Ok(example_link()), Arc::new(StubClipboard::default()));

    client.shorten(7, "https://example.com/a/b");
    let event = events.recv_timeout(Duration::from_secs(5)).expect("event");

    assert_eq!(
        event,
        ClientEvent::ShortenCompleted {
            request_id: 7,
            result: Ok(example_link()),
        }
    );
}

#[test]
fn shorten_failure_is_reported_not_swallowed() {
    let (client, events) = start_with(
        Err(ShortenError::HttpStatus(500)),
        Arc::new(StubClipboard::default()),
    );

    client.shorten(1, "https://example.com");
    let event = events.recv_timeout(Duration::from_secs(5)).expect("event");

    assert_eq!(
        event,
        ClientEvent::ShortenCompleted {
            request_id: 1,
            result: Err(ShortenError::HttpStatus(500)),
        }
    );
}

#[test]
fn copy_writes_the_text_and_confirms() {
    let clipboard = Arc::new(StubClipboard::default());
    let (client, events) = start_with(Ok(example_link()), clipboard.clone());

    client.copy_text(3, "http://127.0.0.1:8000/abc123");
    let event = events.recv_timeout(Duration::from_secs(5)).expect("event");

    assert_eq!(
        event,
        ClientEvent::CopyCompleted {
            copy_id: 3,
            result: Ok(()),
        }
    );
    assert_eq!(
        clipboard.writes.lock().unwrap().as_slice(),
        ["http://127.0.0.1:8000/abc123"]
    );
}

#[test]
fn copy_failure_is_reported_for_logging_only() {
    let clipboard = Arc::new(StubClipboard {
        fail: true,
        ..StubClipboard::default()
    });
    let (client, events) = start_with(Ok(example_link()), clipboard);

    client.copy_text(4, "http://127.0.0.1:8000/abc123");
    let event = events.recv_timeout(Duration::from_secs(5)).expect("event");

    assert_eq!(
        event,
        ClientEvent::CopyCompleted {
            copy_id: 4,
            result: Err(ClipboardError::WriteFailed("denied".to_string())),
        }
    );
}

#[test]
fn ack_reset_timer_fires_with_its_token() {
    let (client, events) = start_with(Ok(example_link()), Arc::new(StubClipboard::default()));

    client.schedule_ack_reset(9, Duration::from_millis(50));
    let event = events.recv_timeout(Duration::from_secs(5)).expect("event");

    assert_eq!(event, ClientEvent::AckResetElapsed { copy_id: 9 });
}

#[test]
fn cancel_suppresses_a_pending_ack_reset() {
    let (client, events) = start_with(Ok(example_link()), Arc::new(StubClipboard::default()));

    client.schedule_ack_reset(1, Duration::from_millis(100));
    client.cancel_ack_reset();

    assert!(events.recv_timeout(Duration::from_millis(400)).is_err());
}

#[test]
fn rescheduling_supersedes_the_pending_ack_reset() {
    let (client, events) = start_with(Ok(example_link()), Arc::new(StubClipboard::default()));

    // The second schedule aborts the first; only the newer token may fire.
    client.schedule_ack_reset(1, Duration::from_millis(200));
    client.schedule_ack_reset(2, Duration::from_millis(50));

    let event = events.recv_timeout(Duration::from_secs(5)).expect("event");
    assert_eq!(event, ClientEvent::AckResetElapsed { copy_id: 2 });
    assert!(events.recv_timeout(Duration::from_millis(400)).is_err());
}
