//! Shaper engine: shortening-service client, clipboard, and effect execution.
mod client;
mod clipboard;
mod shorten;
mod types;

pub use client::ClientHandle;
pub use clipboard::{SystemClipboard, TextClipboard};
pub use shorten::{HttpShortenService, ServiceSettings, ShortenService};
pub use types::{ClientEvent, ClipboardError, CopyId, RequestId, ShortenError, ShortenedLink};
