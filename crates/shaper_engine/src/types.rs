use thiserror::Error;

pub type RequestId = u64;
pub type CopyId = u64;

/// The original/short URL pair returned by the shortening service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedLink {
    pub original_url: String,
    pub short_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    ShortenCompleted {
        request_id: RequestId,
        result: Result<ShortenedLink, ShortenError>,
    },
    CopyCompleted {
        copy_id: CopyId,
        result: Result<(), ClipboardError>,
    },
    AckResetElapsed {
        copy_id: CopyId,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenError {
    #[error("invalid service endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("request timed out")]
    Timeout,
    #[error("malformed response body: {0}")]
    MalformedResponse(String),
    #[error("network error: {0}")]
    Network(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}
