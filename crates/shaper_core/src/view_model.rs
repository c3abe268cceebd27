use crate::{Phase, ShortenedLink};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    pub draft: String,
    pub validation_error: Option<String>,
    pub request_error: Option<String>,
    pub link: Option<ShortenedLink>,
    pub copied: bool,
    pub dirty: bool,
}
