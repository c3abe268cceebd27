#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current input for shortening.
    SubmitClicked,
    /// Shortening service finished the request with this generation token.
    ShortenDone {
        request_id: crate::RequestId,
        result: crate::ShortenOutcome,
    },
    /// User clicked Copy on the shortened link.
    CopyClicked,
    /// Clipboard write for this copy attempt succeeded.
    CopyDone { copy_id: crate::CopyId },
    /// Acknowledgement timer for this copy attempt elapsed.
    CopyAckExpired { copy_id: crate::CopyId },
    /// User clicked Shorten Another URL.
    ResetClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
