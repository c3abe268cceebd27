use std::time::Duration;

use crate::view_model::AppViewModel;

pub type RequestId = u64;
pub type CopyId = u64;

/// How long the copy acknowledgement stays visible after a confirmed write.
pub const CLIPBOARD_ACK_WINDOW: Duration = Duration::from_millis(2000);

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a URL";
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";
pub const SHORTEN_FAILED_MESSAGE: &str = "Failed to shorten URL. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// The original/short URL pair produced by a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedLink {
    pub original_url: String,
    pub short_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    Success(ShortenedLink),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    draft: String,
    phase: Phase,
    validation_error: Option<String>,
    request_error: Option<String>,
    result: Option<ShortenedLink>,
    copied: bool,
    // Monotonic generation counters; work stamped with an older value is stale.
    request_seq: RequestId,
    copy_seq: CopyId,
    // Copy attempt whose acknowledgement window is currently open.
    ack_token: Option<CopyId>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase,
            draft: self.draft.clone(),
            validation_error: self.validation_error.clone(),
            request_error: self.request_error.clone(),
            link: self.result.clone(),
            copied: self.copied,
            dirty: self.dirty,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn link(&self) -> Option<&ShortenedLink> {
        self.result.as_ref()
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_draft(&mut self, text: String) {
        self.draft = text;
        // Editing after a failed submission returns to the editable idle phase.
        if self.phase == Phase::Error {
            self.phase = Phase::Idle;
        }
        self.mark_dirty();
    }

    pub(crate) fn clear_attempt_errors(&mut self) {
        self.validation_error = None;
        self.request_error = None;
        self.mark_dirty();
    }

    pub(crate) fn reject_submission(&mut self, message: &str) {
        self.validation_error = Some(message.to_string());
        self.phase = Phase::Idle;
        self.mark_dirty();
    }

    pub(crate) fn begin_submission(&mut self) -> RequestId {
        self.request_seq += 1;
        self.phase = Phase::Submitting;
        self.mark_dirty();
        self.request_seq
    }

    pub(crate) fn is_current_submission(&self, request_id: RequestId) -> bool {
        self.phase == Phase::Submitting && request_id == self.request_seq
    }

    pub(crate) fn complete_submission(&mut self, link: ShortenedLink) {
        self.result = Some(link);
        self.request_error = None;
        self.phase = Phase::Success;
        self.mark_dirty();
    }

    pub(crate) fn fail_submission(&mut self) {
        self.result = None;
        self.request_error = Some(SHORTEN_FAILED_MESSAGE.to_string());
        self.phase = Phase::Error;
        self.mark_dirty();
    }

    pub(crate) fn begin_copy(&mut self) -> CopyId {
        self.copy_seq += 1;
        self.copy_seq
    }

    /// Opens the acknowledgement window, unless the confirmation is stale.
    pub(crate) fn confirm_copy(&mut self, copy_id: CopyId) -> bool {
        if copy_id != self.copy_seq {
            return false;
        }
        self.copied = true;
        self.ack_token = Some(copy_id);
        self.mark_dirty();
        true
    }

    /// Closes the acknowledgement window the expiry belongs to, if still open.
    pub(crate) fn expire_ack(&mut self, copy_id: CopyId) {
        if self.ack_token != Some(copy_id) {
            return;
        }
        self.copied = false;
        self.ack_token = None;
        self.mark_dirty();
    }

    /// Clears all presentation state and invalidates outstanding work.
    ///
    /// The counters advance rather than rewind so that responses from
    /// requests issued before the reset can never match a later generation.
    pub(crate) fn reset(&mut self) {
        self.draft.clear();
        self.phase = Phase::Idle;
        self.validation_error = None;
        self.request_error = None;
        self.result = None;
        self.copied = false;
        self.ack_token = None;
        self.request_seq += 1;
        self.copy_seq += 1;
        self.mark_dirty();
    }
}
