use crate::{
    AppState, Effect, Msg, Phase, ShortenOutcome, CLIPBOARD_ACK_WINDOW, EMPTY_INPUT_MESSAGE,
    INVALID_URL_MESSAGE,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_draft(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // Only one request may be outstanding per controller.
            if state.phase() == Phase::Submitting {
                return (state, Vec::new());
            }
            state.clear_attempt_errors();
            if state.draft().trim().is_empty() {
                state.reject_submission(EMPTY_INPUT_MESSAGE);
                Vec::new()
            } else if !is_valid_url(state.draft()) {
                state.reject_submission(INVALID_URL_MESSAGE);
                Vec::new()
            } else {
                let url = state.draft().to_owned();
                let request_id = state.begin_submission();
                vec![Effect::Shorten { request_id, url }]
            }
        }
        Msg::ShortenDone { request_id, result } => {
            // Responses from superseded requests must never overwrite newer state.
            if !state.is_current_submission(request_id) {
                return (state, Vec::new());
            }
            match result {
                ShortenOutcome::Success(link) => state.complete_submission(link),
                ShortenOutcome::Failed => state.fail_submission(),
            }
            Vec::new()
        }
        Msg::CopyClicked => {
            let Some(link) = state.link() else {
                return (state, Vec::new());
            };
            let text = link.short_url.clone();
            let copy_id = state.begin_copy();
            vec![Effect::WriteClipboard { copy_id, text }]
        }
        Msg::CopyDone { copy_id } => {
            if state.confirm_copy(copy_id) {
                vec![Effect::ScheduleAckReset {
                    copy_id,
                    after: CLIPBOARD_ACK_WINDOW,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::CopyAckExpired { copy_id } => {
            state.expire_ack(copy_id);
            Vec::new()
        }
        Msg::ResetClicked => {
            state.reset();
            vec![Effect::CancelAckReset]
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// A string is submittable iff it parses as an absolute URL with a host.
fn is_valid_url(input: &str) -> bool {
    match url::Url::parse(input) {
        Ok(parsed) => parsed.has_host(),
        Err(_) => false,
    }
}
