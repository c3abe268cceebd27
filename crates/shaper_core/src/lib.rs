//! Shaper core: pure shorten-workflow state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, CopyId, Phase, RequestId, ShortenOutcome, ShortenedLink, CLIPBOARD_ACK_WINDOW,
    EMPTY_INPUT_MESSAGE, INVALID_URL_MESSAGE, SHORTEN_FAILED_MESSAGE,
};
pub use update::update;
pub use view_model::AppViewModel;
