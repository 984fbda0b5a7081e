mod orchestrator;
mod state;

pub use orchestrator::{
    EMPTY_INPUT_MESSAGE, MISSING_KEY_MESSAGE, NO_RESPONSE_MESSAGE, Orchestrator, SubmitOutcome,
};
pub use state::{MESSAGE_TTL, Message, Severity, UiState};
