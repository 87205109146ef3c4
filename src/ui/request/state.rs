use crate::ui::mvi::UiState;

/// What the main view shows below the file selection.
///
/// Exactly one variant holds, so a summary and an error can never be
/// displayed together.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestState {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// A request is in flight.
    Loading {
        /// Animation tick for spinner.
        animation_tick: u8,
    },

    /// The endpoint returned a summary.
    Success { summary: String },

    /// The attempt failed; `message` is the user-facing text.
    Failed { message: String },
}

impl UiState for RequestState {}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Success { summary } => Some(summary),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}
