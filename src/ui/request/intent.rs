use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum RequestIntent {
    /// A request was handed to the worker.
    Dispatch,

    /// Spinner tick.
    AnimationTick,

    /// A request finished with a summary.
    Resolve { summary: String },

    /// A request failed.
    Reject {
        /// User-facing message.
        message: String,
    },
}

impl Intent for RequestIntent {}
