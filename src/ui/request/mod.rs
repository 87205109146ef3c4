//! Lifecycle of one upload-and-summarize attempt.
//!
//! - `state.rs` - `RequestState`
//! - `intent.rs` - dispatch, completion and animation events
//! - `reducer.rs` - state transitions
//! - `view.rs` - rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::RequestIntent;
pub use reducer::RequestReducer;
pub use state::RequestState;
pub use view::{render_request, summary_max_scroll, IDLE_PROMPT, LOADING_TEXT};
