//! Directory browser used to choose the document.

mod state;
mod view;

pub use state::{FileEntry, FilePickerState, PickerOutcome};
pub use view::render_file_picker;
