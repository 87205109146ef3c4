use ratatui::layout::Rect;
use std::path::PathBuf;

use crate::config::Config;
use crate::ui::mvi::Reducer;
use crate::ui::picker::{FilePickerState, PickerOutcome};
use crate::ui::request::{summary_max_scroll, RequestIntent, RequestReducer, RequestState};
use crate::upload::{SelectedFile, UploadError, UploadOutcome, UploadRequest, UploadRequestSender};

/// Blocking notice shown when submitting without a file.
pub const NO_FILE_SELECTED_MESSAGE: &str = "Please select a PDF file first";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Main,
    Picker,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The upload-and-summarize view.
///
/// Owns the selected file and the request state machine. Network work is
/// handed to the upload worker through `upload_sender`; results come back
/// through [`App::on_upload_finished`].
pub struct App {
    should_quit: bool,
    focus: Focus,
    selected: Option<SelectedFile>,
    /// Request lifecycle (MVI pattern).
    request: RequestState,
    picker: FilePickerState,
    /// Modal notice; while set, input only dismisses it.
    notice: Option<&'static str>,
    upload_sender: Option<UploadRequestSender>,
    next_request_id: u64,
    summary_scroll: u16,
    /// Where the summary was last drawn; `None` until the first frame.
    summary_pane: Option<Rect>,
    endpoint: String,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let start_dir = config
            .picker
            .start_dir
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            should_quit: false,
            focus: Focus::Main,
            selected: None,
            request: RequestState::default(),
            picker: FilePickerState::new(start_dir, config.picker.show_all_files),
            notice: None,
            upload_sender: None,
            next_request_id: 1,
            summary_scroll: 0,
            summary_pane: None,
            endpoint: config.endpoint.url.clone(),
        }
    }

    pub fn set_upload_sender(&mut self, sender: UploadRequestSender) {
        self.upload_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn request_state(&self) -> &RequestState {
        &self.request
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn summary_scroll(&self) -> u16 {
        self.summary_scroll
    }

    pub fn picker(&self) -> &FilePickerState {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut FilePickerState {
        &mut self.picker
    }

    pub fn open_picker(&mut self) {
        self.picker.refresh_entries();
        self.focus = Focus::Picker;
    }

    pub fn close_picker(&mut self) {
        self.focus = Focus::Main;
    }

    /// Activate the picker entry under the cursor; choosing a file selects it
    /// and closes the picker.
    pub fn activate_picker_entry(&mut self) {
        if let PickerOutcome::Selected(path) = self.picker.activate() {
            self.select_file(SelectedFile::from_path(path));
            self.close_picker();
        }
    }

    /// Replace the selected file. The displayed result stays until the next submit.
    pub fn select_file(&mut self, file: SelectedFile) {
        tracing::debug!(
            path = %file.path().display(),
            content_type = file.content_type(),
            "File selected"
        );
        self.selected = Some(file);
    }

    /// Start an upload of the selected file.
    ///
    /// Without a selection this only raises the notice and returns `None`.
    /// Otherwise the state is `Loading` when this returns, and the id the
    /// request was queued under is returned.
    pub fn submit(&mut self) -> Option<u64> {
        let Some(file) = self.selected.clone() else {
            tracing::debug!("Submit without a selected file");
            self.notice = Some(NO_FILE_SELECTED_MESSAGE);
            return None;
        };

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.summary_scroll = 0;
        self.dispatch_request(RequestIntent::Dispatch);

        let queued = match &self.upload_sender {
            Some(sender) => sender
                .try_send(UploadRequest { request_id, file })
                .map_err(|err| err.to_string()),
            None => Err("no upload worker attached".to_string()),
        };

        if let Err(reason) = queued {
            tracing::warn!(request_id, %reason, "Could not queue upload");
            self.on_upload_finished(UploadOutcome {
                request_id,
                result: Err(UploadError::WorkerUnavailable { reason }),
            });
        }

        Some(request_id)
    }

    /// Apply a finished request. Outcomes apply in arrival order.
    pub fn on_upload_finished(&mut self, outcome: UploadOutcome) {
        let UploadOutcome { request_id, result } = outcome;
        match result {
            Ok(summary) => {
                tracing::info!(request_id, summary_len = summary.len(), "Summary received");
                self.summary_scroll = 0;
                self.dispatch_request(RequestIntent::Resolve { summary });
            }
            Err(err) => {
                tracing::error!(request_id, kind = err.kind(), error = %err, "Upload failed");
                self.dispatch_request(RequestIntent::Reject {
                    message: err.user_message().to_string(),
                });
            }
        }
    }

    pub fn on_tick(&mut self) {
        if self.request.is_loading() {
            self.dispatch_request(RequestIntent::AnimationTick);
        }
    }

    /// Scroll the summary by `delta` rows, clamped to its wrapped height.
    pub fn scroll_summary(&mut self, delta: i32) {
        if self.request.summary().is_none() {
            return;
        }
        let max = self.max_summary_scroll();
        let next = (i32::from(self.summary_scroll) + delta).clamp(0, i32::from(max));
        self.summary_scroll = next as u16;
    }

    /// Record the summary pane of the frame being drawn and re-clamp the scroll.
    pub fn set_summary_pane(&mut self, area: Rect) {
        self.summary_pane = Some(area);
        self.summary_scroll = self.summary_scroll.min(self.max_summary_scroll());
    }

    fn max_summary_scroll(&self) -> u16 {
        match (self.request.summary(), self.summary_pane) {
            (Some(summary), Some(pane)) => summary_max_scroll(summary, pane),
            // Not drawn yet: the first frame clamps.
            (Some(_), None) => u16::MAX,
            (None, _) => 0,
        }
    }

    pub fn dispatch_request(&mut self, intent: RequestIntent) {
        dispatch_mvi!(self, request, RequestReducer, intent);
    }
}
