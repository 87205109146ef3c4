use std::path::{Path, PathBuf};

use crate::upload::{is_pdf_path, PDF_MIME};

/// A single entry in the file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub is_pdf: bool,
}

/// What activating the entry under the cursor did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    /// Nothing to activate (empty listing).
    None,
    /// Moved into a directory.
    Navigated,
    /// A file was chosen.
    Selected(PathBuf),
}

/// State for the file picker overlay.
///
/// Lists `..`, then directories, then files. Files are filtered on
/// `application/pdf` unless `show_all` is set.
#[derive(Debug, Clone)]
pub struct FilePickerState {
    current_dir: PathBuf,
    entries: Vec<FileEntry>,
    cursor: usize,
    show_all: bool,
}

impl FilePickerState {
    pub fn new(start_dir: impl Into<PathBuf>, show_all: bool) -> Self {
        let mut state = Self {
            current_dir: start_dir.into(),
            entries: Vec::new(),
            cursor: 0,
            show_all,
        };
        state.refresh_entries();
        state
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn shows_all(&self) -> bool {
        self.show_all
    }

    /// MIME type the listing is filtered on, or `None` when showing everything.
    pub fn accept(&self) -> Option<&'static str> {
        (!self.show_all).then_some(PDF_MIME)
    }

    /// Refresh the entries list from the current directory.
    pub fn refresh_entries(&mut self) {
        let mut entries = Vec::new();

        if let Some(parent) = self.current_dir.parent() {
            entries.push(FileEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_dir: true,
                is_pdf: false,
            });
        }

        match std::fs::read_dir(&self.current_dir) {
            Ok(read_dir) => {
                let mut dirs = Vec::new();
                let mut files = Vec::new();

                for entry in read_dir.flatten() {
                    let path = entry.path();
                    let name = entry.file_name().to_string_lossy().to_string();

                    if name.starts_with('.') {
                        continue;
                    }

                    if path.is_dir() {
                        dirs.push(FileEntry {
                            name,
                            path,
                            is_dir: true,
                            is_pdf: false,
                        });
                    } else {
                        let is_pdf = is_pdf_path(&path);
                        if is_pdf || self.show_all {
                            files.push(FileEntry {
                                name,
                                path,
                                is_dir: false,
                                is_pdf,
                            });
                        }
                    }
                }

                dirs.sort_by_key(|entry| entry.name.to_lowercase());
                files.sort_by_key(|entry| entry.name.to_lowercase());

                entries.extend(dirs);
                entries.extend(files);
            }
            Err(err) => {
                tracing::warn!(
                    dir = %self.current_dir.display(),
                    error = %err,
                    "Failed to list directory"
                );
            }
        }

        self.entries = entries;
        self.cursor = 0;
    }

    /// Move the cursor by `delta`, clamped to the listing.
    pub fn move_cursor(&mut self, delta: isize) {
        let max = self.entries.len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add_signed(delta).min(max);
    }

    pub fn go_top(&mut self) {
        self.cursor = 0;
    }

    pub fn go_bottom(&mut self) {
        self.cursor = self.entries.len().saturating_sub(1);
    }

    /// Switch between the PDF filter and listing every file.
    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
        self.refresh_entries();
    }

    /// Go to the parent directory. Returns false at the filesystem root.
    pub fn go_parent(&mut self) -> bool {
        let Some(parent) = self.current_dir.parent().map(Path::to_path_buf) else {
            return false;
        };
        self.current_dir = parent;
        self.refresh_entries();
        true
    }

    /// Enter the directory under the cursor or choose the file under it.
    pub fn activate(&mut self) -> PickerOutcome {
        let Some(entry) = self.entries.get(self.cursor).cloned() else {
            return PickerOutcome::None;
        };

        if entry.is_dir {
            self.current_dir = entry.path;
            self.refresh_entries();
            PickerOutcome::Navigated
        } else {
            PickerOutcome::Selected(entry.path)
        }
    }
}
