use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Lines moved by PageUp/PageDown.
const PAGE: isize = 10;

/// What a key press means in the current context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    DismissNotice,
    OpenPicker,
    Submit,
    ScrollSummary(i32),
    PickerMove(isize),
    PickerTop,
    PickerBottom,
    PickerActivate,
    PickerParent,
    PickerToggleAll,
    ClosePicker,
}

/// Map a key to an action without touching the app.
pub fn classify_key(app: &App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        return InputAction::Quit;
    }

    // The notice is modal: nothing else gets through until it is dismissed.
    if app.notice().is_some() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => InputAction::DismissNotice,
            _ => InputAction::None,
        };
    }

    match app.focus() {
        Focus::Picker => match key.code {
            KeyCode::Up | KeyCode::Char('k') => InputAction::PickerMove(-1),
            KeyCode::Down | KeyCode::Char('j') => InputAction::PickerMove(1),
            KeyCode::PageUp => InputAction::PickerMove(-PAGE),
            KeyCode::PageDown => InputAction::PickerMove(PAGE),
            KeyCode::Home | KeyCode::Char('g') => InputAction::PickerTop,
            KeyCode::End | KeyCode::Char('G') => InputAction::PickerBottom,
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => InputAction::PickerActivate,
            KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => InputAction::PickerParent,
            KeyCode::Char('a') => InputAction::PickerToggleAll,
            KeyCode::Esc => InputAction::ClosePicker,
            _ => InputAction::None,
        },
        Focus::Main => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => InputAction::Quit,
            KeyCode::Char('o') | KeyCode::Tab => InputAction::OpenPicker,
            KeyCode::Char('s') | KeyCode::Enter => InputAction::Submit,
            KeyCode::Up | KeyCode::Char('k') => InputAction::ScrollSummary(-1),
            KeyCode::Down | KeyCode::Char('j') => InputAction::ScrollSummary(1),
            KeyCode::PageUp => InputAction::ScrollSummary(-(PAGE as i32)),
            KeyCode::PageDown => InputAction::ScrollSummary(PAGE as i32),
            _ => InputAction::None,
        },
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    let action = classify_key(app, key);
    match action {
        InputAction::None => {}
        InputAction::Quit => app.request_quit(),
        InputAction::DismissNotice => app.dismiss_notice(),
        InputAction::OpenPicker => app.open_picker(),
        InputAction::Submit => {
            app.submit();
        }
        InputAction::ScrollSummary(delta) => app.scroll_summary(delta),
        InputAction::PickerMove(delta) => app.picker_mut().move_cursor(delta),
        InputAction::PickerTop => app.picker_mut().go_top(),
        InputAction::PickerBottom => app.picker_mut().go_bottom(),
        InputAction::PickerActivate => app.activate_picker_entry(),
        InputAction::PickerParent => {
            app.picker_mut().go_parent();
        }
        InputAction::PickerToggleAll => app.picker_mut().toggle_show_all(),
        InputAction::ClosePicker => app.close_picker(),
    }
    action
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
