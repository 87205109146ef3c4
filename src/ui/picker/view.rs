use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_OK,
};

use super::state::FilePickerState;

/// Render the picker overlay into `area`.
pub fn render_file_picker(frame: &mut Frame, area: Rect, picker: &FilePickerState) {
    frame.render_widget(Clear, area);

    let filter = match picker.accept() {
        Some(mime) => format!("[{}]", mime),
        None => "[all files]".to_string(),
    };
    let title = Line::from(vec![
        Span::styled(" Select document ", Style::default().fg(ACCENT)),
        Span::styled(format!("{} ", filter), Style::default().fg(MUTED_TEXT)),
    ]);
    let path_line = Line::from(Span::styled(
        format!(" {} ", picker.current_dir().display()),
        Style::default().fg(MUTED_TEXT),
    ));

    let block = Block::default()
        .title(title)
        .title_bottom(path_line)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let items: Vec<ListItem> = if picker.entries().is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "  (no matching files)",
            Style::default().fg(MUTED_TEXT),
        )))]
    } else {
        picker
            .entries()
            .iter()
            .map(|entry| {
                let (label, style) = if entry.is_dir {
                    (format!("{}/", entry.name), Style::default().fg(ACCENT))
                } else if entry.is_pdf {
                    (entry.name.clone(), Style::default().fg(HEADER_TEXT))
                } else {
                    (entry.name.clone(), Style::default().fg(MUTED_TEXT))
                };
                ListItem::new(Line::from(Span::styled(label, style)))
            })
            .collect()
    };

    let list = List::new(items)
        .block(block)
        .highlight_symbol("> ")
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .fg(STATUS_OK)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    if !picker.entries().is_empty() {
        list_state.select(Some(picker.cursor()));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}
