use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, centered_rect_by_size, layout_regions};
use crate::ui::picker::render_file_picker;
use crate::ui::request::render_request;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new(app.endpoint()).widget(), header);
    frame.render_widget(Clear, body);
    draw_body(frame, body, app);

    let footer_widget = Footer::new(app.focus(), app.notice().is_some());
    frame.render_widget(footer_widget.widget(footer), footer);

    if app.focus() == Focus::Picker {
        render_file_picker(frame, centered_rect(70, 70, body), app.picker());
    }

    if let Some(notice) = app.notice() {
        draw_notice(frame, body, notice);
    }
}

fn draw_body(frame: &mut Frame<'_>, area: Rect, app: &mut App) {
    if area.height == 0 {
        return;
    }
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(1),
    };

    let file_line = match app.selected_file() {
        Some(file) => Line::from(vec![
            Span::styled("File: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                file.path().display().to_string(),
                Style::default().fg(HEADER_TEXT),
            ),
            Span::styled(
                format!("  ({})", file.content_type()),
                Style::default().fg(MUTED_TEXT),
            ),
        ]),
        None => Line::from(Span::styled(
            "No file selected",
            Style::default().fg(MUTED_TEXT),
        )),
    };
    let file_area = Rect {
        height: inner.height.min(1),
        ..inner
    };
    frame.render_widget(Paragraph::new(file_line), file_area);

    let result_area = Rect {
        y: inner.y + 2,
        height: inner.height.saturating_sub(2),
        ..inner
    };
    if result_area.height > 0 {
        app.set_summary_pane(result_area);
        render_request(frame, result_area, app.request_state(), app.summary_scroll());
    }
}

fn draw_notice(frame: &mut Frame<'_>, area: Rect, notice: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
    ];
    let width = (notice.chars().count() as u16).saturating_add(8).max(30);
    let height = lines.len() as u16 + 2;
    let popup = centered_rect_by_size(area, width, height);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(" Notice ", Style::default().fg(STATUS_ERROR)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(widget, popup);
}
