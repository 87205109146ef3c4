use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK};

use super::state::RequestState;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Shown before anything has been submitted.
pub const IDLE_PROMPT: &str = "Choose a PDF with 'o', then press 's' to upload and summarize.";

pub const LOADING_TEXT: &str = "Summarizing...";

/// Render whichever of prompt, spinner, error or summary the state calls for.
///
/// `scroll` is the first summary line shown; other states ignore it.
pub fn render_request(frame: &mut Frame, area: Rect, state: &RequestState, scroll: u16) {
    match state {
        RequestState::Idle => {
            let line = Line::from(Span::styled(IDLE_PROMPT, Style::default().fg(MUTED_TEXT)));
            frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
        }

        RequestState::Loading { animation_tick } => {
            let spinner = SPINNER_FRAMES[(*animation_tick as usize) % SPINNER_FRAMES.len()];
            let line = Line::from(vec![
                Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
                Span::styled(LOADING_TEXT, Style::default().fg(HEADER_TEXT)),
            ]);
            frame.render_widget(Paragraph::new(line), area);
        }

        RequestState::Failed { message } => {
            let line = Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(STATUS_ERROR),
            ));
            frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
        }

        RequestState::Success { summary } => {
            let block = Block::default()
                .title(Span::styled(
                    " Summary: ",
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER));
            let paragraph = summary_paragraph(summary).scroll((scroll, 0)).block(block);
            frame.render_widget(paragraph, area);
        }
    }
}

/// No trimming: the summary keeps its own indentation and blank lines.
fn summary_paragraph(summary: &str) -> Paragraph<'_> {
    Paragraph::new(Text::raw(summary))
        .style(Style::default().fg(HEADER_TEXT))
        .wrap(Wrap { trim: false })
}

/// Largest scroll offset that still fills the summary pane at `area`.
///
/// Counts wrapped rows at the pane's inner width, so a single long line
/// scrolls as far as it wraps.
pub fn summary_max_scroll(summary: &str, area: Rect) -> u16 {
    let inner = Block::bordered().inner(area);
    if inner.width == 0 {
        return 0;
    }
    let rows = summary_paragraph(summary).line_count(inner.width);
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_sub(inner.height)
}
