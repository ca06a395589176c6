//! Confirmation dialog rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::confirm_state::ConfirmView;
use crate::widgets::popup;

const MAX_DIALOG_WIDTH: u16 = 60;
/// Two borders, blank line above and below the message, button row
const DIALOG_CHROME_HEIGHT: u16 = 5;

/// Render the open confirmation as a centered modal dialog
///
/// The button row is pinned to the bottom of the dialog, so a message too
/// long for the frame is clipped instead of the buttons.
pub fn render_confirm(frame: &mut Frame, view: &ConfirmView) {
    let frame_area = frame.area();
    let dialog_width = frame_area.width.saturating_sub(4).min(MAX_DIALOG_WIDTH);
    if dialog_width < 10 {
        return;
    }

    // Borders plus one column of padding on each side
    let text_width = dialog_width.saturating_sub(4).max(1);
    let message_lines = u16::try_from(wrapped_line_count(&view.message, text_width as usize))
        .unwrap_or(u16::MAX);
    let dialog_height = message_lines.saturating_add(DIALOG_CHROME_HEIGHT);

    let dialog_area = popup::centered_popup(frame_area, dialog_width, dialog_height);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", view.title))
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));
    let content_area = block.inner(dialog_area).inner(Margin {
        horizontal: 1,
        vertical: 0,
    });

    let [_, message_area, _, buttons_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(content_area);

    let message = Paragraph::new(view.message.as_str())
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    let buttons = Paragraph::new(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {}    ", view.confirm_label),
            Style::default().fg(Color::White),
        ),
        Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {}", view.cancel_label),
            Style::default().fg(Color::White),
        ),
    ]));

    popup::clear_area(frame, dialog_area);
    frame.render_widget(block, dialog_area);
    frame.render_widget(message, message_area);
    frame.render_widget(buttons, buttons_area);
}

/// Lines `text` occupies when word-wrapped at `width` columns
///
/// Greedy wrap on spaces; words longer than a line are split. Explicit
/// newlines always start a new line.
fn wrapped_line_count(text: &str, width: usize) -> usize {
    let width = width.max(1);
    text.split('\n')
        .map(|line| {
            let mut lines = 1;
            let mut used = 0;
            for word in line.split(' ') {
                let len = word.chars().count();
                let needed = if used == 0 { len } else { used + 1 + len };
                if needed <= width {
                    used = needed;
                } else if len <= width {
                    lines += 1;
                    used = len;
                } else {
                    // Split across lines, continuing after whatever fits
                    let mut rest = len;
                    if used > 0 {
                        lines += 1;
                    }
                    while rest > width {
                        lines += 1;
                        rest -= width;
                    }
                    used = rest;
                }
            }
            lines
        })
        .sum::<usize>()
        .max(1)
}

#[cfg(test)]
#[path = "confirm_render_tests.rs"]
mod confirm_render_tests;
