//! Toast rendering
//!
//! Draws the toast stack in the top-right corner of the frame, oldest on top.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::toast_state::Toast;
use crate::widgets::popup;

const MARGIN: u16 = 2;
const TOAST_HEIGHT: u16 = 3;
const MAX_TOAST_WIDTH: u16 = 48;

/// Render the toast stack overlay
///
/// Call after rendering the main UI so toasts appear on top of other content.
/// At most `max_visible` toasts are drawn; the rest are summarised in a
/// `+N more` line below the stack.
pub fn render_toasts(frame: &mut Frame, toasts: &[Toast], max_visible: usize) {
    if toasts.is_empty() || max_visible == 0 {
        return;
    }

    let frame_area = frame.area();
    let max_width = frame_area
        .width
        .saturating_sub(MARGIN * 2)
        .min(MAX_TOAST_WIDTH);
    if max_width < 5 {
        return;
    }

    let mut y = frame_area.y + MARGIN;
    let bottom = frame_area.bottom().saturating_sub(MARGIN);
    let mut drawn = 0;

    for toast in toasts.iter().take(max_visible) {
        if y + TOAST_HEIGHT > bottom {
            break;
        }

        let text = fit_message(&toast.message, max_width.saturating_sub(4) as usize);
        // 2 padding + 2 borders
        let width = (text.chars().count() as u16 + 4).min(max_width);
        let area = popup::top_right(frame_area, width, TOAST_HEIGHT, MARGIN, y);

        render_toast(frame, toast, &text, area);
        y += TOAST_HEIGHT;
        drawn += 1;
    }

    let hidden = toasts.len() - drawn;
    if hidden > 0 && y < bottom {
        let label = format!("+{} more", hidden);
        let width = label.chars().count() as u16;
        let area = popup::top_right(frame_area, width, 1, MARGIN, y);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                label,
                Style::default().fg(Color::DarkGray),
            ))),
            area,
        );
    }
}

fn render_toast(frame: &mut Frame, toast: &Toast, text: &str, area: Rect) {
    let style = toast.severity.style();

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let line = Line::from(Span::styled(
        format!(" {} ", text),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Truncate to `max_chars`, marking the cut with an ellipsis
fn fit_message(message: &str, max_chars: usize) -> String {
    if message.chars().count() <= max_chars {
        return message.to_string();
    }
    let kept: String = message.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
#[path = "toast_render_tests.rs"]
mod toast_render_tests;
