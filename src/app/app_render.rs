use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::confirm::render_confirm;
use crate::toast::render_toasts;

const KEY_HINTS: &[(&str, &str)] = &[
    ("s", "success toast"),
    ("w", "warning toast"),
    ("i", "info toast"),
    ("e", "sticky error toast"),
    ("d", "dismiss oldest"),
    ("c", "clear all (asks first)"),
    ("q", "quit (asks first)"),
];

impl App {
    pub fn render(&self, frame: &mut Frame) {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        let mut lines = vec![Line::from("")];
        lines.extend(KEY_HINTS.iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("  [{}] ", key), Style::default().fg(Color::Yellow)),
                Span::raw(*action),
            ])
        }));

        let help = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" tidings playground ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(help, main_area);

        let status = Line::from(vec![
            Span::styled(
                format!(" {} toasts ", self.store.toast_count()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("· revision {}", self.store.revision()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(status), status_area);

        // Overlays last so they sit on top of the main UI
        render_toasts(frame, &self.store.toasts(), self.max_visible);
        if let Some(view) = self.store.confirm_view() {
            render_confirm(frame, &view);
        }
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
