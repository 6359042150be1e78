use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Help => "HELP",
        };

        let page = app.session.page();
        let percent = if page.max_scroll() > 0.0 {
            (page.scroll_y() / page.max_scroll() * 100.0).round() as u32
        } else {
            100
        };
        let section = app
            .session
            .nav()
            .active_section
            .as_deref()
            .unwrap_or("-");
        let running = app.session.counters().running();

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {} | {}% | {}", mode_str, percent, msg)
        } else {
            format!(
                " {} | #{} | {}% | counters running: {}",
                mode_str, section, percent, running
            )
        };

        let help_hint = " q:quit j/k:scroll 1-9:sections m:menu ?:help ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
