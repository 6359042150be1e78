use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    pub fn render_help(frame: &mut Frame, theme: &Theme) {
        let area = centered_rect(50, 50, frame.area());
        let bindings = [
            ("j / k", "scroll down / up"),
            ("Ctrl-d / Ctrl-u", "half page down / up"),
            ("gg / G", "top / bottom"),
            ("1-9", "jump to section"),
            ("m", "toggle menu"),
            ("?", "toggle help"),
            ("q", "quit"),
        ];
        let lines: Vec<Line> = bindings
            .iter()
            .map(|(key, what)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>16}  ", key),
                        Style::default().fg(theme.yellow).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*what, Style::default().fg(theme.fg0)),
                ])
            })
            .collect();

        Self::render_box(frame, area, " Help ", lines, theme);
    }

    pub fn render_menu(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let names = app.section_names();
        let area = centered_rect(30, 40, frame.area());
        let lines: Vec<Line> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                Line::from(Span::styled(
                    format!(" {}  #{}", i + 1, name),
                    Style::default().fg(theme.fg1),
                ))
            })
            .collect();

        Self::render_box(frame, area, " Menu ", lines, theme);
    }

    fn render_box(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line>, theme: &Theme) {
        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Rectangle of `percent_x` x `percent_y` centered in `r`
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
