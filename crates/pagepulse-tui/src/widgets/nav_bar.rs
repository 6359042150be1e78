use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct NavBarWidget;

impl NavBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let nav = app.session.nav();

        // The navbar gets a solid background once the page is scrolled
        let bg = if nav.scrolled { theme.bg2 } else { theme.bg0 };
        let menu_icon = if nav.menu_open { " x " } else { " = " };

        let mut spans = vec![
            Span::styled(
                format!(" {} ", app.session.page().title),
                Style::default()
                    .fg(theme.yellow)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(menu_icon, Style::default().fg(theme.grey2).bg(bg)),
        ];

        for (index, name) in app.section_names().iter().enumerate() {
            let active = nav.active_section.as_deref() == Some(name.as_str());
            let style = if active {
                Style::default()
                    .fg(theme.bg0)
                    .bg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg1).bg(bg)
            };
            spans.push(Span::styled(format!(" {}:{} ", index + 1, name), style));
        }

        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
        frame.render_widget(paragraph, area);
    }
}
