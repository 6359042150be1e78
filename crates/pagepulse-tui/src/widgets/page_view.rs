use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use pagepulse_core::geometry;
use pagepulse_core::page::{Element, COUNTER_CLASS};

use crate::app::App;
use crate::theme::Theme;

pub struct PageViewWidget;

impl PageViewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg0)), area);

        let page = app.session.page();
        let scroll = page.scroll_y();
        let row_height = app.row_height();
        let page_width = page.viewport().width.max(1.0);

        for element in page.elements() {
            // The navbar has its own widget
            if element.tag == "nav" {
                continue;
            }
            let Some(cells) = to_cells(&element.rect, scroll, row_height, page_width, area) else {
                continue;
            };
            if element.is_section() {
                // Only the heading row of a section is drawn, when it is on screen
                if element.rect.top() >= scroll {
                    render_heading(frame, Rect { height: 1, ..cells }, element, theme);
                }
            } else if element.has_class(COUNTER_CLASS) {
                render_counter(frame, cells, element, theme);
            } else if element.is_image() {
                render_image(frame, cells, element, theme);
            } else {
                render_text(frame, cells, element, theme);
            }
        }
    }
}

/// Map a document rectangle to terminal cells inside `area`
fn to_cells(
    rect: &geometry::Rect,
    scroll: f64,
    row_height: f64,
    page_width: f64,
    area: Rect,
) -> Option<Rect> {
    let columns = area.width as f64;
    let top = ((rect.top() - scroll) / row_height).floor().max(0.0);
    let bottom = ((rect.bottom() - scroll) / row_height).ceil().min(area.height as f64);
    let left = (rect.left() / page_width * columns).floor().max(0.0);
    let right = (rect.right() / page_width * columns).ceil().min(columns);

    if bottom <= top || right <= left {
        return None;
    }

    Some(Rect::new(
        area.x + left as u16,
        area.y + top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

fn render_heading(frame: &mut Frame, area: Rect, element: &Element, theme: &Theme) {
    let name = element.name.as_deref().unwrap_or_default();
    let line = Line::from(vec![
        Span::styled(
            format!("#{} ", name),
            Style::default().fg(theme.aqua).add_modifier(Modifier::BOLD),
        ),
        Span::styled(element.text.clone(), Style::default().fg(theme.fg1)),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(theme.bg0)), area);
}

fn render_counter(frame: &mut Frame, area: Rect, element: &Element, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.grey0));
    let paragraph = Paragraph::new(element.text.clone())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.counter)
                .bg(theme.bg0)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_image(frame: &mut Frame, area: Rect, element: &Element, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(element.text.clone())
        .border_style(Style::default().fg(theme.blue));
    let body = match &element.src {
        Some(src) => Span::styled(format!("[image] {}", src), Style::default().fg(theme.green)),
        None => Span::styled("loading...", Style::default().fg(theme.grey0)),
    };
    let paragraph = Paragraph::new(Line::from(body))
        .alignment(Alignment::Center)
        .style(Style::default().bg(theme.bg0))
        .block(block);
    frame.render_widget(paragraph, area);
}

fn render_text(frame: &mut Frame, area: Rect, element: &Element, theme: &Theme) {
    // Unrevealed fade-in blocks are drawn in the background color
    let fg = if element.opacity >= 1.0 {
        theme.fg0
    } else {
        theme.bg0
    };
    let paragraph = Paragraph::new(element.text.clone())
        .style(Style::default().fg(fg).bg(theme.bg0))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_cells_scales_and_clips() {
        let area = Rect::new(0, 1, 128, 40);
        let rect = geometry::Rect::new(640.0, 1000.0, 640.0, 100.0);

        // 20px rows: client top 200 -> row 10, bottom 300 -> row 15
        let cells = to_cells(&rect, 800.0, 20.0, 1280.0, area).unwrap();
        assert_eq!(cells, Rect::new(64, 11, 64, 5));

        // Scrolled past
        assert!(to_cells(&rect, 1200.0, 20.0, 1280.0, area).is_none());

        // Partly above the viewport is clipped to the first row
        let cells = to_cells(&rect, 1050.0, 20.0, 1280.0, area).unwrap();
        assert_eq!(cells.y, 1);
        assert_eq!(cells.height, 3);
    }
}
