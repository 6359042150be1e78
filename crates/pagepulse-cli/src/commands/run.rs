use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use pagepulse_core::{AppConfig, PageSession};
use pagepulse_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    scroll::ScrollConfigExt,
    widgets::{NavBarWidget, PageViewWidget, PopupWidget, StatusBarWidget},
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    let session = PageSession::from_config(&config)?;
    let title = session.page().title.clone();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(&title))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, config, session);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Arc<AppConfig>,
    session: PageSession,
) -> Result<()> {
    let event_handler = EventHandler::with_animation_tick(
        config.ui.tick_rate_ms,
        config.ui.scroll.animation_tick_duration(),
    );

    let mut app = App::new(config, session);
    let size = terminal.size()?;
    app.start(size.height, Instant::now());

    loop {
        app.update(Instant::now());

        terminal.draw(|frame| {
            let area = frame.area();
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(area);

            NavBarWidget::render(frame, layout[0], &app);
            PageViewWidget::render(frame, layout[1], &app);
            StatusBarWidget::render(frame, layout[2], &app);

            if app.session.nav().menu_open {
                PopupWidget::render_menu(frame, &app);
            }
            if app.mode == Mode::Help {
                PopupWidget::render_help(frame, &app.theme);
            }
        })?;

        match event_handler.next(app.needs_fast_update())? {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, &app);
                app.handle_action(action, Instant::now());
            }
            Some(AppEvent::Resize(_, rows)) => app.on_resize(rows, Instant::now()),
            Some(AppEvent::Tick) | None => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
