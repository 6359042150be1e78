use std::time::{Duration, Instant};

use anyhow::Result;

use pagepulse_core::page::COUNTER_CLASS;
use pagepulse_core::{AppConfig, PageSession};

/// Drive a page session on a virtual clock and print what changes
pub fn run(config: &AppConfig, scroll_to: f64, frame_ms: u64, max_ms: u64) -> Result<()> {
    let mut session = PageSession::from_config(config)?;
    let frame = Duration::from_millis(frame_ms.max(1));
    let t0 = Instant::now();

    let applied = session.scroll_to(scroll_to);
    println!(
        "{}: scrolled to {:.0}px of {:.0}px",
        session.page().title,
        applied,
        session.page().max_scroll()
    );

    let mut report = session.start(t0);
    let mut elapsed = Duration::ZERO;
    loop {
        for event in &report.fired {
            println!(
                "[{:>6}ms] {} {} became visible ({:.0}%)",
                elapsed.as_millis(),
                event.role.as_str(),
                event.element,
                event.ratio * 100.0
            );
        }
        for counter in &report.counter_frames {
            let marker = if counter.completed { " (done)" } else { "" };
            println!(
                "[{:>6}ms] counter {} = {}{}",
                elapsed.as_millis(),
                counter.element,
                counter.text,
                marker
            );
        }

        if !session.needs_update() || elapsed.as_millis() as u64 >= max_ms {
            break;
        }
        elapsed += frame;
        report = session.frame(t0 + elapsed);
    }

    println!();
    let nav = session.nav();
    println!(
        "Navbar: {} | Active section: {}",
        if nav.scrolled { "scrolled" } else { "top" },
        nav.active_section.as_deref().unwrap_or("-")
    );
    for id in session.page().with_class(COUNTER_CLASS) {
        if let Some(element) = session.page().get(id) {
            println!(
                "  counter {} -> {} ({:?})",
                id,
                element.text,
                session.counters().state(id)
            );
        }
    }

    Ok(())
}
