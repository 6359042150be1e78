use std::time::{Duration, Instant};

use anyhow::Result;

use pagepulse_core::form::Newsletter;
use pagepulse_core::AppConfig;

const BUTTON_LABEL: &str = "Subscribe";

/// Run the newsletter button through one signup and its reset
pub async fn run(config: &AppConfig, email: &str) -> Result<()> {
    let mut newsletter = Newsletter::from_config(&config.form);
    newsletter.set_input(email);

    if !newsletter.submit(Instant::now()) {
        println!("Enter an email address to subscribe.");
        return Ok(());
    }
    println!("{}", newsletter.button_label(BUTTON_LABEL));

    let wait = Duration::from_millis(config.form.newsletter_reset_ms);
    tokio::time::sleep(wait).await;
    if newsletter.poll(Instant::now()) {
        println!("{}", newsletter.button_label(BUTTON_LABEL));
    }
    Ok(())
}
