use anyhow::Result;

use pagepulse_core::form::{ContactForm, FormClient};
use pagepulse_core::validation::validate_email;
use pagepulse_core::{AppConfig, Error};

pub async fn run(config: &AppConfig, name: &str, email: &str, phone: &str) -> Result<()> {
    let form = ContactForm::new(name, email, phone);

    if !form.email.is_empty() && !validate_email(&form.email) {
        println!("Warning: {} does not look like an email address", form.email);
    }

    let client = FormClient::from_config(&config.form)?;
    println!("Sending...");

    match client.submit(&form).await {
        Ok(_) => {
            println!("Thank you, {}", form.full_name);
            println!("We've received your message. Our team will connect with you shortly.");
            Ok(())
        }
        Err(Error::MissingFields(fields)) => {
            println!("Missing fields: {}", fields.join(", "));
            println!("Please fill all required fields before submitting.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
