use anyhow::{bail, Result};

use pagepulse_core::validation::validate_email;

pub fn run(email: &str) -> Result<()> {
    if validate_email(email.trim()) {
        println!("{} looks valid", email.trim());
        Ok(())
    } else {
        bail!("{} is not a valid email address", email.trim())
    }
}
