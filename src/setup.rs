//! Interactive profile setup wizard (`sofia setup`)

use chrono::Utc;
use dialoguer::{Confirm, Input};

use crate::profile::{MISSING_FIELDS, UserProfile};

/// Ask for the profile fields
///
/// Name and location are required; GitHub and LinkedIn may be left blank.
/// Existing values are offered as defaults.
///
/// # Errors
///
/// Returns error if user input fails
pub fn prompt_profile(existing: Option<&UserProfile>) -> anyhow::Result<UserProfile> {
    println!("SOFIA Setup\n");

    if let Some(p) = existing {
        println!("Existing profile for {} ({})\n", p.name, p.location);
    }

    loop {
        let name = ask("Your name", existing.map(|p| p.name.as_str()), false)?;
        let location = ask("Your city", existing.map(|p| p.location.as_str()), false)?;
        let github = ask("GitHub username (optional)", existing.map(|p| p.github.as_str()), true)?;
        let linkedin = ask(
            "LinkedIn profile (optional)",
            existing.map(|p| p.linkedin.as_str()),
            true,
        )?;

        match UserProfile::new(&name, &location, &github, &linkedin, Utc::now()) {
            Ok(profile) => return Ok(profile),
            Err(e) => {
                tracing::debug!(error = %e, "setup input rejected");
                println!("{MISSING_FIELDS}");
                let retry = Confirm::new()
                    .with_prompt("Try again?")
                    .default(true)
                    .interact()?;
                if !retry {
                    anyhow::bail!("setup cancelled");
                }
            }
        }
    }
}

/// Confirm clearing all saved data
///
/// # Errors
///
/// Returns error if user input fails
pub fn confirm_reset() -> anyhow::Result<bool> {
    Ok(Confirm::new()
        .with_prompt("Are you sure you want to clear all data? This will reset SOFIA.")
        .default(false)
        .interact()?)
}

fn ask(prompt: &str, default: Option<&str>, optional: bool) -> anyhow::Result<String> {
    let mut input = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(optional);

    if let Some(d) = default.filter(|d| !d.is_empty()) {
        input = input.default(d.to_string());
    }

    Ok(input.interact_text()?)
}
