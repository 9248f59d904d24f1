use anyhow::Result;

use super::Options;

/// Fills in whatever was not passed as a flag by prompting for it.
pub fn flags_login(options: Options, default_email: Option<String>) -> Result<(String, String)> {
    let email = match options.email {
        Some(email) => email,

        None => {
            let mut input = dialoguer::Input::<String>::new();
            input.with_prompt("Email");

            if let Some(default_email) = default_email {
                input.default(default_email);
            }

            input.interact_text()?
        }
    };

    let password = match options.password {
        Some(password) => password,

        None => dialoguer::Password::new()
            .with_prompt("Password")
            .interact()?,
    };

    Ok((email.trim().to_string(), password))
}
