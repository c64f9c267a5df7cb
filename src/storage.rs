use std::{fs, path::Path};

use crate::error::Result;

/// Formats the results file contents
///
/// A `GitHub Profile:` header, an `Extracted Emails:` line, then one email
/// per line in iteration order.
pub fn format_results<I, S>(username: &str, emails: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut contents = format!("GitHub Profile: {username}\nExtracted Emails:\n");
    for email in emails {
        contents.push_str(email.as_ref());
        contents.push('\n');
    }
    contents
}

/// Saves extracted emails to a plain-text file, replacing any existing one
///
/// # Arguments
/// * `username` - Profile the emails were collected from
/// * `emails` - Emails to write
/// * `path` - Destination, used as given
pub fn save_results<I, S>(username: &str, emails: I, path: &Path) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fs::write(path, format_results(username, emails))?;
    tracing::info!("saved results for {username} to {}", path.display());
    Ok(())
}
