use std::{collections::HashSet, path::Path};

use colored::{Color, Colorize};

use crate::{
    display::{banner, bordered_box, paint, rainbow},
    emails::{extract_emails, filter_emails},
    error::Result,
    github::{GitHub, HttpClient},
    storage::save_results,
    validation::{prompt_until_valid, prompt_yes_no, validate_input_filename, validate_input_username},
};

/// Runs the interactive search loop until the user stops searching
pub fn run_menu<C: HttpClient>(github: &GitHub<C>) -> Result<()> {
    loop {
        println!("{}", banner());

        let username: String = prompt_until_valid(
            &format!("{}", "Enter GitHub profile name:".cyan()),
            validate_input_username,
        )?;

        let repos: Vec<String> = github.list_repositories(&username)?;
        if repos.is_empty() {
            println!("{}", format!("Nothing found for user {}.", username).red());
            continue;
        }

        let emails: HashSet<String> = collect_emails(github, &username, &repos)?;
        show_emails(&emails);

        if prompt_yes_no(&format!("{}", "Do you want to save the results to a file? (y/n):".cyan()))? {
            menu_save_results(&username, &emails)?;
        }

        if !prompt_yes_no(&format!("{}", "Do you want to search another profile? (y/n):".cyan()))? {
            println!("{}", "Thank you for using the GitHub Email Extractor. Goodbye!".yellow());
            break Ok(());
        }
    }
}

/// Fetches every repository's commit log and merges the filtered emails
///
/// Each log is scanned and dropped as soon as it arrives. Repositories whose
/// log could not be fetched contribute nothing.
pub fn collect_emails<C: HttpClient>(
    github: &GitHub<C>,
    username: &str,
    repos: &[String],
) -> Result<HashSet<String>> {
    let pairs: Vec<(String, String)> = repos
        .iter()
        .map(|repo| (username.to_string(), repo.clone()))
        .collect();

    let total = pairs.len();
    let mut merged: usize = 0;
    let mut all_emails: HashSet<String> = HashSet::new();
    github.fetch_commit_logs(&pairs, |commit_log| {
        merged += 1;
        println!("{}", format!("Searching ({}/{})", merged, total).magenta());
        if let Some(text) = commit_log {
            all_emails.extend(filter_emails(extract_emails(&text)));
        }
    })?;

    tracing::info!("collected {} emails for {username}", all_emails.len());
    Ok(all_emails)
}

fn show_emails(emails: &HashSet<String>) {
    println!("{}", rainbow("\nEMAILS:"));
    let lines: Vec<&str> = emails.iter().map(String::as_str).collect();
    println!("{}", bordered_box(&lines, Color::Yellow, Color::Green));
}

/// Menu for saving results to a file
fn menu_save_results(username: &str, emails: &HashSet<String>) -> Result<()> {
    let filename: String = prompt_until_valid(
        &format!("{}", "Enter the filename to save results (e.g., results.txt):".cyan()),
        validate_input_filename,
    )?;

    save_results(username, emails, Path::new(&filename))?;
    println!("{}", paint(Color::Green, &format!("Results saved to {}", filename)));
    Ok(())
}
