use colored::Colorize;
use inquire::Text;

use crate::error::{AppError, Result};

/// Prompts user for input until valid input is provided
pub fn prompt_until_valid<F>(prompt_message: &str, input_validation: F) -> Result<String>
where
    F: Fn(&str) -> Result<()>,
{
    loop {
        let input: String = Text::new(prompt_message).prompt()?;
        let input = input.trim().to_string();
        match input_validation(&input) {
            Ok(_) => break Ok(input),
            Err(AppError::Validation(msg)) => println!("{}", msg.red()),
            Err(e) => return Err(e),
        }
    }
}

/// Prompts a yes/no question; only `y` (any case, surrounding spaces ignored) is a yes
pub fn prompt_yes_no(prompt_message: &str) -> Result<bool> {
    let answer: String = Text::new(prompt_message).prompt()?;
    Ok(is_affirmative(&answer))
}

/// Checks whether a y/n answer means yes
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

// Validate input helper functions

/// Validates a GitHub profile name
pub fn validate_input_username(name: &str) -> Result<()> {
    if name.is_empty() {
        Err(AppError::Validation("Profile name cannot be empty".to_string()))
    } else {
        Ok(())
    }
}

/// Validates an output filename
pub fn validate_input_filename(filename: &str) -> Result<()> {
    if filename.is_empty() {
        Err(AppError::Validation("Filename cannot be empty".to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_affirmative() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative(" Y \n"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative(""));
    }

    #[test]
    fn test_is_affirmative_rejects_longer_answers() {
        assert!(is_affirmative("\ty"));
        assert!(!is_affirmative("yy"));
    }

    #[test]
    fn test_validate_input_username() {
        assert!(validate_input_username("octocat").is_ok());
        assert!(matches!(
            validate_input_username(""),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_input_filename() {
        assert!(validate_input_filename("results.txt").is_ok());
        assert!(matches!(
            validate_input_filename(""),
            Err(AppError::Validation(_))
        ));
    }
}
