use clap::Parser;

use crate::github::DEFAULT_API_URL;

/// CLI arguments parser using `clap`
///
/// Every option has a default; with no arguments the tool is driven
/// entirely by interactive prompts.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Base URL of the GitHub REST API
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
    /// Timeout for each HTTP request, in seconds
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout: u64,
}
