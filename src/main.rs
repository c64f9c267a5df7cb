use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod display;
mod emails;
mod error;
mod github;
mod menu;
mod model;
mod storage;
mod validation;

use crate::{
    cli::Cli,
    github::{GitHub, UreqClient},
    menu::run_menu,
};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ghmails=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = UreqClient::new(Duration::from_secs(cli.timeout));
    let github = GitHub::new(&cli.api_url, client);

    if let Err(err) = run_menu(&github) {
        println!("{}", format!("Error: {}", err).red());
        std::process::exit(1);
    }
}
