mod categorizer;
mod cli;
mod dataset;
mod error;
mod fmt;
mod importer;
mod models;
mod reports;
mod settings;
mod tui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, TopCommands};

fn init_logging() {
    let filter = EnvFilter::try_from_env("BAKERY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let file = cli.file.as_deref();

    let result = match cli.command {
        None | Some(Commands::Dashboard) => cli::dashboard::run(file),
        Some(Commands::Top { command }) => match command {
            TopCommands::Daypart { daypart, limit } => cli::top::daypart(file, &daypart, limit),
            TopCommands::Category {
                category,
                sub_category,
                limit,
            } => cli::top::category(file, &category, &sub_category, limit),
        },
        Some(Commands::Daytype) => cli::daytype::run(file),
        Some(Commands::Classify { items, explain }) => cli::classify::run(&items, explain),
        Some(Commands::Categories) => cli::categories::run(),
        Some(Commands::Status) => cli::status::run(file),
        Some(Commands::Export { output_dir }) => cli::export::run(file, output_dir),
        Some(Commands::Config {
            data_file,
            daypart_limit,
            category_limit,
        }) => cli::config::run(data_file, daypart_limit, category_limit),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
