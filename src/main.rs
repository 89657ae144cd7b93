//! phishcheck: phishing URL checker
//!
//! Desktop front end for a remote prediction service.
//!
//! Usage:
//!   phishcheck              - Open the checker window
//!   phishcheck check <url>  - Check one URL from the terminal
//!   phishcheck health       - Probe the prediction service
//!   phishcheck config       - Print the resolved configuration
//!   phishcheck help         - Show help

mod app;
mod backend;
mod checker;
mod commands;
mod config;
mod ui;

use app::PhishCheck;
use backend::PredictionClient;
use checker::Checker;
use commands::Command;
use config::CheckerConfig;
use iced::{window, Size, Task};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    // Initialize logging (use try_init to avoid panic if already initialized)
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = Command::parse(&args);

    if let Command::Help = command {
        println!("{}", Command::help_text());
        return Ok(());
    }
    if let Command::Invalid { message } = &command {
        eprintln!("{}", message);
        std::process::exit(2);
    }

    let config = match CheckerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };

    match command {
        Command::Gui => start_gui(config),
        Command::Check { url } => std::process::exit(run_headless(|| check_once(&config, url))),
        Command::Health => std::process::exit(run_headless(|| health(&config))),
        Command::Config => {
            println!("{}", config);
            Ok(())
        }
        Command::Help | Command::Invalid { .. } => Ok(()),
    }
}

fn start_gui(config: CheckerConfig) -> iced::Result {
    tracing::info!("Starting phishcheck window...");

    iced::application("Phishing URL Checker", PhishCheck::update, PhishCheck::view)
        .subscription(PhishCheck::subscription)
        .theme(PhishCheck::theme)
        .window(window::Settings {
            size: Size::new(720.0, 620.0),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || (PhishCheck::new(&config), Task::none()))
}

/// Drive one async command on a fresh runtime and return the process exit code
fn run_headless<F, Fut>(command: F) -> i32
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = i32>,
{
    match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt.block_on(command()),
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {}", e);
            1
        }
    }
}

async fn check_once(config: &CheckerConfig, url: String) -> i32 {
    let client = PredictionClient::new(config);
    let mut checker = Checker::new(config.stale_policy);
    checker.set_input(url);

    checker.check(&client).await;
    if let Some(result) = checker.result() {
        println!("{}", ui::verdict::summary(result));
        return 0;
    }
    eprintln!(
        "Error: {}",
        checker.error().unwrap_or(backend::api::TRANSPORT_FALLBACK)
    );
    1
}

async fn health(config: &CheckerConfig) -> i32 {
    let client = PredictionClient::new(config);
    match client.health_check().await {
        Ok(health) if health.is_ok() => {
            println!("Prediction service is up ({})", config.health_url());
            0
        }
        Ok(health) => {
            println!("Prediction service reports status '{}'", health.status);
            1
        }
        Err(e) => {
            eprintln!("Prediction service is unreachable: {}", e);
            1
        }
    }
}
