use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use toolchat::api::{AgentApi, HttpAgentApi};
use toolchat::catalog::{self, ToolChecklist};
use toolchat::config::Config;
use toolchat::session::{ChatController, SessionContext};
use toolchat::tui::{self, TuiRunner};

mod cli;

use cli::Cli;
use cli::commands::Commands;
use cli::output;

fn setup_logging(level: &str) -> Result<PathBuf> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolchat")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolchat.log");

    // The TUI owns the terminal, so logs go to a file
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(log_file)
}

fn build_api(config: &Config) -> Result<Arc<dyn AgentApi>> {
    let api = HttpAgentApi::new(config.server.http_config()).context("Failed to create HTTP client")?;
    Ok(Arc::new(api))
}

fn build_controller(config: &Config) -> Result<ChatController> {
    let api = build_api(config)?;
    let context = SessionContext::new(&config.session.user_id);
    Ok(ChatController::new(api, context, config.session.missing_session))
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => run_tui(config).await,
        Some(Commands::Tools) => handle_tools_command(config).await,
        Some(Commands::Ask { tools, query }) => handle_ask_command(tools, query, config).await,
        Some(Commands::Health) => handle_health_command(config).await,
    }
}

async fn run_tui(config: &Config) -> Result<()> {
    info!("Launching TUI mode");
    let controller = build_controller(config)?;

    let terminal = tui::init_terminal().context("Failed to initialize terminal")?;
    let mut runner = TuiRunner::new(terminal, controller, &config.server.base_url, config.tui.tick_rate_ms);
    let result = runner.run().await;

    // Restore even when the loop failed
    tui::restore_terminal().context("Failed to restore terminal")?;
    result
}

async fn handle_tools_command(config: &Config) -> Result<()> {
    info!("Listing tools from {}", config.server.base_url);
    let api = build_api(config)?;
    let tools = catalog::fetch_tools(api.as_ref())
        .await
        .context("Failed to fetch tool catalog")?;

    let checklist = ToolChecklist::from_tools(tools);
    println!("{}", output::format_checklist(checklist.items()));
    Ok(())
}

async fn handle_ask_command(tools: &[String], query: &str, config: &Config) -> Result<()> {
    info!("One-shot query with tools {:?}", tools);
    let mut controller = build_controller(config)?;

    if !tools.is_empty() {
        controller
            .fetch_catalog()
            .await
            .context("Failed to fetch tool catalog")?;
        for name in tools {
            if !controller.checklist_mut().set_checked(name, true) {
                let available: Vec<&str> = controller.checklist().items().iter().map(|i| i.name.as_str()).collect();
                eyre::bail!("Unknown tool '{}' (available: {})", name, available.join(", "));
            }
        }

        let session = controller.create_session().await.context("Failed to create session")?;
        println!("{}", output::format_session(session));
    }

    let outcome = controller.send_query(query).await.context("Query failed")?;
    if let Some(warning) = outcome.warning {
        output::warn(warning);
    }
    if outcome.adopted_session
        && let Some(session_id) = controller.context().session_id()
    {
        println!("{} {}", "Session:".green(), session_id);
    }

    println!("{}", outcome.response);
    Ok(())
}

async fn handle_health_command(config: &Config) -> Result<()> {
    info!("Checking health of {}", config.server.base_url);
    let api = build_api(config)?;
    let health = api.health().await.context("Health check failed")?;

    if !health.is_ok() {
        eyre::bail!("Agent service reported status '{}'", health.status);
    }
    println!("{} {}", "Healthy:".green(), config.server.base_url);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref())
        .context("Failed to load configuration")?
        .with_overrides(cli.server.as_deref(), cli.user.as_deref());
    config.validate().context("Invalid configuration")?;

    let level = if cli.is_verbose() { "debug" } else { config.log_level.as_str() };
    setup_logging(level).context("Failed to setup logging")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
