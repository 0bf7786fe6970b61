//! HealthBuddy - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use healthbuddy::{
    cli::{Args, Commands, Config},
    logging,
    navigation::TerminalNavigator,
    services::{AdviceService, OllamaAdviceService, OllamaClient, OllamaTranslator, Translator},
    session::Session,
    view::AssessmentView,
};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(message) = args.validate() {
        eprintln!("{} {}", "Error:".red().bold(), message);
        eprintln!("\nExample:\n  healthbuddy \"I have had a sore throat for two days\"\n");
        std::process::exit(2);
    }

    logging::init(args.verbosity());

    let mut config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    args.apply_to(&mut config);
    config.validate().context("Invalid configuration")?;

    if !config.display.color_output {
        colored::control::set_override(false);
    }

    match &args.command {
        Some(Commands::Check) => run_check(&config).await,
        Some(Commands::Config) => show_config(&config, args.config.as_deref()),
        None => run_card(&args, &config).await,
    }
}

async fn run_card(args: &Args, config: &Config) -> Result<()> {
    let payload = args
        .payload(config)
        .context("Question required")?;

    let client = OllamaClient::with_config(
        &config.ollama_url(),
        &config.ollama.advice_model,
        config.timeout(),
    )?;
    let advice: Arc<dyn AdviceService> = Arc::new(OllamaAdviceService::new(client.clone()));
    let translator: Arc<dyn Translator> = Arc::new(OllamaTranslator::new(
        client.for_model(&config.ollama.translation_model),
    ));

    info!(language = ?payload.language, "opening assessment");

    let view = AssessmentView::new(advice, translator, payload.language);
    let mut session = Session::new(
        view,
        Arc::new(TerminalNavigator),
        config.display.default_theme,
        args.verbosity().show_progress(),
    );

    session.interrupt_on(tokio::signal::ctrl_c());
    session.open(&payload).await;

    if args.once {
        return Ok(());
    }

    println!(
        "Type {} for commands, {} to quit\n",
        "/help".green(),
        "/exit".green()
    );
    let history = Config::default_path()
        .and_then(|p| p.parent().map(|dir| dir.join("history")));
    session.run(history).await
}

async fn run_check(config: &Config) -> Result<()> {
    let client = OllamaClient::with_config(
        &config.ollama_url(),
        &config.ollama.advice_model,
        config.timeout(),
    )?;

    println!("\nChecking Ollama at {}...\n", config.ollama_url().cyan());

    if !client.health_check().await? {
        println!("{} Ollama is not running. Start it with: ollama serve", "✗".red());
        std::process::exit(1);
    }
    println!("{} Ollama is running", "✓".green());

    let installed = client.list_models().await?;
    let mut healthy = true;
    for (role, model) in [
        ("advice", &config.ollama.advice_model),
        ("translation", &config.ollama.translation_model),
    ] {
        if installed.iter().any(|m| m == model) {
            println!("{} {} model {} is installed", "✓".green(), role, model.bold());
        } else {
            healthy = false;
            println!(
                "{} {} model {} is missing. Pull it with: ollama pull {}",
                "✗".red(),
                role,
                model.bold(),
                model
            );
        }
    }
    println!();

    std::process::exit(if healthy { 0 } else { 1 });
}

fn show_config(config: &Config, explicit: Option<&Path>) -> Result<()> {
    let rendered = toml::to_string_pretty(config).context("Failed to serialize config")?;

    println!("\n{}", "HealthBuddy Configuration".bold().cyan());
    match Config::source_path(explicit) {
        Some(path) => println!("{}\n", format!("({})", path.display()).dimmed()),
        None => println!("{}\n", "(built-in defaults)".dimmed()),
    }
    println!("{}", rendered);
    Ok(())
}
