//! Command-line argument parsing for HealthBuddy
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use crate::cli::Config;
use crate::navigation::NavigationPayload;
use crate::types::Language;
use crate::view::Theme;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// HealthBuddy - AI health assessment in English or Hindi
#[derive(Parser, Debug)]
#[command(name = "healthbuddy")]
#[command(author = "Jerome (Kubashen) Naidoo")]
#[command(version)]
#[command(about = "Ask a local Ollama model about a health concern", long_about = None)]
pub struct Args {
    /// Health question, e.g. "I have had a headache for three days"
    #[arg(value_name = "QUESTION")]
    pub question: Option<String>,

    /// Display language: english | hindi
    #[arg(short, long)]
    pub language: Option<Language>,

    /// Color theme: light | dark
    #[arg(short, long)]
    pub theme: Option<Theme>,

    /// Ollama model for the assessment
    #[arg(short, long)]
    pub model: Option<String>,

    /// Ollama model for translation (defaults to the configured one)
    #[arg(long)]
    pub translation_model: Option<String>,

    /// Ollama host
    #[arg(long)]
    pub host: Option<String>,

    /// Ollama port
    #[arg(long)]
    pub port: Option<u16>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the card once and exit instead of opening the interactive prompt
    #[arg(long)]
    pub once: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only in the log)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check that Ollama is reachable and the configured models are installed
    Check,

    /// Display the effective configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Check that exactly one of question or subcommand was given
    pub fn validate(&self) -> Result<(), String> {
        let has_question = self
            .question
            .as_deref()
            .map(|q| !q.trim().is_empty())
            .unwrap_or(false);

        if self.command.is_none() && !has_question {
            return Err(
                "Question required. Use 'healthbuddy \"<QUESTION>\"' or run a subcommand."
                    .to_string(),
            );
        }

        if self.command.is_some() && self.question.is_some() {
            return Err("Cannot specify a question with a subcommand.".to_string());
        }

        Ok(())
    }

    /// Fold command-line overrides into the loaded configuration
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.ollama.host = host.clone();
        }
        if let Some(port) = self.port {
            config.ollama.port = port;
        }
        if let Some(model) = &self.model {
            config.ollama.advice_model = model.clone();
        }
        if let Some(model) = &self.translation_model {
            config.ollama.translation_model = model.clone();
        }
        if let Some(language) = self.language {
            config.display.default_language = language;
        }
        if let Some(theme) = self.theme {
            config.display.default_theme = theme;
        }
        if self.no_color {
            config.display.color_output = false;
        }
    }

    /// Payload the card is opened with
    pub fn payload(&self, config: &Config) -> Option<NavigationPayload> {
        self.question.as_ref().map(|question| {
            NavigationPayload::new(
                question.trim(),
                Some(self.language.unwrap_or(config.display.default_language)),
            )
        })
    }
}

impl Verbosity {
    /// Default log filter directive for this verbosity
    pub fn log_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::VeryVerbose => "debug",
        }
    }

    /// Check if should show spinners
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}
