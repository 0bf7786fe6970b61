//! Commands understood by the interactive prompt

use crate::types::Language;
use crate::view::Theme;
use colored::*;

/// Prompt command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    /// Select a language; `None` when the argument did not name one
    Language(Option<Language>),
    ToggleLanguage,
    /// Select a theme; `None` flips the current one
    Theme(Option<Theme>),
    Doctor,
    Home,
    /// Free text is a new question
    Ask { question: String },
    Unknown { input: String },
}

/// Parse one line of input into a command
pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();

    if !trimmed.starts_with('/') {
        return Command::Ask {
            question: trimmed.to_string(),
        };
    }

    let parts: Vec<&str> = trimmed[1..].split_whitespace().collect();
    if parts.is_empty() {
        return Command::Unknown {
            input: input.to_string(),
        };
    }

    match parts[0].to_lowercase().as_str() {
        "help" | "?" => Command::Help,
        "exit" | "quit" | "q" => Command::Exit,
        "en" | "english" => Command::Language(Some(Language::English)),
        "hi" | "hindi" => Command::Language(Some(Language::Hindi)),
        "lang" | "language" => match parts.get(1) {
            Some(arg) => Command::Language(arg.parse().ok()),
            None => Command::ToggleLanguage,
        },
        "theme" => Command::Theme(parts.get(1).and_then(|arg| arg.parse().ok())),
        "doctor" | "d" => Command::Doctor,
        "home" | "h" => Command::Home,
        _ => Command::Unknown {
            input: input.to_string(),
        },
    }
}

/// Print available commands
pub fn show_help() {
    println!("\n{}", "Commands".bold().cyan());
    let rows = [
        ("/en, /hi", "Show the assessment in English or Hindi"),
        ("/lang [english|hindi]", "Select a language, or toggle without an argument"),
        ("/theme [light|dark]", "Select a theme, or toggle without an argument"),
        ("/doctor", "Talk to a doctor"),
        ("/home", "Back to home"),
        ("/help", "Show this help"),
        ("/exit", "Quit"),
    ];
    for (cmd, desc) in rows {
        println!("  {:<24} {}", cmd.green(), desc);
    }
    println!("  {:<24} {}\n", "<text>".green(), "Ask a new question");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_commands() {
        assert_eq!(parse("/hi"), Command::Language(Some(Language::Hindi)));
        assert_eq!(parse("/EN"), Command::Language(Some(Language::English)));
        assert_eq!(parse("/lang hindi"), Command::Language(Some(Language::Hindi)));
        assert_eq!(parse("/lang"), Command::ToggleLanguage);
    }

    #[test]
    fn test_unparseable_language_is_none() {
        assert_eq!(parse("/lang tamil"), Command::Language(None));
    }

    #[test]
    fn test_theme_commands() {
        assert_eq!(parse("/theme light"), Command::Theme(Some(Theme::Light)));
        assert_eq!(parse("/theme"), Command::Theme(None));
    }

    #[test]
    fn test_navigation_and_control() {
        assert_eq!(parse("/doctor"), Command::Doctor);
        assert_eq!(parse("/home"), Command::Home);
        assert_eq!(parse("/quit"), Command::Exit);
        assert_eq!(parse("/?"), Command::Help);
    }

    #[test]
    fn test_free_text_is_question() {
        assert_eq!(
            parse("  my knee hurts  "),
            Command::Ask {
                question: "my knee hurts".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(parse("/frobnicate"), Command::Unknown { .. }));
        assert!(matches!(parse("/"), Command::Unknown { .. }));
    }
}
