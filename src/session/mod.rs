//! Interactive session around one assessment card
//!
//! Reads commands, applies them to the [`AssessmentView`], and re-renders
//! the card. An interrupt (Ctrl-C) while a request is pending tears the
//! view down, which cancels the request and ends the session.

pub mod commands;
pub mod input;

use crate::navigation::{NavigationPayload, Navigator, Route};
use crate::types::Language;
use crate::view::strings::t;
use crate::view::{render_card, Activity, AssessmentView, Theme};
use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

pub use commands::{parse, Command};
pub use input::InputHandler;

/// Prompt loop state
pub struct Session {
    view: AssessmentView,
    navigator: Arc<dyn Navigator>,
    theme: Theme,
    show_progress: bool,
    interrupt_watcher: Option<JoinHandle<()>>,
}

impl Session {
    pub fn new(
        view: AssessmentView,
        navigator: Arc<dyn Navigator>,
        theme: Theme,
        show_progress: bool,
    ) -> Self {
        Self {
            view,
            navigator,
            theme,
            show_progress,
            interrupt_watcher: None,
        }
    }

    /// Tear the view down when `signal` resolves with `Ok`.
    ///
    /// Install this before [`Session::open`] so the first fetch can be
    /// interrupted too. Replaces any earlier watcher.
    pub fn interrupt_on<F>(&mut self, signal: F)
    where
        F: Future<Output = std::io::Result<()>> + Send + 'static,
    {
        let cancel = self.view.cancel_handle();
        let watcher = tokio::spawn(async move {
            if signal.await.is_ok() {
                info!("interrupted, tearing down assessment view");
                cancel.cancel();
            }
        });

        if let Some(previous) = self.interrupt_watcher.replace(watcher) {
            previous.abort();
        }
    }

    pub fn view(&self) -> &AssessmentView {
        &self.view
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Load the payload's question and print the card
    pub async fn open(&mut self, payload: &NavigationPayload) {
        let spinner = self.spinner();
        spinner.run(self.view.load(Some(payload.question.as_str()))).await;
        self.print_card();
    }

    /// Apply one command. Returns `false` when the session should end.
    pub async fn handle(&mut self, command: Command) -> bool {
        debug!(?command, "handling command");
        match command {
            Command::Help => {
                commands::show_help();
                true
            }
            Command::Exit => false,
            Command::Language(language) => {
                self.change_language(language).await;
                true
            }
            Command::ToggleLanguage => {
                let next = self.view.language().toggled();
                self.change_language(Some(next)).await;
                true
            }
            Command::Theme(theme) => {
                self.theme = theme.unwrap_or_else(|| self.theme.toggle());
                self.print_card();
                true
            }
            Command::Doctor => self.follow(Route::TalkToDoctor),
            Command::Home => self.follow(Route::Home),
            Command::Ask { question } => {
                if question.is_empty() {
                    return true;
                }
                let spinner = self.spinner();
                spinner.run(self.view.load(Some(question.as_str()))).await;
                self.print_card();
                true
            }
            Command::Unknown { input } => {
                println!("{}", format!("Unknown command: {}", input).red());
                println!("Type {} for available commands", "/help".cyan());
                true
            }
        }
    }

    /// Read commands until exit, EOF, or teardown
    pub async fn run(&mut self, history: Option<PathBuf>) -> Result<()> {
        let mut input = match history {
            Some(path) => InputHandler::with_history(path)?,
            None => InputHandler::new()?,
        };

        loop {
            if self.view.is_torn_down() {
                break;
            }

            let Some(line) = input.read_line()? else {
                break;
            };

            if !self.handle(parse(&line)).await || self.view.is_torn_down() {
                break;
            }
        }

        if let Some(watcher) = self.interrupt_watcher.take() {
            watcher.abort();
        }
        self.view.teardown();
        input.save_history()?;
        Ok(())
    }

    async fn change_language(&mut self, language: Option<Language>) {
        let mut spinner = self.spinner();
        if let Some(target) = language {
            spinner.language = target;
        }
        spinner.run(self.view.select_language(language)).await;
        self.print_card();
    }

    fn spinner(&self) -> Spinner {
        Spinner {
            show: self.show_progress,
            activity: self.view.busy_handle(),
            language: self.view.language(),
        }
    }

    fn follow(&self, route: Route) -> bool {
        println!("{}", t(route.message_key(), self.view.language()).cyan());
        self.navigator.navigate(route);
        !route.leaves_card()
    }

    fn print_card(&self) {
        if self.view.is_torn_down() {
            return;
        }
        print!("{}", render_card(&self.view, self.theme));
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(watcher) = self.interrupt_watcher.take() {
            watcher.abort();
        }
    }
}

/// Spinner driven by the view's [`Activity`] handle
struct Spinner {
    show: bool,
    activity: Activity,
    language: Language,
}

impl Spinner {
    /// Await `fut`, showing a spinner only while the view reports work
    async fn run<F: Future>(self, fut: F) -> F::Output {
        if !self.show {
            return fut.await;
        }

        tokio::pin!(fut);
        let mut poll = tokio::time::interval(Duration::from_millis(100));
        let mut bar: Option<ProgressBar> = None;

        let out = loop {
            tokio::select! {
                biased;
                out = &mut fut => break out,
                _ = poll.tick() => match self.activity.status_key() {
                    Some(key) => bar
                        .get_or_insert_with(new_spinner)
                        .set_message(t(key, self.language)),
                    None => {
                        if let Some(pb) = bar.take() {
                            pb.finish_and_clear();
                        }
                    }
                },
            }
        };

        if let Some(pb) = bar {
            pb.finish_and_clear();
        }
        out
    }
}

fn new_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
