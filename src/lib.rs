//! # module-quiz
//!
//! A terminal quiz application that studies CSV question banks part by part.
//!
//! Question banks are split into fixed-size parts; the learner answers one
//! question at a time, may retry wrong answers until they get them right,
//! and can jump around with a palette that shows every question's outcome.
//! Custom tests draw a random sample across several modules.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use module_quiz::{Quiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::from_catalog_file("catalog.json")?;
//!     quiz.run().await
//! }
//! ```

mod app;
pub mod data;
pub mod models;
pub mod quiz;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::info;
use thiserror::Error;
use tokio::sync::mpsc;

pub use app::{
    App, LoadOutcome, LoadRequest, LoadedModule, Notice, NoticeLevel, QuestionView,
    SessionOrigin, TestSetup,
};
pub use data::{Catalog, CatalogError, CsvFileSource, LoadError, ModuleConfig, QuestionSource};
pub use models::{AppState, OptionLabel, Part, QuestionRecord};
pub use quiz::{AnswerResult, Outcome, QuizSession, UsageError};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error("invalid usage: {0}")]
    Usage(#[from] UsageError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

const TICK: Duration = Duration::from_millis(100);

/// A quiz application that can be run in the terminal.
pub struct Quiz {
    app: App,
    source: Arc<dyn QuestionSource>,
}

impl Quiz {
    /// Create a quiz over `catalog`, reading CSV files from disk.
    pub fn new(catalog: Catalog) -> Result<Self, QuizError> {
        Self::with_source(catalog, Arc::new(CsvFileSource))
    }

    /// Create a quiz that loads its question banks through `source`.
    pub fn with_source(
        catalog: Catalog,
        source: Arc<dyn QuestionSource>,
    ) -> Result<Self, QuizError> {
        catalog.validate()?;
        Ok(Self {
            app: App::new(catalog),
            source,
        })
    }

    /// Load the module catalog from a JSON file.
    ///
    /// ```rust,no_run
    /// use module_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_catalog_file("catalog.json").expect("Failed to load catalog");
    /// ```
    pub fn from_catalog_file<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        Self::new(Catalog::from_json(path)?)
    }

    /// Run the quiz in the terminal until the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        info!(
            "Starting quiz with {} modules, {} questions per part",
            self.app.modules().len(),
            self.app.part_size()
        );
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app, self.source).await;
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

async fn run_event_loop(
    terminal: &mut terminal::QuizTerminal,
    app: &mut App,
    source: Arc<dyn QuestionSource>,
) -> Result<(), QuizError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<LoadOutcome>();

    loop {
        while let Ok(outcome) = rx.try_recv() {
            app.finish_load(outcome);
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match handle_input(app, key.code) {
                Flow::Continue => {}
                Flow::Quit => break,
                Flow::Load(request) => {
                    let source = Arc::clone(&source);
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        let outcome = request.execute(source.as_ref()).await;
                        let _ = tx.send(outcome);
                    });
                }
            }
        }
    }

    Ok(())
}

/// What the event loop should do after a key press.
enum Flow {
    Continue,
    Quit,
    Load(LoadRequest),
}

impl From<Option<LoadRequest>> for Flow {
    fn from(request: Option<LoadRequest>) -> Self {
        request.map_or(Flow::Continue, Flow::Load)
    }
}

fn handle_input(app: &mut App, key: KeyCode) -> Flow {
    if app.is_loading() {
        return match key {
            KeyCode::Char('q') | KeyCode::Char('Q') => Flow::Quit,
            _ => Flow::Continue,
        };
    }
    app.clear_notice();

    match app.state {
        AppState::Modules => handle_modules_input(app, key),
        AppState::Parts => handle_parts_input(app, key),
        AppState::TestSetup => handle_setup_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
    }
}

fn handle_modules_input(app: &mut App, key: KeyCode) -> Flow {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous();
            Flow::Continue
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next();
            Flow::Continue
        }
        KeyCode::Enter => app.activate_home().into(),
        KeyCode::Char('q') | KeyCode::Char('Q') => Flow::Quit,
        _ => Flow::Continue,
    }
}

fn handle_parts_input(app: &mut App, key: KeyCode) -> Flow {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter => app.start_selected_part(),
        KeyCode::Esc | KeyCode::Backspace => app.go_home(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Flow::Quit,
        _ => {}
    }
    Flow::Continue
}

fn handle_setup_input(app: &mut App, key: KeyCode) -> Flow {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Char(' ') => app.toggle_selected_module(),
        KeyCode::Char(c) if c.is_ascii_digit() => app.count_input_push(c),
        KeyCode::Backspace => app.count_input_pop(),
        KeyCode::Enter => return app.start_custom_test().into(),
        KeyCode::Esc => app.go_home(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Flow::Quit,
        _ => {}
    }
    Flow::Continue
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> Flow {
    if app.jump_input().is_some() {
        match key {
            KeyCode::Char(c) if c.is_ascii_digit() => app.jump_input_push(c),
            KeyCode::Backspace => app.jump_input_pop(),
            KeyCode::Enter => app.commit_jump(),
            KeyCode::Esc => app.cancel_jump(),
            _ => {}
        }
        return Flow::Continue;
    }

    match key {
        KeyCode::Left | KeyCode::Char('h') => app.prev_question(),
        KeyCode::Right | KeyCode::Char('l') => app.next_question(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.answer_highlighted();
        }
        KeyCode::Home => app.first_question(),
        KeyCode::End => app.last_question(),
        KeyCode::Char(':') | KeyCode::Char('g') => app.open_jump_input(),
        KeyCode::Esc => app.leave_quiz(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Flow::Quit,
        KeyCode::Char(c) => {
            if let Some(label) = OptionLabel::from_char(c) {
                app.answer(label);
            }
        }
        _ => {}
    }
    Flow::Continue
}
