use std::path::PathBuf;

use log::{debug, info, warn};

use crate::data::{Catalog, LoadError, ModuleConfig, QuestionSource, RecordStore};
use crate::models::{AppState, OptionLabel, Part, QuestionRecord};
use crate::quiz::{
    assemble_custom_test, parse_count, shuffle, AnswerResult, CustomTestRequest, QuizSession,
    UsageError,
};
use crate::QuizError;

/// A load the UI loop should run in the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadRequest {
    Module { index: usize, path: PathBuf },
    CustomTest(CustomTestRequest),
}

impl LoadRequest {
    /// Runs the load against `source`.
    pub async fn execute(self, source: &dyn QuestionSource) -> LoadOutcome {
        match self {
            LoadRequest::Module { index, path } => LoadOutcome::Module {
                index,
                result: source.load(&path).await,
            },
            LoadRequest::CustomTest(request) => {
                LoadOutcome::CustomTest(assemble_custom_test(source, &request).await)
            }
        }
    }
}

/// Completion of a [`LoadRequest`].
#[derive(Debug)]
pub enum LoadOutcome {
    Module {
        index: usize,
        result: Result<Vec<QuestionRecord>, LoadError>,
    },
    CustomTest(Result<Vec<QuestionRecord>, QuizError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One-line message shown until the next key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Where the running session came from, and so where Esc leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOrigin {
    Part(usize),
    CustomTest,
}

/// Parts of the module the learner opened.
#[derive(Debug, Clone)]
pub struct LoadedModule {
    pub index: usize,
    pub parts: Vec<Part>,
}

/// Checkbox and count inputs of the custom test screen.
#[derive(Debug, Clone, Default)]
pub struct TestSetup {
    pub selected: Vec<bool>,
    pub count_input: String,
    pub cursor: usize,
}

/// Presentation state of the question on screen.
///
/// Rebuilt whenever a question comes into view, so options get a fresh
/// order on every visit.
#[derive(Debug, Clone, Default)]
pub struct QuestionView {
    pub order: Vec<OptionLabel>,
    pub cursor: usize,
    pub wrong_picks: Vec<OptionLabel>,
    pub feedback: Option<AnswerResult>,
}

const MAX_COUNT_DIGITS: usize = 4;

pub struct App {
    pub state: AppState,
    catalog: Catalog,
    home_cursor: usize,
    loaded: Option<LoadedModule>,
    part_cursor: usize,
    setup: TestSetup,
    session: Option<QuizSession>,
    origin: SessionOrigin,
    title: String,
    view: QuestionView,
    pending: Option<LoadRequest>,
    notice: Option<Notice>,
    jump_input: Option<String>,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let setup = TestSetup {
            selected: vec![false; catalog.modules.len()],
            ..TestSetup::default()
        };

        Self {
            state: AppState::Modules,
            catalog,
            home_cursor: 0,
            loaded: None,
            part_cursor: 0,
            setup,
            session: None,
            origin: SessionOrigin::CustomTest,
            title: String::new(),
            view: QuestionView::default(),
            pending: None,
            notice: None,
            jump_input: None,
        }
    }

    pub fn modules(&self) -> &[ModuleConfig] {
        &self.catalog.modules
    }

    pub fn part_size(&self) -> usize {
        self.catalog.part_size
    }

    pub fn home_cursor(&self) -> usize {
        self.home_cursor
    }

    /// Modules plus the trailing custom test entry.
    pub fn home_entries(&self) -> usize {
        self.catalog.modules.len() + 1
    }

    pub fn loaded_module(&self) -> Option<&LoadedModule> {
        self.loaded.as_ref()
    }

    pub fn loaded_module_name(&self) -> &str {
        self.loaded
            .as_ref()
            .and_then(|loaded| self.catalog.modules.get(loaded.index))
            .map_or("", |module| module.name.as_str())
    }

    pub fn part_cursor(&self) -> usize {
        self.part_cursor
    }

    pub fn setup(&self) -> &TestSetup {
        &self.setup
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn origin(&self) -> SessionOrigin {
        self.origin
    }

    pub fn question_view(&self) -> &QuestionView {
        &self.view
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn jump_input(&self) -> Option<&str> {
        self.jump_input.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Header text for the current screen.
    pub fn title(&self) -> &str {
        match self.state {
            AppState::Modules => "Home",
            AppState::Parts => self.loaded_module_name(),
            AppState::TestSetup => "Create a custom test",
            AppState::Quiz => self.title.as_str(),
        }
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        self.notice = Some(Notice {
            level,
            message: message.into(),
        });
    }

    // --- Cursor movement ---

    pub fn select_next(&mut self) {
        match self.state {
            AppState::Modules => {
                self.home_cursor = (self.home_cursor + 1) % self.home_entries();
            }
            AppState::Parts => {
                let count = self.loaded.as_ref().map_or(0, |l| l.parts.len());
                if count > 0 {
                    self.part_cursor = (self.part_cursor + 1) % count;
                }
            }
            AppState::TestSetup => {
                let count = self.setup.selected.len();
                if count > 0 {
                    self.setup.cursor = (self.setup.cursor + 1) % count;
                }
            }
            AppState::Quiz => {
                let count = self.view.order.len();
                if count > 0 {
                    self.view.cursor = (self.view.cursor + 1) % count;
                }
            }
        }
    }

    pub fn select_previous(&mut self) {
        fn back(cursor: usize, count: usize) -> usize {
            if count == 0 { 0 } else { (cursor + count - 1) % count }
        }

        match self.state {
            AppState::Modules => {
                self.home_cursor = back(self.home_cursor, self.home_entries());
            }
            AppState::Parts => {
                let count = self.loaded.as_ref().map_or(0, |l| l.parts.len());
                self.part_cursor = back(self.part_cursor, count);
            }
            AppState::TestSetup => {
                self.setup.cursor = back(self.setup.cursor, self.setup.selected.len());
            }
            AppState::Quiz => {
                self.view.cursor = back(self.view.cursor, self.view.order.len());
            }
        }
    }

    // --- Home ---

    /// Opens the entry under the home cursor.
    pub fn activate_home(&mut self) -> Option<LoadRequest> {
        if self.home_cursor < self.catalog.modules.len() {
            self.request_module_load(self.home_cursor)
        } else {
            self.open_test_setup();
            None
        }
    }

    pub fn go_home(&mut self) {
        self.session = None;
        self.loaded = None;
        self.jump_input = None;
        self.state = AppState::Modules;
    }

    /// Asks for a module load unless another load is still running.
    pub fn request_module_load(&mut self, index: usize) -> Option<LoadRequest> {
        let module = self.catalog.modules.get(index)?;
        let request = LoadRequest::Module {
            index,
            path: module.file.clone(),
        };
        self.begin_load(request)
    }

    fn begin_load(&mut self, request: LoadRequest) -> Option<LoadRequest> {
        if let Some(pending) = &self.pending {
            debug!("ignoring {:?}, still waiting for {:?}", request, pending);
            return None;
        }
        self.pending = Some(request.clone());
        Some(request)
    }

    /// Applies a finished load. Failures leave every other state untouched.
    pub fn finish_load(&mut self, outcome: LoadOutcome) {
        self.pending = None;

        match outcome {
            LoadOutcome::Module { index, result } => match result {
                Ok(records) => {
                    let store = RecordStore::new(records);
                    let parts = store.partition(self.catalog.part_size);
                    info!(
                        "Module {} split into {} parts ({} questions)",
                        index,
                        parts.len(),
                        store.len()
                    );
                    self.loaded = Some(LoadedModule { index, parts });
                    self.part_cursor = 0;
                    self.state = AppState::Parts;
                }
                Err(err) => {
                    warn!("module load failed: {}", err);
                    self.notify(
                        NoticeLevel::Error,
                        format!("Could not load data file: {}", err.path().display()),
                    );
                }
            },
            LoadOutcome::CustomTest(result) => match result {
                Ok(questions) => {
                    let title = format!("Custom test ({} questions)", questions.len());
                    self.start_session(questions, SessionOrigin::CustomTest, title);
                }
                Err(err) => {
                    warn!("custom test load failed: {}", err);
                    self.notify(
                        NoticeLevel::Error,
                        "Failed to load question data. Please try again.",
                    );
                }
            },
        }
    }

    // --- Parts ---

    pub fn start_selected_part(&mut self) {
        let Some(loaded) = &self.loaded else {
            return;
        };
        let Some(part) = loaded.parts.get(self.part_cursor) else {
            return;
        };

        let title = format!("{} - {}", part.label, self.loaded_module_name());
        let questions = part.questions.clone();
        self.start_session(questions, SessionOrigin::Part(self.part_cursor), title);
    }

    pub fn back_to_parts(&mut self) {
        self.session = None;
        self.jump_input = None;
        self.state = if self.loaded.is_some() {
            AppState::Parts
        } else {
            AppState::Modules
        };
    }

    // --- Custom test setup ---

    pub fn open_test_setup(&mut self) {
        self.session = None;
        self.jump_input = None;
        self.setup.selected.resize(self.catalog.modules.len(), false);
        self.state = AppState::TestSetup;
    }

    pub fn toggle_selected_module(&mut self) {
        if let Some(checked) = self.setup.selected.get_mut(self.setup.cursor) {
            *checked = !*checked;
        }
    }

    pub fn count_input_push(&mut self, c: char) {
        if c.is_ascii_digit() && self.setup.count_input.len() < MAX_COUNT_DIGITS {
            self.setup.count_input.push(c);
        }
    }

    pub fn count_input_pop(&mut self) {
        self.setup.count_input.pop();
    }

    fn custom_test_request(&self) -> Result<CustomTestRequest, UsageError> {
        let sources: Vec<PathBuf> = self
            .catalog
            .modules
            .iter()
            .zip(&self.setup.selected)
            .filter(|(_, checked)| **checked)
            .map(|(module, _)| module.file.clone())
            .collect();

        if sources.is_empty() {
            return Err(UsageError::NoSelection);
        }
        CustomTestRequest::new(sources, parse_count(&self.setup.count_input)?)
    }

    /// Validates the setup form and asks for the pooled load.
    pub fn start_custom_test(&mut self) -> Option<LoadRequest> {
        match self.custom_test_request() {
            Ok(request) => self.begin_load(LoadRequest::CustomTest(request)),
            Err(UsageError::NoSelection) => {
                self.notify(NoticeLevel::Info, "Please select at least one module!");
                None
            }
            Err(err) => {
                debug!("custom test rejected: {}", err);
                self.notify(NoticeLevel::Info, "Please enter a valid number of questions!");
                None
            }
        }
    }

    // --- Quiz ---

    fn start_session(&mut self, questions: Vec<QuestionRecord>, origin: SessionOrigin, title: String) {
        match QuizSession::start(questions) {
            Ok(session) => {
                info!("Starting {} ({} questions)", title, session.len());
                self.session = Some(session);
                self.origin = origin;
                self.title = title;
                self.jump_input = None;
                self.state = AppState::Quiz;
                self.refresh_view();
            }
            Err(err) => {
                warn!("refusing to start {}: {}", title, err);
                self.notify(NoticeLevel::Info, "There are no questions in this selection.");
            }
        }
    }

    /// Reshuffles the visible options of the current question.
    fn refresh_view(&mut self) {
        let Some(session) = &self.session else {
            self.view = QuestionView::default();
            return;
        };

        let mut order = session.current().visible_labels();
        shuffle(&mut order, &mut rand::rng());
        self.view = QuestionView {
            order,
            ..QuestionView::default()
        };
    }

    pub fn next_question(&mut self) {
        if let Some(session) = &mut self.session {
            if !session.is_last() {
                session.next();
                self.refresh_view();
            }
        }
    }

    pub fn prev_question(&mut self) {
        if let Some(session) = &mut self.session {
            if !session.is_first() {
                session.prev();
                self.refresh_view();
            }
        }
    }

    pub fn first_question(&mut self) {
        self.jump_to(0);
    }

    pub fn last_question(&mut self) {
        let last = self.session.as_ref().map_or(0, |s| s.len().saturating_sub(1));
        self.jump_to(last);
    }

    /// Jumps to a 0-based question index, as the palette does.
    pub fn jump_to(&mut self, index: usize) {
        let Some(session) = &mut self.session else {
            return;
        };
        match session.go_to(index) {
            Ok(()) => self.refresh_view(),
            Err(err) => {
                warn!("jump rejected: {}", err);
                self.notify(NoticeLevel::Info, format!("There is no question {}.", index + 1));
            }
        }
    }

    pub fn open_jump_input(&mut self) {
        if self.session.is_some() {
            self.jump_input = Some(String::new());
        }
    }

    pub fn jump_input_push(&mut self, c: char) {
        if let Some(input) = &mut self.jump_input {
            if c.is_ascii_digit() && input.len() < MAX_COUNT_DIGITS {
                input.push(c);
            }
        }
    }

    pub fn jump_input_pop(&mut self) {
        if let Some(input) = &mut self.jump_input {
            input.pop();
        }
    }

    pub fn cancel_jump(&mut self) {
        self.jump_input = None;
    }

    /// Jumps to the 1-based number typed into the jump prompt.
    pub fn commit_jump(&mut self) {
        let Some(input) = self.jump_input.take() else {
            return;
        };
        match input.parse::<usize>() {
            Ok(number) if number >= 1 => self.jump_to(number - 1),
            _ => self.notify(NoticeLevel::Info, "Type a question number first."),
        }
    }

    /// Submits an answer for the current question.
    ///
    /// Returns `None` when no quiz runs or the question is already locked.
    pub fn answer(&mut self, label: OptionLabel) -> Option<AnswerResult> {
        let session = self.session.as_mut()?;
        if session.is_locked() || !self.view.order.contains(&label) {
            return None;
        }

        let result = session.submit_answer(&label.to_string());
        if result == AnswerResult::Wrong && !self.view.wrong_picks.contains(&label) {
            self.view.wrong_picks.push(label);
        }
        self.view.feedback = Some(result);
        Some(result)
    }

    /// Submits the option under the cursor.
    pub fn answer_highlighted(&mut self) -> Option<AnswerResult> {
        let label = *self.view.order.get(self.view.cursor)?;
        self.answer(label)
    }

    /// Discards the session and returns to where it was started from.
    pub fn leave_quiz(&mut self) {
        match self.origin {
            SessionOrigin::Part(_) => self.back_to_parts(),
            SessionOrigin::CustomTest => self.open_test_setup(),
        }
    }
}
