use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use module_quiz::quiz::{assemble_custom_test, CustomTestRequest};
use module_quiz::{
    AnswerResult, App, AppState, Catalog, LoadError, LoadOutcome, LoadRequest, ModuleConfig,
    OptionLabel, Outcome, QuestionRecord, QuestionSource, QuizError,
};

/// Serves canned records by path; unknown paths fail like a missing file.
#[derive(Default)]
struct MemorySource {
    banks: HashMap<PathBuf, Vec<QuestionRecord>>,
}

impl MemorySource {
    fn with_bank(mut self, path: &str, prefix: &str, len: usize) -> Self {
        let records = (0..len)
            .map(|i| {
                QuestionRecord::new(
                    format!("{} {}", prefix, i + 1),
                    [
                        Some("alpha".into()),
                        Some("beta".into()),
                        Some("gamma".into()),
                        Some("delta".into()),
                    ],
                    OptionLabel::D,
                )
            })
            .collect();
        self.banks.insert(PathBuf::from(path), records);
        self
    }
}

#[async_trait]
impl QuestionSource for MemorySource {
    async fn load(&self, path: &Path) -> Result<Vec<QuestionRecord>, LoadError> {
        self.banks
            .get(path)
            .cloned()
            .ok_or_else(|| LoadError::Fetch {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such bank"),
            })
    }
}

fn catalog(files: &[&str]) -> Catalog {
    let mut catalog = Catalog::default();
    for file in files {
        catalog.add_module(ModuleConfig::from_path(PathBuf::from(file)));
    }
    catalog
}

#[tokio::test]
async fn module_with_35_questions_end_to_end() {
    let source = MemorySource::default().with_bank("md1.csv", "Q", 35);
    let mut app = App::new(catalog(&["md1.csv"]));

    let request = app.activate_home().expect("module load requested");
    app.finish_load(request.execute(&source).await);

    assert_eq!(app.state, AppState::Parts);
    let parts = &app.loaded_module().unwrap().parts;
    assert_eq!(parts.iter().map(|p| p.len()).collect::<Vec<_>>(), vec![30, 5]);

    app.select_next();
    app.start_selected_part();
    assert_eq!(app.state, AppState::Quiz);

    let session = app.session().unwrap();
    assert_eq!(session.len(), 5);
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.current().prompt, "Q 31");

    assert_eq!(app.answer(OptionLabel::A), Some(AnswerResult::Wrong));
    assert_eq!(app.session().unwrap().result_for(0), Outcome::Wrong);
    assert_eq!(app.answer(OptionLabel::D), Some(AnswerResult::Correct));
    assert_eq!(app.session().unwrap().result_for(0), Outcome::Correct);

    for expected in 1..5 {
        app.next_question();
        assert_eq!(app.session().unwrap().current_index(), expected);
    }
    app.next_question();
    assert_eq!(app.session().unwrap().current_index(), 4);
    assert_eq!(app.session().unwrap().result_for(0), Outcome::Correct);
}

#[tokio::test]
async fn custom_test_samples_unique_questions() {
    let source = MemorySource::default()
        .with_bank("a.csv", "A", 120)
        .with_bank("b.csv", "B", 80);
    let request =
        CustomTestRequest::new(vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")], 50).unwrap();

    let questions = assemble_custom_test(&source, &request).await.unwrap();
    assert_eq!(questions.len(), 50);

    let prompts: HashSet<_> = questions.iter().map(|q| q.prompt.as_str()).collect();
    assert_eq!(prompts.len(), 50);
    assert!(prompts
        .iter()
        .all(|p| p.starts_with("A ") || p.starts_with("B ")));
}

#[tokio::test]
async fn custom_test_larger_than_pool_uses_everything() {
    let source = MemorySource::default()
        .with_bank("a.csv", "A", 10)
        .with_bank("b.csv", "B", 5);
    let request =
        CustomTestRequest::new(vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")], 500).unwrap();

    let questions = assemble_custom_test(&source, &request).await.unwrap();
    assert_eq!(questions.len(), 15);
}

#[tokio::test]
async fn one_failing_source_aborts_custom_test() {
    let source = MemorySource::default().with_bank("a.csv", "A", 10);
    let request = CustomTestRequest::new(
        vec![PathBuf::from("a.csv"), PathBuf::from("missing.csv")],
        5,
    )
    .unwrap();

    let err = assemble_custom_test(&source, &request).await.unwrap_err();
    assert!(matches!(err, QuizError::Load(LoadError::Fetch { .. })));
}

#[tokio::test]
async fn failed_custom_test_leaves_setup_untouched() {
    let source = MemorySource::default().with_bank("a.csv", "A", 10);
    let mut app = App::new(catalog(&["a.csv", "missing.csv"]));
    app.open_test_setup();
    app.toggle_selected_module();
    app.select_next();
    app.toggle_selected_module();
    app.count_input_push('3');

    let request = app.start_custom_test().expect("load requested");
    assert!(matches!(request, LoadRequest::CustomTest(_)));
    let outcome = request.execute(&source).await;
    assert!(matches!(outcome, LoadOutcome::CustomTest(Err(_))));
    app.finish_load(outcome);

    assert_eq!(app.state, AppState::TestSetup);
    assert!(app.session().is_none());
    assert!(app.notice().is_some());
    assert!(!app.is_loading());
}
