mod part;
mod question;

pub use part::Part;
pub use question::{OptionLabel, QuestionRecord};

/// Screen currently shown to the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// Module list plus the custom test entry.
    #[default]
    Modules,
    /// Parts of the loaded module.
    Parts,
    /// Module checkboxes and question count for a custom test.
    TestSetup,
    /// A quiz session is running.
    Quiz,
}
