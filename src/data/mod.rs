mod catalog;
mod loader;
mod source;
mod store;

pub use catalog::{Catalog, CatalogError, ModuleConfig, DEFAULT_PART_SIZE};
pub use loader::{parse_questions, parse_questions_str, ParseError};
pub use source::{CsvFileSource, LoadError, QuestionSource};
pub use store::RecordStore;
