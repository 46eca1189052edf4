pub mod engine;
pub mod localizer;
pub mod rewrite;

pub use crate::domain::model::{Language, LanguageRegistry, OutputRecord, PlannedOutput, RunSummary};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
