pub mod loaders;
pub mod question;

pub use loaders::{load_all_sources, load_batch, load_source, SourceText};
pub use question::{Choices, QuestionBatch, QuestionRecord};
