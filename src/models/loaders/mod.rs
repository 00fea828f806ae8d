pub mod batch_loader;
pub mod source_loader;

pub use batch_loader::load_batch;
pub use source_loader::{load_all_sources, load_source, SourceText};
