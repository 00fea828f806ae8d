pub mod batch_writer;
pub mod preview;
pub mod warn_writer;

pub use batch_writer::BatchWriter;
pub use preview::PreviewList;
pub use warn_writer::WarnWriter;
