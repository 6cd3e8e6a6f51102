pub mod aggregate;

pub use aggregate::{ContextFile, ProcessingStatus};
