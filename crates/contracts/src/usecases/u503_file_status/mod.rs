pub mod generation;
pub mod ingestion;

pub use generation::GenerationStatusResponse;
pub use ingestion::IngestionStatus;
