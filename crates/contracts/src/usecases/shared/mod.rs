//! Types common to every backend call.

pub mod payload;

pub use payload::BackendPayload;
