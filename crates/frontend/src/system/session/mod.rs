//! Client identity
//!
//! No authentication exists; a random id created on first visit tags the
//! browser profile. It is passed down explicitly through Leptos context.

pub mod context;

pub use context::{use_session, SessionContext};
