//! Chat Session (MVVM Standard)
//!
//! Structure:
//! - state.rs: pure session controller and its transitions
//! - api.rs: backend endpoints
//! - poller.rs: ingestion and generation status loops
//! - ui/: view model and components

pub mod api;
pub mod poller;
pub mod state;
pub mod ui;
