//! Wire types shared between the chat client and its backend.

pub mod domain;
pub mod system;
pub mod usecases;
