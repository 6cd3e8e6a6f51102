pub mod aggregate;

pub use aggregate::{ChatAuthor, ChatMessage};
