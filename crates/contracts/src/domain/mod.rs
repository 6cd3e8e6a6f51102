pub mod a001_chat_message;
pub mod a002_context_file;
