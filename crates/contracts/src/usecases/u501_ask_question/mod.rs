pub mod request;
pub mod response;

pub use request::AskQuestionRequest;
pub use response::AskQuestionAccepted;

/// Path of the question endpoint, relative to the API base.
pub const ENDPOINT: &str = "/ask_question/";
