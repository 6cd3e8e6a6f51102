//! Multipart upload of the document to chat about.

/// Path of the upload endpoint, relative to the API base.
pub const ENDPOINT: &str = "/upload/";

/// Multipart field carrying the file.
pub const FIELD_NAME: &str = "file";
