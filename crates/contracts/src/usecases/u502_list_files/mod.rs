use serde::{Deserialize, Serialize};

/// Path of the file listing endpoint, relative to the API base.
pub const ENDPOINT: &str = "/all_files/";

/// Files the backend knows about, in upload order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileListResponse {
    pub files: Vec<String>,
}

impl FileListResponse {
    /// More than one file means the user must pick the context file.
    pub fn needs_selection(&self) -> bool {
        self.files.len() > 1
    }
}
