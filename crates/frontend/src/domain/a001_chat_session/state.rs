//! Chat session controller
//!
//! Pure transitions over the conversation state. Nothing here touches the
//! network or timers: each operation returns what the caller has to do next
//! (send a request, start or stop a poll loop), which keeps every rule
//! testable natively.
//!
//! Poll loops hold a lease. `file_epoch` changes whenever the context file
//! changes and `question_seq` whenever a question is sent, so a loop whose
//! lease no longer matches stops before its next request and a late response
//! for it is discarded. A generation lease only becomes pollable once the
//! backend accepted its question; until then the status endpoint still
//! reports the previous answer.

use crate::shared::api_error::ApiError;
use crate::shared::notifications::Notifications;
use contracts::domain::a001_chat_message::ChatMessage;
use contracts::domain::a002_context_file::{ContextFile, ProcessingStatus};
use contracts::usecases::u501_ask_question::AskQuestionRequest;
use contracts::usecases::u502_list_files::FileListResponse;
use contracts::usecases::u503_file_status::GenerationStatusResponse;

pub const GREETING: &str = "Hello! How can I help you today?";
pub const FILE_SELECT_PROMPT: &str = "It looks like you've uploaded more than one file. Which file would you like me to generate responses from?";

pub const MSG_NO_FILE: &str = "Please upload a file first.";
pub const MSG_STILL_PROCESSING: &str = "Your file is still processing. Please wait.";
pub const MSG_FILE_PROCESSED: &str = "Your file has been processed!";
pub const MSG_ASK_FAILED: &str = "Question submission failed";
pub const MSG_FETCH_FAILED: &str = "Error fetching response. Please try again.";

/// Color of the file badge in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadIndicator {
    #[default]
    Idle,
    Uploading,
    Uploaded,
    Failed,
}

impl UploadIndicator {
    pub fn color(&self) -> &'static str {
        match self {
            UploadIndicator::Idle | UploadIndicator::Uploading => "#FFAA33",
            UploadIndicator::Uploaded => "#0FA958",
            UploadIndicator::Failed => "#E5484D",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestionLease {
    file_epoch: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationLease {
    file_epoch: u64,
    question_seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStep {
    Continue,
    Stop,
}

/// Why a question was not sent. No request is issued for any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    NoContextFile,
    StillProcessing,
    /// Another question has not been answered yet.
    AwaitingReply,
    EmptyQuestion,
}

impl SubmitRejection {
    pub fn clears_input(&self) -> bool {
        matches!(self, SubmitRejection::NoContextFile)
    }
}

/// An accepted question: the request to send and the lease of its generation poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub request: AskQuestionRequest,
    pub lease: GenerationLease,
}

#[derive(Debug, Clone)]
pub struct ChatSessionState {
    messages: Vec<ChatMessage>,
    context_file: Option<ContextFile>,
    uploaded_file: Option<String>,
    upload: UploadIndicator,
    ingestion: ProcessingStatus,
    generation: ProcessingStatus,
    file_epoch: u64,
    question_seq: u64,
    awaiting_reply: bool,
    question_accepted: bool,
    waiting: bool,
    available_files: Vec<String>,
    show_file_select: bool,
    ingestion_poll_failing: bool,
    generation_poll_failing: bool,
    notifications: Notifications,
}

impl Default for ChatSessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSessionState {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::bot(GREETING)],
            context_file: None,
            uploaded_file: None,
            upload: UploadIndicator::Idle,
            ingestion: ProcessingStatus::Processing,
            generation: ProcessingStatus::Processing,
            file_epoch: 0,
            question_seq: 0,
            awaiting_reply: false,
            question_accepted: false,
            waiting: false,
            available_files: Vec::new(),
            show_file_select: false,
            ingestion_poll_failing: false,
            generation_poll_failing: false,
            notifications: Notifications::default(),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn context_file(&self) -> Option<&ContextFile> {
        self.context_file.as_ref()
    }

    pub fn uploaded_file(&self) -> Option<&str> {
        self.uploaded_file.as_deref()
    }

    pub fn upload_indicator(&self) -> UploadIndicator {
        self.upload
    }

    pub fn ingestion_status(&self) -> ProcessingStatus {
        self.ingestion
    }

    pub fn generation_status(&self) -> ProcessingStatus {
        self.generation
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    pub fn show_file_select(&self) -> bool {
        self.show_file_select
    }

    pub fn available_files(&self) -> &[String] {
        &self.available_files
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    /// The uploaded file name shimmers while its ingestion is running.
    pub fn file_name_shimmers(&self) -> bool {
        self.upload == UploadIndicator::Uploaded && self.ingestion == ProcessingStatus::Processing
    }

    pub fn dismiss_notification(&mut self, id: u64) {
        self.notifications.dismiss(id);
    }

    // ---- questions ----

    pub fn submit_question(&mut self, text: &str) -> Result<Submission, SubmitRejection> {
        if self.context_file.is_none() {
            self.notifications.error(MSG_NO_FILE);
            return Err(SubmitRejection::NoContextFile);
        }
        if self.ingestion == ProcessingStatus::Processing {
            self.notifications.warning(MSG_STILL_PROCESSING);
            return Err(SubmitRejection::StillProcessing);
        }
        if self.awaiting_reply {
            log::debug!("question ignored: previous answer still pending");
            return Err(SubmitRejection::AwaitingReply);
        }
        let question = text.trim();
        if question.is_empty() {
            return Err(SubmitRejection::EmptyQuestion);
        }

        self.messages.push(ChatMessage::user(question));
        self.question_seq += 1;
        self.generation = ProcessingStatus::Processing;
        self.generation_poll_failing = false;
        self.awaiting_reply = true;
        self.question_accepted = false;
        self.waiting = true;

        Ok(Submission {
            request: AskQuestionRequest::new(question),
            lease: GenerationLease {
                file_epoch: self.file_epoch,
                question_seq: self.question_seq,
            },
        })
    }

    /// The backend took the question. Returns true when the caller should
    /// start the generation poll for `lease`.
    pub fn question_accepted(&mut self, lease: GenerationLease) -> bool {
        if !self.is_current_question(lease) || !self.awaiting_reply {
            log::debug!("acceptance of a superseded question ignored");
            return false;
        }
        self.question_accepted = true;
        true
    }

    /// The question request failed; the user message stays, the input is released.
    pub fn ask_failed(&mut self, lease: GenerationLease, error: &ApiError) {
        let text = match error {
            ApiError::Backend(message) if !message.is_empty() => message.clone(),
            ApiError::Backend(_) | ApiError::Status(_) => MSG_ASK_FAILED.to_string(),
            ApiError::Network(_) | ApiError::Decode(_) => MSG_FETCH_FAILED.to_string(),
        };
        log::warn!("ask_question failed: {}", error);
        self.notifications.error(text);

        if self.is_current_question(lease) {
            self.awaiting_reply = false;
            self.waiting = false;
        }
    }

    // ---- context file ----

    /// Make `name` the context file; every lease of the previous file dies here.
    pub fn select_context_file(&mut self, name: impl Into<String>) -> IngestionLease {
        let file = ContextFile::new(name);
        log::info!("context file selected: {}", file);

        self.context_file = Some(file);
        self.file_epoch += 1;
        self.ingestion = ProcessingStatus::Processing;
        self.generation = ProcessingStatus::Processing;
        self.ingestion_poll_failing = false;
        self.generation_poll_failing = false;
        self.awaiting_reply = false;
        self.question_accepted = false;
        self.show_file_select = false;
        self.waiting = true;

        IngestionLease {
            file_epoch: self.file_epoch,
        }
    }

    pub fn upload_started(&mut self, name: impl Into<String>) {
        self.uploaded_file = Some(name.into());
        self.upload = UploadIndicator::Uploading;
    }

    pub fn upload_succeeded(&mut self, name: impl Into<String>) -> IngestionLease {
        let name = name.into();
        self.uploaded_file = Some(name.clone());
        self.upload = UploadIndicator::Uploaded;
        self.select_context_file(name)
    }

    pub fn upload_failed(&mut self, error: &ApiError) {
        log::warn!("upload failed: {}", error);
        self.upload = UploadIndicator::Failed;
        self.notifications.error(format!("Upload failed: {}", error));
    }

    pub fn apply_file_list(&mut self, listing: FileListResponse) {
        log::debug!("backend lists {} file(s)", listing.files.len());
        if listing.needs_selection() {
            self.available_files = listing.files;
            self.show_file_select = true;
        }
    }

    pub fn file_list_failed(&mut self, error: &ApiError) {
        log::warn!("file listing failed: {}", error);
        self.notifications.error(error.to_string());
    }

    // ---- ingestion poll ----

    pub fn ingestion_lease(&self) -> Option<IngestionLease> {
        self.context_file.as_ref().map(|_| IngestionLease {
            file_epoch: self.file_epoch,
        })
    }

    /// File to poll for, or `None` when the loop must stop.
    pub fn ingestion_target(&self, lease: IngestionLease) -> Option<String> {
        if !self.is_ingestion_live(lease) {
            return None;
        }
        self.context_file.as_ref().map(|f| f.name.clone())
    }

    pub fn apply_ingestion_status(
        &mut self,
        lease: IngestionLease,
        status: ProcessingStatus,
    ) -> PollStep {
        if !self.is_ingestion_live(lease) {
            log::debug!("stale ingestion status dropped");
            return PollStep::Stop;
        }
        self.ingestion_poll_failing = false;
        self.ingestion = status;

        match status {
            ProcessingStatus::Processing => PollStep::Continue,
            ProcessingStatus::Completed => {
                self.notifications.success(MSG_FILE_PROCESSED);
                if !self.awaiting_reply {
                    self.waiting = false;
                }
                PollStep::Stop
            }
        }
    }

    /// A failing poll keeps its period; only the first failure in a row is shown.
    pub fn ingestion_poll_failed(&mut self, lease: IngestionLease, error: &ApiError) -> PollStep {
        if !self.is_ingestion_live(lease) {
            return PollStep::Stop;
        }
        log::warn!("ingestion status poll failed: {}", error);
        if !self.ingestion_poll_failing {
            self.ingestion_poll_failing = true;
            self.notifications
                .error(format!("Could not check file status: {}", error));
        }
        PollStep::Continue
    }

    // ---- generation poll ----

    pub fn generation_target(&self, lease: GenerationLease) -> Option<String> {
        if !self.is_generation_live(lease) {
            return None;
        }
        self.context_file.as_ref().map(|f| f.name.clone())
    }

    pub fn apply_generation_status(
        &mut self,
        lease: GenerationLease,
        body: &GenerationStatusResponse,
    ) -> PollStep {
        if !self.is_generation_live(lease) {
            log::debug!("stale generation status dropped");
            return PollStep::Stop;
        }
        self.generation_poll_failing = false;

        match body.answer() {
            None => PollStep::Continue,
            Some(answer) => {
                self.messages.push(ChatMessage::bot(answer));
                self.generation = ProcessingStatus::Completed;
                self.awaiting_reply = false;
                self.waiting = false;
                PollStep::Stop
            }
        }
    }

    pub fn generation_poll_failed(
        &mut self,
        lease: GenerationLease,
        error: &ApiError,
    ) -> PollStep {
        if !self.is_generation_live(lease) {
            return PollStep::Stop;
        }
        log::warn!("generation status poll failed: {}", error);
        if !self.generation_poll_failing {
            self.generation_poll_failing = true;
            self.notifications
                .error(format!("Could not check answer status: {}", error));
        }
        PollStep::Continue
    }

    fn is_ingestion_live(&self, lease: IngestionLease) -> bool {
        self.context_file.is_some()
            && lease.file_epoch == self.file_epoch
            && self.ingestion == ProcessingStatus::Processing
    }

    fn is_current_question(&self, lease: GenerationLease) -> bool {
        lease.file_epoch == self.file_epoch && lease.question_seq == self.question_seq
    }

    fn is_generation_live(&self, lease: GenerationLease) -> bool {
        self.context_file.is_some()
            && self.is_current_question(lease)
            && self.awaiting_reply
            && self.question_accepted
            && self.generation == ProcessingStatus::Processing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notifications::NotificationLevel;
    use contracts::domain::a001_chat_message::ChatAuthor;

    fn completed(answer: &str) -> GenerationStatusResponse {
        GenerationStatusResponse {
            status: ProcessingStatus::Completed,
            response: Some(answer.to_string()),
        }
    }

    fn listing(files: &[&str]) -> FileListResponse {
        FileListResponse {
            files: files.iter().map(|f| f.to_string()).collect(),
        }
    }

    fn processing() -> GenerationStatusResponse {
        GenerationStatusResponse {
            status: ProcessingStatus::Processing,
            response: None,
        }
    }

    /// Session with an ingested context file.
    fn ready(name: &str) -> ChatSessionState {
        let mut state = ChatSessionState::new();
        let lease = state.upload_succeeded(name);
        assert_eq!(
            state.apply_ingestion_status(lease, ProcessingStatus::Completed),
            PollStep::Stop
        );
        state
    }

    #[test]
    fn test_initial_chat_has_one_greeting() {
        let state = ChatSessionState::new();
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.messages()[0].author(), ChatAuthor::Bot);
        assert_eq!(state.messages()[0].content(), GREETING);
        assert!(state.notifications().is_empty());
    }

    #[test]
    fn test_submit_without_file() {
        let mut state = ChatSessionState::new();
        let result = state.submit_question("What is this document about?");

        assert_eq!(result, Err(SubmitRejection::NoContextFile));
        assert!(result.unwrap_err().clears_input());
        assert_eq!(state.messages().len(), 1);
        let toast = state.notifications().last().unwrap();
        assert_eq!(toast.level, NotificationLevel::Error);
        assert_eq!(toast.text, MSG_NO_FILE);
    }

    #[test]
    fn test_submit_while_processing() {
        let mut state = ChatSessionState::new();
        state.select_context_file("report.pdf");

        let result = state.submit_question("What is this document about?");

        assert_eq!(result, Err(SubmitRejection::StillProcessing));
        assert!(!result.unwrap_err().clears_input());
        assert_eq!(state.messages().len(), 1);
        let toast = state.notifications().last().unwrap();
        assert_eq!(toast.level, NotificationLevel::Warning);
        assert_eq!(toast.text, MSG_STILL_PROCESSING);
    }

    #[test]
    fn test_blank_question_is_ignored() {
        let mut state = ready("report.pdf");
        let toasts = state.notifications().len();
        assert_eq!(
            state.submit_question("   "),
            Err(SubmitRejection::EmptyQuestion)
        );
        assert_eq!(state.messages().len(), 1);
        assert_eq!(state.notifications().len(), toasts);
    }

    #[test]
    fn test_question_then_answer() {
        let mut state = ready("report.pdf");

        let submission = state.submit_question("What is this document about?").unwrap();
        assert_eq!(submission.request.question, "What is this document about?");
        assert_eq!(state.messages().len(), 2);
        assert_eq!(state.messages()[1].author(), ChatAuthor::User);
        assert!(state.is_waiting());
        assert!(state.is_awaiting_reply());
        assert_eq!(state.generation_status(), ProcessingStatus::Processing);

        let lease = submission.lease;
        assert!(state.question_accepted(lease));
        assert_eq!(
            state.generation_target(lease),
            Some("report.pdf".to_string())
        );
        assert_eq!(
            state.apply_generation_status(lease, &processing()),
            PollStep::Continue
        );
        assert_eq!(state.messages().len(), 2);

        assert_eq!(
            state.apply_generation_status(lease, &completed("A quarterly report.")),
            PollStep::Stop
        );
        assert_eq!(state.messages().len(), 3);
        assert_eq!(state.messages()[2].author(), ChatAuthor::Bot);
        assert_eq!(state.messages()[2].content(), "A quarterly report.");
        assert!(!state.is_waiting());
        assert_eq!(state.generation_status(), ProcessingStatus::Completed);

        // the loop is done; a duplicate completed body appends nothing
        assert_eq!(state.generation_target(lease), None);
        assert_eq!(
            state.apply_generation_status(lease, &completed("again")),
            PollStep::Stop
        );
        assert_eq!(state.messages().len(), 3);
    }

    #[test]
    fn test_one_question_at_a_time() {
        let mut state = ready("report.pdf");
        let first = state.submit_question("first?").unwrap();

        assert_eq!(
            state.submit_question("second?"),
            Err(SubmitRejection::AwaitingReply)
        );
        assert_eq!(state.messages().len(), 2);

        assert!(state.question_accepted(first.lease));
        state.apply_generation_status(first.lease, &completed("first answer"));
        let second = state.submit_question("second?").unwrap();
        assert_ne!(first.lease, second.lease);

        // the first loop cannot feed the second question
        assert_eq!(state.generation_target(first.lease), None);
        assert_eq!(
            state.apply_generation_status(first.lease, &completed("late")),
            PollStep::Stop
        );
        assert_eq!(state.messages().len(), 4);
    }

    #[test]
    fn test_answer_poll_waits_for_acceptance() {
        let mut state = ready("report.pdf");
        let first = state.submit_question("first?").unwrap();
        assert!(state.question_accepted(first.lease));
        state.apply_generation_status(first.lease, &completed("first answer"));

        let second = state.submit_question("second?").unwrap();

        // the backend has not seen the second question yet
        assert_eq!(state.generation_target(second.lease), None);
        assert_eq!(
            state.apply_generation_status(second.lease, &completed("first answer")),
            PollStep::Stop
        );
        assert_eq!(state.messages().len(), 4);
        assert!(state.is_awaiting_reply());

        assert!(state.question_accepted(second.lease));
        assert_eq!(
            state.generation_target(second.lease),
            Some("report.pdf".to_string())
        );
        assert_eq!(
            state.apply_generation_status(second.lease, &completed("second answer")),
            PollStep::Stop
        );
        assert_eq!(state.messages().len(), 5);
        assert_eq!(state.messages()[4].content(), "second answer");
    }

    #[test]
    fn test_acceptance_after_file_change_is_ignored() {
        let mut state = ready("a.pdf");
        let submission = state.submit_question("about a?").unwrap();
        state.select_context_file("b.pdf");

        assert!(!state.question_accepted(submission.lease));
        assert_eq!(state.generation_target(submission.lease), None);
    }

    #[test]
    fn test_ask_failure_releases_input() {
        let mut state = ready("report.pdf");
        let submission = state.submit_question("hello?").unwrap();

        state.ask_failed(submission.lease, &ApiError::Backend("Model offline".into()));

        assert_eq!(state.notifications().last().unwrap().text, "Model offline");
        assert!(!state.is_awaiting_reply());
        assert!(!state.is_waiting());
        assert_eq!(state.messages().len(), 2);
        assert_eq!(state.generation_target(submission.lease), None);
    }

    #[test]
    fn test_ask_failure_messages() {
        let mut state = ready("report.pdf");

        let s = state.submit_question("a?").unwrap();
        state.ask_failed(s.lease, &ApiError::Status(500));
        assert_eq!(state.notifications().last().unwrap().text, MSG_ASK_FAILED);

        let s = state.submit_question("b?").unwrap();
        state.ask_failed(s.lease, &ApiError::Network("TypeError".into()));
        assert_eq!(state.notifications().last().unwrap().text, MSG_FETCH_FAILED);
    }

    #[test]
    fn test_select_new_file_resets_and_invalidates() {
        let mut state = ready("a.pdf");
        let old_ingestion = state.ingestion_lease().unwrap();
        let submission = state.submit_question("about a?").unwrap();

        let new_lease = state.select_context_file("b.pdf");

        assert_eq!(state.context_file(), Some(&ContextFile::new("b.pdf")));
        assert_eq!(state.ingestion_status(), ProcessingStatus::Processing);
        assert_eq!(state.generation_status(), ProcessingStatus::Processing);
        assert!(state.is_waiting());
        assert!(!state.is_awaiting_reply());

        assert_eq!(state.generation_target(submission.lease), None);
        assert_eq!(state.ingestion_target(old_ingestion), None);
        assert_eq!(state.ingestion_target(new_lease), Some("b.pdf".to_string()));

        // responses still in flight for a.pdf are dropped
        assert_eq!(
            state.apply_generation_status(submission.lease, &completed("about a")),
            PollStep::Stop
        );
        assert_eq!(
            state.apply_ingestion_status(old_ingestion, ProcessingStatus::Completed),
            PollStep::Stop
        );
        assert_eq!(state.messages().len(), 2);
        assert_eq!(state.ingestion_status(), ProcessingStatus::Processing);
    }

    #[test]
    fn test_ingestion_poll_stops_on_completed() {
        let mut state = ChatSessionState::new();
        let lease = state.select_context_file("report.pdf");

        assert_eq!(
            state.apply_ingestion_status(lease, ProcessingStatus::Processing),
            PollStep::Continue
        );
        assert_eq!(
            state.apply_ingestion_status(lease, ProcessingStatus::Completed),
            PollStep::Stop
        );
        assert_eq!(state.ingestion_target(lease), None);
        assert!(!state.is_waiting());

        let toast = state.notifications().last().unwrap();
        assert_eq!(toast.level, NotificationLevel::Success);
        assert_eq!(toast.text, MSG_FILE_PROCESSED);
    }

    #[test]
    fn test_poll_failures_notify_once_per_run() {
        let mut state = ChatSessionState::new();
        let lease = state.select_context_file("report.pdf");
        let error = ApiError::Network("offline".into());

        assert_eq!(state.ingestion_poll_failed(lease, &error), PollStep::Continue);
        assert_eq!(state.ingestion_poll_failed(lease, &error), PollStep::Continue);
        assert_eq!(state.notifications().len(), 1);

        state.apply_ingestion_status(lease, ProcessingStatus::Processing);
        state.ingestion_poll_failed(lease, &error);
        assert_eq!(state.notifications().len(), 2);
    }

    #[test]
    fn test_generation_poll_failure_keeps_polling() {
        let mut state = ready("report.pdf");
        let submission = state.submit_question("q?").unwrap();
        assert!(state.question_accepted(submission.lease));
        let before = state.notifications().len();
        let error = ApiError::Status(502);

        assert_eq!(
            state.generation_poll_failed(submission.lease, &error),
            PollStep::Continue
        );
        assert_eq!(
            state.generation_poll_failed(submission.lease, &error),
            PollStep::Continue
        );
        assert_eq!(state.notifications().len(), before + 1);
        assert!(state.is_awaiting_reply());
    }

    #[test]
    fn test_file_list_prompt() {
        let mut state = ChatSessionState::new();
        state.apply_file_list(listing(&["a.pdf"]));
        assert!(!state.show_file_select());

        state.apply_file_list(listing(&["a.pdf", "b.pdf"]));
        assert!(state.show_file_select());
        assert_eq!(state.available_files().len(), 2);

        state.select_context_file("b.pdf");
        assert!(!state.show_file_select());
    }

    #[test]
    fn test_file_list_error() {
        let mut state = ChatSessionState::new();
        state.file_list_failed(&ApiError::Backend("No files uploaded".into()));
        assert!(!state.show_file_select());
        let toast = state.notifications().last().unwrap();
        assert_eq!(toast.level, NotificationLevel::Error);
        assert_eq!(toast.text, "No files uploaded");
    }

    #[test]
    fn test_upload_indicator() {
        let mut state = ChatSessionState::new();
        state.upload_started("report.pdf");
        assert_eq!(state.upload_indicator(), UploadIndicator::Uploading);
        assert_eq!(state.uploaded_file(), Some("report.pdf"));
        assert!(state.context_file().is_none());

        let lease = state.upload_succeeded("report.pdf");
        assert_eq!(state.upload_indicator().color(), "#0FA958");
        assert!(state.file_name_shimmers());

        state.apply_ingestion_status(lease, ProcessingStatus::Completed);
        assert!(!state.file_name_shimmers());

        state.upload_failed(&ApiError::Status(413));
        assert_eq!(state.upload_indicator(), UploadIndicator::Failed);
    }

    #[test]
    fn test_dismiss_notification() {
        let mut state = ChatSessionState::new();
        let _ = state.submit_question("x");
        let id = state.notifications().last().unwrap().id;
        state.dismiss_notification(id);
        assert!(state.notifications().is_empty());
    }
}
