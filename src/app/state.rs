use crate::upload::{FailureKind, SelectedFile, UploadError, UploadResult};
use std::sync::mpsc::{channel, Receiver, Sender};

pub const NO_FILE_MESSAGE: &str = "Please select a file first.";
pub const UPLOADING_MESSAGE: &str = "Uploading...";
pub const SUCCESS_BANNER: &str = "File uploaded successfully!";

/// What the widget currently tells the user. Always reflects the latest event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusMessage {
    #[default]
    Empty,
    NoFileSelected,
    Uploading,
    Success(UploadResult),
    Failure(FailureKind),
}

impl StatusMessage {
    pub fn text(&self) -> String {
        match self {
            StatusMessage::Empty => String::new(),
            StatusMessage::NoFileSelected => NO_FILE_MESSAGE.to_string(),
            StatusMessage::Uploading => UPLOADING_MESSAGE.to_string(),
            StatusMessage::Success(result) => success_text(result),
            StatusMessage::Failure(kind) => kind.message().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, StatusMessage::Empty)
    }
}

fn success_text(result: &UploadResult) -> String {
    let mut lines = vec![
        SUCCESS_BANNER.to_string(),
        format!("File: {}", result.filename),
        format!("Total rows: {}", result.total_rows),
        format!("Successful: {}", result.successful_rows),
    ];

    if result.duplicate_rows > 0 {
        lines.push(format!("Duplicates skipped: {}", result.duplicate_rows));
    }
    if result.failed_rows > 0 {
        lines.push(format!("Failed: {}", result.failed_rows));
    }

    lines.join("\n")
}

pub type UploadOutcome = Result<UploadResult, UploadError>;

pub struct UploadState {
    pub selected_file: Option<SelectedFile>,
    pub status: StatusMessage,
    // Shared by every attempt so overlapping uploads land in arrival order.
    pub outcome_sender: Sender<UploadOutcome>,
    pub outcome_receiver: Receiver<UploadOutcome>,
}

impl Default for UploadState {
    fn default() -> Self {
        let (outcome_sender, outcome_receiver) = channel();
        Self {
            selected_file: None,
            status: StatusMessage::Empty,
            outcome_sender,
            outcome_receiver,
        }
    }
}

impl UploadState {
    pub fn apply(&mut self, outcome: &UploadOutcome) {
        self.status = match outcome {
            Ok(result) => StatusMessage::Success(result.clone()),
            Err(err) => StatusMessage::Failure(err.kind()),
        };
    }
}
