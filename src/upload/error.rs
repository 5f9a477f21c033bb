use thiserror::Error;

/// Body text used when the server rejects an upload without saying why.
pub const EMPTY_REJECTION: &str = "Upload failed";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The server answered with a non-success status.
    #[error("{0}")]
    Rejected(String),
    #[error("Failed to send request: {0}")]
    Transport(String),
    #[error("Failed to parse upload response: {0}")]
    MalformedResponse(String),
    #[error("Failed to start upload: {0}")]
    Runtime(String),
}

impl UploadError {
    pub fn rejected(body: &str) -> Self {
        if body.is_empty() {
            Self::Rejected(EMPTY_REJECTION.to_string())
        } else {
            Self::Rejected(body.to_string())
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Rejected(message) => FailureKind::from_rejection(message),
            _ => FailureKind::Unrecognized,
        }
    }
}

/// User-facing failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    MissingColumns,
    MalformedCsv,
    InvalidFileType,
    EmptyFile,
    Unexpected,
    Unrecognized,
}

// Order matters: the first matching substring wins.
const REJECTION_TABLE: [(&str, FailureKind); 4] = [
    ("Missing columns", FailureKind::MissingColumns),
    ("Malformed CSV", FailureKind::MalformedCsv),
    ("Invalid file type", FailureKind::InvalidFileType),
    ("Empty CSV file", FailureKind::EmptyFile),
];

impl FailureKind {
    pub fn from_rejection(message: &str) -> Self {
        REJECTION_TABLE
            .iter()
            .find(|(needle, _)| message.contains(needle))
            .map(|(_, kind)| *kind)
            .unwrap_or(FailureKind::Unexpected)
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingColumns => {
                "Error: The CSV file is missing required columns. Please check the file format."
            }
            Self::MalformedCsv => {
                "Error: The CSV file is malformed or corrupted. Please check the file."
            }
            Self::InvalidFileType => "Error: Please upload a valid CSV file.",
            Self::EmptyFile => "Error: The file is empty. Please upload a valid CSV file.",
            Self::Unexpected => {
                "Upload failed: An unexpected error occurred while processing the file."
            }
            Self::Unrecognized => "Error uploading file. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_map_to_table() {
        let cases = [
            ("Missing columns: email, phone", FailureKind::MissingColumns),
            ("Malformed CSV at line 4", FailureKind::MalformedCsv),
            ("Invalid file type. Only CSV files are allowed.", FailureKind::InvalidFileType),
            ("Empty CSV file", FailureKind::EmptyFile),
            ("Internal server error", FailureKind::Unexpected),
        ];

        for (body, expected) in cases {
            assert_eq!(UploadError::rejected(body).kind(), expected, "body: {body}");
        }
    }

    #[test]
    fn test_first_match_wins() {
        let body = "Empty CSV file; Missing columns: id";
        assert_eq!(FailureKind::from_rejection(body), FailureKind::MissingColumns);

        let body = "Invalid file type and Malformed CSV";
        assert_eq!(FailureKind::from_rejection(body), FailureKind::MalformedCsv);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(FailureKind::from_rejection("missing columns"), FailureKind::Unexpected);
    }

    #[test]
    fn test_empty_rejection_body() {
        let err = UploadError::rejected("");
        assert_eq!(err, UploadError::Rejected(EMPTY_REJECTION.to_string()));
        assert_eq!(
            err.kind().message(),
            "Upload failed: An unexpected error occurred while processing the file."
        );
    }

    #[test]
    fn test_unrecognized_errors() {
        let errors = [
            UploadError::Transport("connection refused".to_string()),
            UploadError::MalformedResponse("missing field `data`".to_string()),
            UploadError::Runtime("no threads".to_string()),
        ];

        for err in errors {
            assert_eq!(err.kind(), FailureKind::Unrecognized);
            assert_eq!(err.kind().message(), "Error uploading file. Please try again.");
        }
    }

    #[test]
    fn test_transport_text_is_not_classified() {
        let err = UploadError::Transport("Missing columns".to_string());
        assert_eq!(err.kind(), FailureKind::Unrecognized);
    }
}
