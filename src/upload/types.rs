use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CSV_MIME: &str = "text/csv";
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// A local file held in memory until it is uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
            mime: mime.into(),
        }
    }

    /// Reads `path` into memory. The media type is guessed from the extension.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        Ok(Self {
            mime: mime_for(path).to_string(),
            name,
            bytes,
        })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => CSV_MIME,
        _ => FALLBACK_MIME,
    }
}

/// Row counts reported by the server for a processed file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UploadResult {
    pub filename: String,
    pub total_rows: u64,
    pub successful_rows: u64,
    pub duplicate_rows: u64,
    pub failed_rows: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: String,
    pub data: UploadResult,
}

/// A request that completed at the HTTP level, successful or not.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(mime_for(Path::new("data/rows.csv")), CSV_MIME);
        assert_eq!(mime_for(Path::new("ROWS.CSV")), CSV_MIME);
        assert_eq!(mime_for(Path::new("notes.txt")), FALLBACK_MIME);
        assert_eq!(mime_for(Path::new("Makefile")), FALLBACK_MIME);
    }

    #[test]
    fn test_from_path_reads_contents() {
        let path = std::env::temp_dir().join(format!("csv_uploader_{}.csv", std::process::id()));
        fs::write(&path, "name,email\nada,ada@example.com\n").unwrap();

        let file = SelectedFile::from_path(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(file.name.ends_with(".csv"));
        assert_eq!(file.mime, CSV_MIME);
        assert_eq!(file.bytes, b"name,email\nada,ada@example.com\n");
        assert_eq!(file.size(), 31);
    }

    #[test]
    fn test_response_requires_data() {
        let parsed: Result<UploadResponse, _> =
            serde_json::from_str(r#"{"message": "File processed successfully"}"#);
        assert!(parsed.is_err());

        let parsed: UploadResponse = serde_json::from_str(
            r#"{"message": "ok", "data": {"filename": "a.csv", "total_rows": 3,
                "successful_rows": 2, "duplicate_rows": 1, "failed_rows": 0}}"#,
        )
        .unwrap();
        assert_eq!(parsed.data.duplicate_rows, 1);
    }

    #[test]
    fn test_raw_response_success_range() {
        let ok = RawResponse { status: 201, body: String::new() };
        let bad = RawResponse { status: 400, body: String::new() };
        assert!(ok.is_success());
        assert!(!bad.is_success());
    }
}
