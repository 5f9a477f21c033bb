mod client;
mod error;
mod types;

pub use client::{CsvUploader, ReqwestTransport};
pub use error::{FailureKind, UploadError};
pub use types::{SelectedFile, UploadResult};

#[cfg(test)]
pub use client::ScriptedTransport;
#[cfg(test)]
pub use types::RawResponse;
