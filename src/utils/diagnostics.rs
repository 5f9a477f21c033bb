#[cfg(test)]
use std::sync::{Arc, Mutex};

/// Leveled log sink handed to the uploader instead of a global logger.
pub trait Diagnostics: Send + Sync {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

#[cfg(test)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Error,
}

/// Keeps every entry in memory.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct RecordingDiagnostics {
    entries: Arc<Mutex<Vec<(Level, String)>>>,
}

#[cfg(test)]
impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn at(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.push((level, message.to_string()));
    }
}

#[cfg(test)]
impl Diagnostics for RecordingDiagnostics {
    fn debug(&self, message: &str) {
        self.push(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }

    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }
}
