mod state;
mod ui;

use crate::upload::{CsvUploader, SelectedFile, UploadError};
use eframe::{egui, App};
use std::path::Path;
pub use state::StatusMessage;
use state::UploadState;

pub struct UploadWidget {
    uploader: CsvUploader,
    state: UploadState,
}

impl UploadWidget {
    pub fn new(uploader: CsvUploader) -> Self {
        Self {
            uploader,
            state: UploadState::default(),
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.state.selected_file.as_ref()
    }

    pub fn status(&self) -> &StatusMessage {
        &self.state.status
    }

    pub fn status_text(&self) -> String {
        self.state.status.text()
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        self.state.selected_file = Some(file);
    }

    pub fn select_path(&mut self, path: &Path) {
        match SelectedFile::from_path(path) {
            Ok(file) => self.select_file(file),
            Err(e) => self
                .uploader
                .diagnostics()
                .error(&format!("Failed to read {}: {}", path.display(), e)),
        }
    }

    /// Starts one upload attempt in the background. The outcome is picked up
    /// by `poll_outcomes`.
    pub fn trigger_upload(&mut self) {
        let Some(file) = self.state.selected_file.clone() else {
            self.state.status = StatusMessage::NoFileSelected;
            return;
        };

        self.state.status = StatusMessage::Uploading;

        let uploader = self.uploader.clone();
        let sender = self.state.outcome_sender.clone();

        std::thread::spawn(move || {
            let outcome = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt.block_on(uploader.upload(file)),
                Err(e) => Err(UploadError::Runtime(e.to_string())),
            };
            let _ = sender.send(outcome);
        });
    }

    /// Applies every finished attempt in arrival order. Returns true if the
    /// status changed.
    pub fn poll_outcomes(&mut self) -> bool {
        let mut had_updates = false;

        while let Ok(outcome) = self.state.outcome_receiver.try_recv() {
            had_updates = true;
            if let Err(err) = &outcome {
                self.uploader
                    .diagnostics()
                    .error(&format!("Error uploading file: {}", err));
            }
            self.state.apply(&outcome);
        }

        had_updates
    }
}

impl App for UploadWidget {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.poll_outcomes() {
            ctx.request_repaint();
        }
        if matches!(self.state.status, StatusMessage::Uploading) {
            // Keep polling while a request is in flight.
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
        self.render(ctx);
    }
}
