mod app;
mod upload;
mod utils;

use app::UploadWidget;
use eframe::CreationContext;
use std::sync::Arc;
use upload::{CsvUploader, ReqwestTransport};
use utils::config::UploaderConfig;
use utils::diagnostics::TracingDiagnostics;
use utils::logging::init_logging;

fn main() -> Result<(), eframe::Error> {
    init_logging();

    let config = UploaderConfig::from_env();
    tracing::info!(base_url = %config.base_url, "Starting CSV uploader");

    let uploader = CsvUploader::new(
        config,
        Arc::new(ReqwestTransport::new()),
        Arc::new(TracingDiagnostics),
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([480.0, 420.0])
            .with_min_inner_size([360.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "CSV Uploader",
        options,
        Box::new(move |_cc: &CreationContext| Box::new(UploadWidget::new(uploader))),
    )
}
