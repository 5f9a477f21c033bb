use super::StatusMessage;
use super::UploadWidget;
use egui::{Color32, RichText};
use rfd::FileDialog;

const SUCCESS_COLOR: Color32 = Color32::from_rgb(0, 180, 0);
const ERROR_COLOR: Color32 = Color32::from_rgb(220, 50, 50);

impl UploadWidget {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.heading("Upload CSV");
                ui.add_space(5.0);
                ui.label(
                    RichText::new("Send a CSV file to the import service")
                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                );
            });

            ui.add_space(20.0);

            ui.group(|ui| {
                ui.horizontal(|ui| {
                    if ui.button("📄 Select CSV File").clicked() {
                        self.pick_file();
                    }
                    match self.selected_file() {
                        Some(file) => {
                            ui.label(format!("Selected: {} ({})", file.name, format_size(file.size())));
                        }
                        None => {
                            ui.label(
                                RichText::new("No file selected")
                                    .color(ui.visuals().text_color().gamma_multiply(0.7)),
                            );
                        }
                    }
                });
            });

            ui.add_space(20.0);

            ui.vertical_centered(|ui| {
                let button = egui::Button::new("📤 Upload").min_size(egui::vec2(200.0, 40.0));
                if ui.add(button).clicked() {
                    self.trigger_upload();
                }
            });

            if !self.status().is_empty() {
                ui.add_space(10.0);
                self.render_status(ui);
            }
        });
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let text = self.status_text();
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            match self.status() {
                StatusMessage::Success(_) => {
                    ui.colored_label(SUCCESS_COLOR, text);
                }
                StatusMessage::Failure(_) => {
                    ui.colored_label(ERROR_COLOR, text);
                }
                _ => {
                    ui.label(text);
                }
            }
        });
    }

    fn pick_file(&mut self) {
        // The filter is a hint to the dialog; any file the user picks is accepted.
        if let Some(path) = FileDialog::new()
            .add_filter("CSV", &["csv"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            self.select_path(&path);
        }
    }
}

fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", size, UNITS[unit])
}
