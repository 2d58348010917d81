use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

use eframe::egui::{self, RichText};

use survey_words::pipeline::{self, RunRequest};

enum WorkerMessage {
    Progress(String),
    Finished(String),
}

/// Picker state plus the latest worker status. The pipeline itself runs on
/// one background thread and only strings cross back over the channel.
#[derive(Default)]
pub struct DesktopApp {
    input_file: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    file_label: String,
    folder_label: String,
    status: String,
    running: bool,
    run_rx: Option<Receiver<WorkerMessage>>,
}

impl DesktopApp {
    fn pick_input_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Excel files", &["xlsx"])
            .pick_file()
        {
            self.file_label = format!("Selected <<{}>>.", file_name(&path));
            self.input_file = Some(path);
        }
    }

    fn pick_output_folder(&mut self) {
        if let Some(path) = rfd::FileDialog::new().pick_folder() {
            self.folder_label = format!("Selected <<{}>>.", file_name(&path));
            self.output_dir = Some(path);
        }
    }

    fn run_extraction(&mut self) {
        let (Some(input_file), Some(output_dir)) = (&self.input_file, &self.output_dir) else {
            self.status = "❌ Please choose an Excel file and an output folder before running extraction.".to_string();
            return;
        };

        let request = RunRequest {
            input_file: input_file.clone(),
            output_dir: output_dir.clone(),
            model_dir: None,
        };

        let (tx, rx) = mpsc::channel();
        self.run_rx = Some(rx);
        self.running = true;
        self.status = "🔄 Starting extraction.".to_string();

        std::thread::spawn(move || {
            let progress_tx = tx.clone();
            let status = pipeline::run_to_status(&request, |message| {
                let _ = progress_tx.send(WorkerMessage::Progress(message.to_string()));
            });
            let _ = tx.send(WorkerMessage::Finished(status));
        });
    }

    fn poll_worker(&mut self) {
        let Some(rx) = &self.run_rx else {
            return;
        };
        while let Ok(message) = rx.try_recv() {
            match message {
                WorkerMessage::Progress(text) => self.status = text,
                WorkerMessage::Finished(text) => {
                    self.status = text;
                    self.running = false;
                    self.run_rx = None;
                    return;
                }
            }
        }
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.running {
            ctx.request_repaint();
        }
        self.poll_worker();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Survey word extraction");
            ui.add_space(8.0);

            if ui.button("Select Excel file…").clicked() {
                self.pick_input_file();
            }
            if !self.file_label.is_empty() {
                ui.label(&self.file_label);
            }
            ui.add_space(4.0);

            if ui.button("Select output folder…").clicked() {
                self.pick_output_folder();
            }
            if !self.folder_label.is_empty() {
                ui.label(&self.folder_label);
            }
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!self.running, egui::Button::new("Extract words"))
                    .clicked()
                {
                    self.run_extraction();
                }
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.add_space(12.0);
            if !self.status.is_empty() {
                ui.label(RichText::new(&self.status).strong());
            }
        });
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
