mod app;

use app::DesktopApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([480.0, 280.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Survey Words",
        options,
        Box::new(|_cc| Box::new(DesktopApp::default())),
    )
}
