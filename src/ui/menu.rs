//! Menu bar (File menu).

use eframe::egui;

use crate::app::BlockScopeApp;

impl BlockScopeApp {
    /// Render the application menu bar
    pub fn render_menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                ui.set_min_width(160.0);

                if ui.button("Export PNG\u{2026}").clicked() {
                    ui.close();
                    self.export_chart_png();
                }

                ui.separator();

                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }
}
