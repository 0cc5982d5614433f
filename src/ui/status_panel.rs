//! Bottom status panel with per-stream statistics.

use eframe::egui;
use strum::IntoEnumIterator;

use crate::app::BlockScopeApp;
use crate::parsers::Stream;

impl BlockScopeApp {
    pub fn render_status_panel(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(self.source_name.as_str()).strong());

            for stream in Stream::iter() {
                let summary = self.summary.get(stream);
                let color = self.config.series_color(stream);

                ui.separator();
                ui.label(
                    egui::RichText::new(stream.label())
                        .color(egui::Color32::from_rgb(color[0], color[1], color[2])),
                );
                ui.label(format!(
                    "{} samples, {} blocks, range {}",
                    summary.samples,
                    summary.blocks,
                    summary.range_text()
                ));
                if summary.clipped > 0 {
                    ui.colored_label(
                        egui::Color32::RED,
                        format!("{} clipped", summary.clipped),
                    );
                }
            }

            if self.summary.length_mismatch() {
                ui.separator();
                ui.colored_label(egui::Color32::from_rgb(200, 120, 0), "Length mismatch");
            }
        });
    }
}
