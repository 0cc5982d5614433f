//! Toast notification system for user feedback.

use eframe::egui;
use std::time::Instant;

use crate::app::BlockScopeApp;
use crate::state::{Toast, ToastType};

fn rgb(color: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(color[0], color[1], color[2])
}

impl BlockScopeApp {
    /// Queue a toast, replacing any message still on screen
    pub fn show_toast(&mut self, message: &str, kind: ToastType) {
        self.toast = Some(Toast::new(message, kind));
    }

    /// Draw the current toast in the bottom right corner and drop it once expired
    pub fn render_toast(&mut self, ctx: &egui::Context) {
        let Some(toast) = &self.toast else {
            return;
        };
        let Some(remaining) = toast.remaining(Instant::now()) else {
            self.toast = None;
            return;
        };

        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-20.0, -20.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(rgb(toast.kind.color()))
                    .corner_radius(6)
                    .inner_margin(egui::Margin::symmetric(14, 10))
                    .show(ui, |ui| {
                        ui.set_max_width(400.0);
                        ui.label(
                            egui::RichText::new(toast.message.as_str())
                                .color(rgb(toast.kind.text_color())),
                        );
                    });
            });

        ctx.request_repaint_after(remaining);
    }
}
