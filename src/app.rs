//! Main application state and eframe::App implementation.

use eframe::egui;

use crate::parsers::BlockLog;
use crate::settings::ViewerSettings;
use crate::state::{PlotConfig, Toast, ToastType};
use crate::summary::LogSummary;
use crate::ui::chart::ChartLayers;

/// Viewer state. The capture is parsed before the window opens and never
/// changes afterwards.
pub struct BlockScopeApp {
    /// Display name of the capture file
    pub(crate) source_name: String,
    pub(crate) config: PlotConfig,
    /// Pre-built chart layers, shared by the plot and PNG export
    pub(crate) layers: ChartLayers,
    pub(crate) summary: LogSummary,
    pub(crate) settings: ViewerSettings,
    /// Toast message for user feedback
    pub(crate) toast: Option<Toast>,
}

impl BlockScopeApp {
    pub fn new(
        source_name: impl Into<String>,
        log: &BlockLog,
        config: PlotConfig,
        settings: ViewerSettings,
    ) -> Self {
        let source_name = source_name.into();
        let layers = ChartLayers::build(log, &config);
        let summary = LogSummary::compute(log, &config);

        let mut app = Self {
            source_name,
            config,
            layers,
            summary,
            settings,
            toast: None,
        };

        if log.is_empty() {
            let message = format!("{} contains no sample blocks", app.source_name);
            app.show_toast(&message, ToastType::Info);
        }

        app
    }

    pub fn layers(&self) -> &ChartLayers {
        &self.layers
    }

    pub fn summary(&self) -> &LogSummary {
        &self.summary
    }

    /// Toast currently on screen, if any
    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }
}

impl eframe::App for BlockScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // White background, so the black zero line stays visible
        ctx.set_visuals(egui::Visuals::light());

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.render_menu_bar(ui);
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            self.render_status_panel(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_chart(ui);
        });

        self.render_toast(ctx);
    }
}

/// Open the viewer window and block until it is closed
pub fn run_viewer(
    source_name: &str,
    log: &BlockLog,
    config: PlotConfig,
    settings: ViewerSettings,
) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_min_inner_size([640.0, 400.0])
            .with_title(format!("BlockScope - {}", source_name))
            .with_app_id("BlockScope"),
        ..Default::default()
    };

    let app = BlockScopeApp::new(source_name, log, config, settings);

    eframe::run_native(
        "BlockScope",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
