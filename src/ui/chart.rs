//! Chart layers and rendering.
//!
//! [`ChartLayers`] holds everything that ends up on the chart as plain data
//! so the same layers feed both the interactive plot and PNG export.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, VLine};
use strum::IntoEnumIterator;

use crate::app::BlockScopeApp;
use crate::parsers::{BlockLog, Stream};
use crate::state::PlotConfig;

/// One data series plotted against its own sample index
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesLayer {
    pub stream: Stream,
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub color: [u8; 3],
    pub width: f32,
}

/// Horizontal reference line drawn over a finite x span
#[derive(Clone, Debug, PartialEq)]
pub struct HorizontalLine {
    pub name: String,
    pub y: f64,
    pub x_start: f64,
    pub x_end: f64,
    pub color: [u8; 3],
    pub width: f32,
}

impl HorizontalLine {
    /// Zero-width span, happens when the output stream is empty
    pub fn is_degenerate(&self) -> bool {
        self.x_end <= self.x_start
    }
}

/// Vertical reference line spanning the full plot height
#[derive(Clone, Debug, PartialEq)]
pub struct VerticalLine {
    pub name: String,
    pub x: f64,
    pub color: [u8; 3],
    pub width: f32,
}

/// Data extent of all layers
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartBounds {
    fn include(&mut self, x: f64, y: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }

    fn include_x(&mut self, x: f64) {
        self.x_min = self.x_min.min(x);
        self.x_max = self.x_max.max(x);
    }

    fn include_y(&mut self, y: f64) {
        self.y_min = self.y_min.min(y);
        self.y_max = self.y_max.max(y);
    }
}

/// Everything drawn on the chart, in draw order: series first, then
/// horizontal and vertical reference lines on top
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayers {
    pub series: Vec<SeriesLayer>,
    pub horizontal: Vec<HorizontalLine>,
    pub vertical: Vec<VerticalLine>,
}

impl ChartLayers {
    pub fn build(log: &BlockLog, config: &PlotConfig) -> Self {
        let series = Stream::iter()
            .map(|stream| SeriesLayer {
                stream,
                name: stream.label().to_string(),
                points: index_points(log.get(stream)),
                color: config.series_color(stream),
                width: config.series_line_width,
            })
            .collect();

        // Horizontal guides span the output stream, like the capture's own x range
        let x_end = log.output.len() as f64;
        let clip = config.clip_level as f64;
        let horizontal = [
            ("Clip level", clip, config.clip_color),
            ("Clip level", -clip, config.clip_color),
            ("Zero", 0.0, config.zero_color),
        ]
        .into_iter()
        .map(|(name, y, color)| HorizontalLine {
            name: name.to_string(),
            y,
            x_start: 0.0,
            x_end,
            color,
            width: config.reference_line_width,
        })
        .collect();

        let vertical = config
            .block_boundaries()
            .map(|x| VerticalLine {
                name: "Block boundary".to_string(),
                x: x as f64,
                color: config.block_color,
                width: config.reference_line_width,
            })
            .collect();

        Self {
            series,
            horizontal,
            vertical,
        }
    }

    /// Extent of every series point and reference line
    pub fn bounds(&self) -> ChartBounds {
        let mut bounds = ChartBounds {
            x_min: f64::MAX,
            x_max: f64::MIN,
            y_min: f64::MAX,
            y_max: f64::MIN,
        };

        for layer in &self.series {
            for &[x, y] in &layer.points {
                bounds.include(x, y);
            }
        }
        for line in &self.horizontal {
            bounds.include(line.x_start, line.y);
            bounds.include_x(line.x_end);
        }
        for line in &self.vertical {
            bounds.include_x(line.x);
        }

        // Only reachable with a config that draws nothing at all
        if bounds.x_min > bounds.x_max {
            bounds.x_min = 0.0;
            bounds.x_max = 0.0;
        }
        if bounds.y_min > bounds.y_max {
            bounds.include_y(0.0);
        }

        bounds
    }
}

/// Pair every sample with its 0-based index
fn index_points(samples: &[i64]) -> Vec<[f64; 2]> {
    samples
        .iter()
        .enumerate()
        .map(|(i, &v)| [i as f64, v as f64])
        .collect()
}

fn to_color(rgb: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

impl BlockScopeApp {
    /// Render the overlaid series and reference lines
    pub fn render_chart(&self, ui: &mut egui::Ui) {
        let layers = &self.layers;

        let plot = Plot::new("block_chart")
            .legend(Legend::default())
            .x_axis_label("Sample")
            .y_axis_label("Value");

        plot.show(ui, |plot_ui| {
            for layer in &layers.series {
                let points: PlotPoints = layer.points.iter().copied().collect();
                plot_ui.line(
                    Line::new(layer.name.clone(), points)
                        .color(to_color(layer.color))
                        .width(layer.width),
                );
            }

            for line in &layers.horizontal {
                let points: PlotPoints = [[line.x_start, line.y], [line.x_end, line.y]]
                    .into_iter()
                    .collect();
                plot_ui.line(
                    Line::new(line.name.clone(), points)
                        .color(to_color(line.color))
                        .width(line.width),
                );
            }

            for line in &layers.vertical {
                plot_ui.vline(
                    VLine::new(line.name.clone(), line.x)
                        .color(to_color(line.color))
                        .width(line.width),
                );
            }
        });
    }
}
