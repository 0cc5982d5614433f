//! Chart export functionality (PNG).

use ::image::{ImageError, Rgba, RgbaImage};
use std::path::Path;
use thiserror::Error;

use crate::app::BlockScopeApp;
use crate::state::ToastType;
use crate::ui::chart::{ChartBounds, ChartLayers};

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const FRAME: Rgba<u8> = Rgba([200, 200, 200, 255]);

/// Pixel margins around the plotting area
const MARGIN_LEFT: u32 = 80;
const MARGIN_RIGHT: u32 = 40;
const MARGIN_TOP: u32 = 40;
const MARGIN_BOTTOM: u32 = 60;

/// Smallest image that still leaves a plotting area inside the margins
pub const MIN_EXPORT_SIZE: [u32; 2] = [
    MARGIN_LEFT + MARGIN_RIGHT + 16,
    MARGIN_TOP + MARGIN_BOTTOM + 16,
];

/// Errors that can occur while exporting the chart
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Export size {width}x{height} leaves no room for the plot area")]
    TooSmall { width: u32, height: u32 },

    #[error("Failed to write image: {0}")]
    Image(#[from] ImageError),
}

/// Maps chart coordinates onto image pixels
#[derive(Clone, Copy, Debug)]
pub struct PixelMap {
    bounds: ChartBounds,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl PixelMap {
    /// Fit `bounds` (plus 5% vertical headroom) into an image of the given size.
    /// Images smaller than the margins collapse the plot area to a line.
    pub fn new(bounds: ChartBounds, width: u32, height: u32) -> Self {
        let mut bounds = bounds;
        let y_pad = (bounds.y_max - bounds.y_min) * 0.05;
        bounds.y_min -= y_pad;
        bounds.y_max += y_pad;

        Self {
            bounds,
            left: MARGIN_LEFT as f64,
            right: width.saturating_sub(MARGIN_RIGHT).max(MARGIN_LEFT) as f64,
            top: MARGIN_TOP as f64,
            bottom: height.saturating_sub(MARGIN_BOTTOM).max(MARGIN_TOP) as f64,
        }
    }

    pub fn x(&self, x: f64) -> i32 {
        let span = (self.bounds.x_max - self.bounds.x_min).max(1.0);
        let ratio = (x - self.bounds.x_min) / span;
        (self.left + ratio * (self.right - self.left)).round() as i32
    }

    pub fn y(&self, y: f64) -> i32 {
        let span = (self.bounds.y_max - self.bounds.y_min).max(1.0);
        let ratio = (y - self.bounds.y_min) / span;
        (self.bottom - ratio * (self.bottom - self.top)).round() as i32
    }

    pub fn top(&self) -> i32 {
        self.top as i32
    }

    pub fn bottom(&self) -> i32 {
        self.bottom as i32
    }
}

/// Rasterize the chart layers, series first and reference lines on top
pub fn render_to_image(
    layers: &ChartLayers,
    width: u32,
    height: u32,
) -> Result<RgbaImage, ExportError> {
    if width < MIN_EXPORT_SIZE[0] || height < MIN_EXPORT_SIZE[1] {
        return Err(ExportError::TooSmall { width, height });
    }

    let mut img = RgbaImage::from_pixel(width, height, BACKGROUND);
    let map = PixelMap::new(layers.bounds(), width, height);

    // Plot area frame
    let (left, right) = (MARGIN_LEFT as i32, (width - MARGIN_RIGHT) as i32);
    let (top, bottom) = (map.top(), map.bottom());
    draw_line(&mut img, left, top, right, top, FRAME);
    draw_line(&mut img, left, bottom, right, bottom, FRAME);
    draw_line(&mut img, left, top, left, bottom, FRAME);
    draw_line(&mut img, right, top, right, bottom, FRAME);

    for layer in &layers.series {
        let color = rgba(layer.color);
        for pair in layer.points.windows(2) {
            let ([x0, y0], [x1, y1]) = (pair[0], pair[1]);
            draw_line(&mut img, map.x(x0), map.y(y0), map.x(x1), map.y(y1), color);
        }
        if let [[x, y]] = layer.points.as_slice() {
            draw_line(&mut img, map.x(*x), map.y(*y), map.x(*x), map.y(*y), color);
        }
    }

    for line in &layers.horizontal {
        let y = map.y(line.y);
        let (x0, x1) = (map.x(line.x_start), map.x(line.x_end));
        draw_line(&mut img, x0, y, x1, y, rgba(line.color));
    }

    for line in &layers.vertical {
        let x = map.x(line.x);
        draw_line(&mut img, x, top, x, bottom, rgba(line.color));
    }

    Ok(img)
}

/// Render the chart and save it as a PNG file
pub fn export_png(
    layers: &ChartLayers,
    path: &Path,
    width: u32,
    height: u32,
) -> Result<(), ExportError> {
    let img = render_to_image(layers, width, height)?;
    img.save(path)?;
    tracing::info!("Exported chart to {}", path.display());
    Ok(())
}

impl BlockScopeApp {
    /// Ask for a destination and export the current chart as PNG
    pub fn export_chart_png(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("blockscope_chart.png");
        if let Some(dir) = &self.settings.last_export_dir {
            dialog = dialog.set_directory(dir);
        }

        let Some(path) = dialog.save_file() else {
            return;
        };

        let [width, height] = self.settings.export_size;
        match export_png(&self.layers, &path, width, height) {
            Ok(()) => {
                self.settings.last_export_dir = path.parent().map(Path::to_path_buf);
                if let Err(e) = self.settings.save() {
                    tracing::warn!("Failed to save settings: {}", e);
                }
                self.show_toast("Chart exported as PNG", ToastType::Success);
            }
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                self.show_toast(&format!("Export failed: {}", e), ToastType::Error);
            }
        }
    }
}

fn rgba(rgb: [u8; 3]) -> Rgba<u8> {
    Rgba([rgb[0], rgb[1], rgb[2], 255])
}

/// Draw a line between two points using Bresenham's algorithm
fn draw_line(img: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba<u8>) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx: i32 = if x0 < x1 { 1 } else { -1 };
    let sy: i32 = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    let (width, height) = img.dimensions();

    loop {
        if x >= 0 && x < width as i32 && y >= 0 && y < height as i32 {
            img.put_pixel(x as u32, y as u32, color);
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
