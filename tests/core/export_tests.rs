//! Tests for PNG rasterization
//!
//! Tests cover:
//! - Size validation
//! - Reference lines drawn on top of the data
//! - Empty captures still render

use image::Rgba;

use crate::common::synthetic::*;
use blockscope::parsers::{parse, BlockLog};
use blockscope::state::{PlotConfig, BLOCK_LINE_COLOR, ZERO_LINE_COLOR};
use blockscope::ui::chart::ChartLayers;
use blockscope::ui::export::{render_to_image, ExportError, PixelMap, MIN_EXPORT_SIZE};

fn rgba(rgb: [u8; 3]) -> Rgba<u8> {
    Rgba([rgb[0], rgb[1], rgb[2], 255])
}

#[test]
fn test_render_rejects_tiny_image() {
    let layers = ChartLayers::build(&BlockLog::default(), &PlotConfig::default());
    let result = render_to_image(&layers, MIN_EXPORT_SIZE[0] - 1, 400);
    assert!(matches!(result, Err(ExportError::TooSmall { .. })));
}

#[test]
fn test_render_has_requested_size() {
    let layers = ChartLayers::build(&BlockLog::default(), &PlotConfig::default());
    let img = render_to_image(&layers, 800, 600).unwrap();
    assert_eq!(img.dimensions(), (800, 600));
}

#[test]
fn test_block_boundaries_drawn_over_data() {
    // Flat input at zero crosses every block boundary
    let log = BlockLog {
        input: vec![0; 4097],
        ..Default::default()
    };
    let layers = ChartLayers::build(&log, &PlotConfig::default());
    let (width, height) = (1000, 600);
    let img = render_to_image(&layers, width, height).unwrap();
    let map = PixelMap::new(layers.bounds(), width, height);

    let y = map.y(0.0) as u32;
    for x in [1024.0, 2048.0, 3072.0] {
        let px = map.x(x) as u32;
        assert_eq!(*img.get_pixel(px, y), rgba(BLOCK_LINE_COLOR));
    }
}

#[test]
fn test_zero_line_drawn_over_output() {
    let log = parse(&interleaved_capture(1, 8).replace("inputBlock", "ignored")).unwrap();
    let layers = ChartLayers::build(&log, &PlotConfig::default());
    let (width, height) = (1000, 600);
    let img = render_to_image(&layers, width, height).unwrap();
    let map = PixelMap::new(layers.bounds(), width, height);

    // Halfway along the zero line's span, away from any block boundary
    let px = map.x(4.0) as u32;
    let py = map.y(0.0) as u32;
    assert_eq!(*img.get_pixel(px, py), rgba(ZERO_LINE_COLOR));
}

#[test]
fn test_render_empty_capture() {
    let layers = ChartLayers::build(&parse("").unwrap(), &PlotConfig::default());
    assert!(render_to_image(&layers, 640, 480).is_ok());
}

#[test]
fn test_pixel_map_handles_images_smaller_than_margins() {
    let layers = ChartLayers::build(&BlockLog::default(), &PlotConfig::default());
    let map = PixelMap::new(layers.bounds(), 10, 10);

    // Plot area collapses onto the left/top margins instead of underflowing
    assert_eq!(map.x(0.0), map.x(4096.0));
    assert_eq!(map.top(), map.bottom());
}
