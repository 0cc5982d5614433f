//! Core constants and plot configuration.
//!
//! The reference-line values mirror the test setup: samples are 16-bit
//! signed and the firmware processes audio in blocks of 1024 samples.

use std::time::{Duration, Instant};

use crate::parsers::Stream;

// ============================================================================
// Constants
// ============================================================================

/// Capture file read on startup, relative to the working directory
pub const DEFAULT_INPUT_FILE: &str = "test_input.txt";

/// Largest magnitude a 16-bit signed sample can take symmetrically
pub const CLIP_LEVEL: i64 = 32767;

/// Samples per processing block
pub const BLOCK_SIZE: usize = 1024;

/// Number of block boundaries drawn (0, 1024, ..., 4096)
pub const BLOCK_BOUNDARY_COUNT: usize = 5;

/// Stroke width for all reference lines
pub const REFERENCE_LINE_WIDTH: f32 = 0.5;

/// Stroke width for the data series
pub const SERIES_LINE_WIDTH: f32 = 1.0;

/// Series colors, in draw order (input first, output second)
pub const SERIES_COLORS: &[[u8; 3]] = &[
    [31, 119, 180], // Blue
    [255, 127, 14], // Orange
];

pub const CLIP_LINE_COLOR: [u8; 3] = [255, 0, 0];
pub const ZERO_LINE_COLOR: [u8; 3] = [0, 0, 0];
pub const BLOCK_LINE_COLOR: [u8; 3] = [0, 128, 0];

// ============================================================================
// Plot Configuration
// ============================================================================

/// Everything the chart needs besides the samples themselves.
///
/// Styling is fixed; `Default` is the only configuration the viewer uses.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    pub clip_level: i64,
    pub block_size: usize,
    pub block_boundary_count: usize,
    pub reference_line_width: f32,
    pub series_line_width: f32,
    pub series_colors: [[u8; 3]; 2],
    pub clip_color: [u8; 3],
    pub zero_color: [u8; 3],
    pub block_color: [u8; 3],
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            clip_level: CLIP_LEVEL,
            block_size: BLOCK_SIZE,
            block_boundary_count: BLOCK_BOUNDARY_COUNT,
            reference_line_width: REFERENCE_LINE_WIDTH,
            series_line_width: SERIES_LINE_WIDTH,
            series_colors: [SERIES_COLORS[0], SERIES_COLORS[1]],
            clip_color: CLIP_LINE_COLOR,
            zero_color: ZERO_LINE_COLOR,
            block_color: BLOCK_LINE_COLOR,
        }
    }
}

impl PlotConfig {
    /// Color for a stream's data series
    pub fn series_color(&self, stream: Stream) -> [u8; 3] {
        match stream {
            Stream::Input => self.series_colors[0],
            Stream::Output => self.series_colors[1],
        }
    }

    /// X positions of the block boundaries
    pub fn block_boundaries(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.block_boundary_count).map(move |k| k * self.block_size)
    }
}

// ============================================================================
// Toast Notifications
// ============================================================================

/// Toast notification types for different visual styles
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastType {
    /// Informational message (blue)
    #[default]
    Info,
    /// Success message (green)
    Success,
    /// Error message (red)
    Error,
}

impl ToastType {
    /// Get the background color for this toast type
    pub fn color(&self) -> [u8; 3] {
        match self {
            ToastType::Info => [71, 108, 155],
            ToastType::Success => [46, 125, 50],
            ToastType::Error => [135, 30, 28],
        }
    }

    /// Get the text color for this toast type
    pub fn text_color(&self) -> [u8; 3] {
        [255, 255, 255]
    }
}

/// How long a toast stays on screen
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// A message shown in the corner of the viewer until it expires
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub kind: ToastType,
    pub shown_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastType) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Instant::now(),
        }
    }

    /// Time left before the toast disappears, `None` once expired
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        TOAST_DURATION
            .checked_sub(now.saturating_duration_since(self.shown_at))
            .filter(|left| !left.is_zero())
    }
}
