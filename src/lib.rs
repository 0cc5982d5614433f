//! BlockScope - a viewer for block-wise audio test captures
//!
//! The test firmware prints every processed audio block to the serial
//! console as `inputBlock = [...]` and `outputBlock = [...]` lines. This
//! library turns such a capture into two sample sequences and renders them
//! with the 16-bit clipping bounds, the zero line and the block boundaries
//! as reference lines.
//!
//! ## Module Structure
//!
//! - [`parsers`] - Serial capture parser
//! - [`state`] - Constants and plot configuration
//! - [`summary`] - Per-stream statistics
//! - [`settings`] - Viewer settings persistence
//! - [`app`] - Viewer state and eframe::App implementation
//! - [`ui`] - Chart, export, menu, status panel and toasts

pub mod app;
pub mod parsers;
pub mod settings;
pub mod state;
pub mod summary;
pub mod ui;
