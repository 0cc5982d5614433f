//! UI rendering modules for the BlockScope viewer.
//!
//! - `chart` - Chart layers and the interactive plot
//! - `export` - PNG export
//! - `menu` - Menu bar (File)
//! - `status_panel` - Per-stream statistics below the chart
//! - `toast` - Toast notification system

pub mod chart;
pub mod export;
pub mod menu;
pub mod status_panel;
pub mod toast;
