//! Tests for viewer state built from a capture
//!
//! Tests cover:
//! - Layers and summary prepared before the window opens
//! - Notice for captures without any sample block

use crate::common::synthetic::*;
use blockscope::app::BlockScopeApp;
use blockscope::parsers::{parse, BlockLog};
use blockscope::settings::ViewerSettings;
use blockscope::state::{PlotConfig, ToastType};
use blockscope::summary::LogSummary;
use blockscope::ui::chart::ChartLayers;

#[test]
fn test_app_prepares_layers_and_summary() {
    let log = parse(&interleaved_capture(2, 8)).unwrap();
    let config = PlotConfig::default();
    let app = BlockScopeApp::new(
        "test_input.txt",
        &log,
        config.clone(),
        ViewerSettings::default(),
    );

    assert_eq!(*app.layers(), ChartLayers::build(&log, &config));
    assert_eq!(*app.summary(), LogSummary::compute(&log, &config));
    assert_eq!(app.summary().input.samples, 16);
    assert!(app.toast().is_none());
}

#[test]
fn test_app_notifies_empty_capture() {
    let app = BlockScopeApp::new(
        "test_input.txt",
        &BlockLog::default(),
        PlotConfig::default(),
        ViewerSettings::default(),
    );

    let toast = app.toast().expect("Empty capture should raise a notice");
    assert_eq!(toast.kind, ToastType::Info);
    assert!(toast.message.contains("test_input.txt"));
    assert!(app.layers().horizontal.iter().all(|l| l.is_degenerate()));
}
