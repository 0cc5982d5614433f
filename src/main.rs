//! BlockScope - plots the input and output blocks of a test capture
//!
//! Reads `test_input.txt` from the working directory, parses every
//! `inputBlock`/`outputBlock` line and shows both series in one chart.
//! Any read or parse failure aborts before a window is opened.

use anyhow::Context;

use blockscope::app::run_viewer;
use blockscope::parsers::load_file;
use blockscope::settings::ViewerSettings;
use blockscope::state::{PlotConfig, DEFAULT_INPUT_FILE};
use blockscope::summary::LogSummary;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let log = load_file(DEFAULT_INPUT_FILE)
        .inspect_err(|e| tracing::error!("{}", e))
        .with_context(|| format!("could not load capture {}", DEFAULT_INPUT_FILE))?;

    let config = PlotConfig::default();
    LogSummary::compute(&log, &config).log();

    let settings = ViewerSettings::load();

    run_viewer(DEFAULT_INPUT_FILE, &log, config, settings)
        .map_err(|e| anyhow::anyhow!("viewer failed: {}", e))
}
