//! Tests for per-stream statistics

use crate::common::example_files::*;
use crate::common::read_example_file;
use crate::common::synthetic::*;
use blockscope::parsers::{parse, BlockLog, Stream};
use blockscope::state::PlotConfig;
use blockscope::summary::{LogSummary, StreamSummary};

#[test]
fn test_summary_of_fixture() {
    let log = parse(&read_example_file(PITCH_SHIFT_SERIAL)).unwrap();
    let summary = LogSummary::compute(&log, &PlotConfig::default());

    assert_eq!(summary.input.samples, 48);
    assert_eq!(summary.input.blocks, 1);
    assert_eq!(summary.input.min, Some(-20000));
    assert_eq!(summary.input.max, Some(20000));
    assert_eq!(summary.output.range_text(), "-10000 .. 10000");
    assert_eq!(summary.input.clipped, 0);
    assert!(!summary.length_mismatch());
}

#[test]
fn test_summary_blocks_follow_block_size() {
    let summary = StreamSummary::compute(&ramp(0, 4096), 32767, 1024);
    assert_eq!(summary.blocks, 4);

    let summary = StreamSummary::compute(&ramp(0, 4097), 32767, 1024);
    assert_eq!(summary.blocks, 5);
}

#[test]
fn test_summary_counts_values_beyond_clip_level() {
    let log = BlockLog {
        output: vec![0, 40000, -40000, 32767, -32767, 32768],
        ..Default::default()
    };
    let summary = LogSummary::compute(&log, &PlotConfig::default());
    assert_eq!(summary.get(Stream::Output).clipped, 3);
    assert_eq!(summary.get(Stream::Input).clipped, 0);
}

#[test]
fn test_summary_length_mismatch() {
    let log = BlockLog {
        input: ramp(0, 3),
        output: ramp(0, 2),
        ..Default::default()
    };
    assert!(LogSummary::compute(&log, &PlotConfig::default()).length_mismatch());
}

#[test]
fn test_summary_of_empty_capture() {
    let summary = LogSummary::compute(&BlockLog::default(), &PlotConfig::default());
    assert_eq!(summary, LogSummary::default());
    assert!(!summary.length_mismatch());
}

#[test]
fn test_summary_of_integer_limits_from_capture() {
    let log = parse("outputBlock = [-9223372036854775808, 9223372036854775807, 0, ]\n").unwrap();
    let summary = LogSummary::compute(&log, &PlotConfig::default());

    assert_eq!(summary.output.clipped, 2);
    assert_eq!(summary.output.min, Some(i64::MIN));
    assert_eq!(summary.output.max, Some(i64::MAX));
    assert_eq!(summary.input, StreamSummary::default());
}

#[test]
fn test_summary_serializes_to_json() {
    let log = BlockLog {
        input: vec![1, -2],
        ..Default::default()
    };
    let summary = LogSummary::compute(&log, &PlotConfig::default());
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["input"]["samples"], 2);
    assert_eq!(json["input"]["min"], -2);
    assert!(json["output"]["max"].is_null());
}
