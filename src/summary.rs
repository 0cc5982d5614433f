//! Per-stream statistics shown in the status panel and logged on load.

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::parsers::{BlockLog, Stream};
use crate::state::PlotConfig;

/// Statistics for one sample sequence
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StreamSummary {
    pub samples: usize,
    /// Number of `block_size` blocks the samples span, the last one may be partial
    pub blocks: usize,
    pub min: Option<i64>,
    pub max: Option<i64>,
    /// Samples whose magnitude exceeds the clip level
    pub clipped: usize,
}

impl StreamSummary {
    pub fn compute(samples: &[i64], clip_level: i64, block_size: usize) -> Self {
        let limit = clip_level.unsigned_abs();
        let clipped = samples
            .iter()
            .filter(|v| v.unsigned_abs() > limit)
            .count();

        Self {
            samples: samples.len(),
            blocks: samples.len().div_ceil(block_size.max(1)),
            min: samples.iter().copied().min(),
            max: samples.iter().copied().max(),
            clipped,
        }
    }

    /// Formatted "min .. max" range, or a dash when empty
    pub fn range_text(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("{} .. {}", min, max),
            _ => "-".to_string(),
        }
    }
}

/// Statistics for both streams of a capture
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LogSummary {
    pub input: StreamSummary,
    pub output: StreamSummary,
}

impl LogSummary {
    pub fn compute(log: &BlockLog, config: &PlotConfig) -> Self {
        Self {
            input: StreamSummary::compute(&log.input, config.clip_level, config.block_size),
            output: StreamSummary::compute(&log.output, config.clip_level, config.block_size),
        }
    }

    pub fn get(&self, stream: Stream) -> &StreamSummary {
        match stream {
            Stream::Input => &self.input,
            Stream::Output => &self.output,
        }
    }

    /// The streams are plotted against their own index, so differing
    /// lengths are allowed but usually point at a truncated capture
    pub fn length_mismatch(&self) -> bool {
        self.input.samples != self.output.samples
    }

    /// Emit the summary through `tracing`
    pub fn log(&self) {
        match serde_json::to_string(self) {
            Ok(json) => tracing::debug!("summary {}", json),
            Err(e) => tracing::debug!("summary not serializable: {}", e),
        }

        for stream in Stream::iter() {
            let summary = self.get(stream);
            tracing::info!(
                "{}: {} samples in {} blocks, range {}",
                stream.label(),
                summary.samples,
                summary.blocks,
                summary.range_text()
            );
            if summary.clipped > 0 {
                tracing::warn!(
                    "{}: {} samples exceed the clip level",
                    stream.label(),
                    summary.clipped
                );
            }
        }

        if self.length_mismatch() {
            tracing::warn!(
                "Input and output lengths differ ({} vs {})",
                self.input.samples,
                self.output.samples
            );
        }
    }
}
