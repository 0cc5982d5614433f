use std::num::ParseIntError;
use std::path::PathBuf;
use strum::{Display, EnumIter, IntoStaticStr};
use thiserror::Error;

/// The two sample channels printed by the test firmware
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, IntoStaticStr, PartialEq)]
pub enum Stream {
    #[strum(serialize = "inputBlock")]
    Input,
    #[strum(serialize = "outputBlock")]
    Output,
}

impl Stream {
    /// Line prefix identifying a data-bearing line for this stream
    pub fn marker(self) -> &'static str {
        self.into()
    }

    /// Human readable label used in legends and the status panel
    pub fn label(self) -> &'static str {
        match self {
            Stream::Input => "Input",
            Stream::Output => "Output",
        }
    }
}

/// Errors raised while tokenizing a capture. All of them abort the run.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: {stream} marker is not followed by '['")]
    MissingOpenBracket { line: usize, stream: Stream },

    #[error("line {line}: {stream} list is missing its closing ']'")]
    MissingCloseBracket { line: usize, stream: Stream },

    #[error("line {line}: {stream} list has an empty element at position {position}")]
    EmptyValue {
        line: usize,
        stream: Stream,
        position: usize,
    },

    #[error("line {line}: {stream} value '{token}' is not an integer")]
    InvalidValue {
        line: usize,
        stream: Stream,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

impl ParseError {
    /// 1-based line number the error was raised on
    pub fn line(&self) -> usize {
        match self {
            ParseError::MissingOpenBracket { line, .. }
            | ParseError::MissingCloseBracket { line, .. }
            | ParseError::EmptyValue { line, .. }
            | ParseError::InvalidValue { line, .. } => *line,
        }
    }
}

/// Errors raised while loading a capture from disk
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Both sample sequences of one capture, concatenated in file order
#[derive(Clone, Debug, Default)]
pub struct BlockLog {
    pub input: Vec<i64>,
    pub output: Vec<i64>,
    /// Number of data-bearing lines seen per stream
    pub input_blocks: usize,
    pub output_blocks: usize,
}

impl BlockLog {
    /// Samples for one stream
    pub fn get(&self, stream: Stream) -> &[i64] {
        match stream {
            Stream::Input => &self.input,
            Stream::Output => &self.output,
        }
    }

    /// Number of lines that contributed to the stream
    pub fn block_count(&self, stream: Stream) -> usize {
        match stream {
            Stream::Input => self.input_blocks,
            Stream::Output => self.output_blocks,
        }
    }

    /// True when neither stream holds any sample
    pub fn is_empty(&self) -> bool {
        self.input.is_empty() && self.output.is_empty()
    }

    pub(crate) fn append(&mut self, stream: Stream, values: Vec<i64>) {
        match stream {
            Stream::Input => {
                self.input.extend(values);
                self.input_blocks += 1;
            }
            Stream::Output => {
                self.output.extend(values);
                self.output_blocks += 1;
            }
        }
    }
}
