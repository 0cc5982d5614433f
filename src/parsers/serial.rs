//! Serial console capture parser.
//!
//! The test firmware prints every processed block as one line:
//!
//! ```text
//! inputBlock = [12, -7, 30, ]
//! outputBlock = [3, 0, -2, ]
//! ```
//!
//! Lines are matched by their marker prefix, the bracketed list is located
//! explicitly and split on commas. Anything else in the capture (boot
//! messages, FFT status lines) is ignored.

use std::path::Path;
use strum::IntoEnumIterator;

use super::types::{BlockLog, LoadError, ParseError, Stream};

/// Parse a whole capture into its two sample sequences.
///
/// The first malformed line aborts parsing; no partial log is returned.
pub fn parse(text: &str) -> Result<BlockLog, ParseError> {
    let mut log = BlockLog::default();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;

        // Markers are checked independently, a line may feed both streams
        for stream in Stream::iter() {
            if let Some(rest) = line.strip_prefix(stream.marker()) {
                let values = parse_block(rest, stream, line_number)?;
                log.append(stream, values);
            }
        }
    }

    tracing::debug!(
        input_samples = log.input.len(),
        output_samples = log.output.len(),
        "parsed capture"
    );

    Ok(log)
}

/// Read a capture from disk and parse it
pub fn load_file(path: impl AsRef<Path>) -> Result<BlockLog, LoadError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Loaded {} ({} bytes)", path.display(), contents.len());

    Ok(parse(&contents)?)
}

/// Extract the integers between the first `[` and the last `]` of `rest`
fn parse_block(rest: &str, stream: Stream, line: usize) -> Result<Vec<i64>, ParseError> {
    let open = rest
        .find('[')
        .ok_or(ParseError::MissingOpenBracket { line, stream })?;
    let body = &rest[open + 1..];
    let close = body
        .rfind(']')
        .ok_or(ParseError::MissingCloseBracket { line, stream })?;
    let body = body[..close].trim();

    if body.is_empty() {
        return Ok(Vec::new());
    }

    let tokens: Vec<&str> = body.split(',').map(str::trim).collect();
    let last = tokens.len() - 1;

    let mut values = Vec::with_capacity(tokens.len());
    for (position, token) in tokens.into_iter().enumerate() {
        if token.is_empty() {
            // The firmware prints a separator after every value
            if position == last {
                break;
            }
            return Err(ParseError::EmptyValue {
                line,
                stream,
                position,
            });
        }

        let value = token
            .parse::<i64>()
            .map_err(|source| ParseError::InvalidValue {
                line,
                stream,
                token: token.to_string(),
                source,
            })?;
        values.push(value);
    }

    Ok(values)
}
