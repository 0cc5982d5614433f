pub mod serial;
pub mod types;

pub use serial::{load_file, parse};
pub use types::{BlockLog, LoadError, ParseError, Stream};
