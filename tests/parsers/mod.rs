//! Parser integration tests
//!
//! - Marker matching and concatenation order
//! - Real firmware captures
//! - Fatal errors on malformed lines
