//! Core module tests for non-parser functionality
//!
//! Tests for:
//! - Viewer state built from a capture
//! - Chart layers and reference lines
//! - PNG rasterization
//! - Per-stream statistics
//! - Settings persistence format

pub mod app_tests;
pub mod export_tests;
pub mod settings_tests;
pub mod summary_tests;
