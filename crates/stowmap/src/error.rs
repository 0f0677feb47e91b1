//! Error types for Stowmap operations.
//!
//! [`StowmapError`] wraps the failures of every pipeline stage: loading the
//! model, working with the assembled diagram, and rendering it.

use std::io;

use thiserror::Error;

use crate::{export::ExportError, layout::LayoutError, model::ModelError};

/// The main error type for Stowmap operations.
#[derive(Debug, Error)]
pub enum StowmapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid model: {0}")]
    Model(#[from] ModelError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Configuration error: {0}")]
    Config(String),
}
