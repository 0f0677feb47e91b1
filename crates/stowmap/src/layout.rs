//! Flow layout of storage locations.
//!
//! # Overview
//!
//! - [`coordinates`] - fixed vertical band for each location
//! - [`shapes`] - one factory per visual element kind
//! - [`cursor`] - the running position advanced after each placement
//! - [`assemble`] - the single pass that ties them together into a [`Diagram`]

pub mod coordinates;
pub mod cursor;
pub mod shapes;

mod assembler;
mod diagram;

pub use assembler::assemble;
pub use diagram::Diagram;

use thiserror::Error;

use stowmap_core::draw::DrawableId;

/// Errors raised when working with an assembled diagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("no drawable {0} in this diagram")]
    UnknownDrawable(DrawableId),
}
