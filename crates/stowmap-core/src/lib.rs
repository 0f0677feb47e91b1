//! Stowmap Core Types and Definitions
//!
//! This crate provides the foundational types for Stowmap storage diagrams:
//!
//! - **Colors**: CSS color handling ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Positioned drawable primitives and their SVG rendering ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
