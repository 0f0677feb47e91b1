//! Stowmap - diagrams of where files are stored.
//!
//! Stowmap turns a description of storage locations (drives, computers,
//! servers), their folders, loose files and shared files into a flat, ordered
//! sequence of positioned drawables, and paints that sequence as SVG.
//!
//! The layout is a single left-to-right pass: every location gets a fixed
//! horizontal band, and shapes inside it are placed at a flow cursor that
//! advances by a fixed step after each placement.

pub mod config;
pub mod export;
pub mod labels;
pub mod layout;
pub mod model;

mod error;

pub use stowmap_core::{color, draw, geometry};

pub use error::StowmapError;
pub use layout::Diagram;

use log::{debug, info, trace};

use config::AppConfig;
use export::{RenderingSurface, json::JsonStage, svg::SvgStage};
use model::Locations;

/// Builder for loading, laying out and rendering Stowmap diagrams.
///
/// # Examples
///
/// ```rust
/// use stowmap::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"{
///     "0": {
///         "name": "JoeDrive0",
///         "type": "Drive",
///         "folders": { "0": { "name": "Folder0", "files": ["File0", "File1"] } },
///         "no-folder": ["File4"],
///         "shared-files": ["File4"]
///     }
/// }"#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// let locations = builder.parse(source).expect("Failed to parse");
/// let diagram = builder.layout(&locations);
/// let svg = builder.render_svg(&diagram).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a JSON model document into validated locations.
    ///
    /// # Errors
    ///
    /// Returns [`StowmapError::Model`] for malformed JSON and for the first
    /// location or folder with a missing or mistyped field. No partial model
    /// is returned.
    pub fn parse(&self, source: &str) -> Result<Locations, StowmapError> {
        info!("Parsing model");
        let locations = Locations::from_json_str(source)?;
        debug!(locations_count = locations.len(); "Model parsed successfully");
        trace!(locations:?; "Parsed model");
        Ok(locations)
    }

    /// Lay out the locations into an ordered sequence of drawables.
    pub fn layout(&self, locations: &Locations) -> Diagram {
        layout::assemble(locations)
    }

    /// Render a diagram to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`StowmapError::Export`] if the configured style is invalid.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, StowmapError> {
        let mut stage = SvgStage::from_config(&self.config)?;
        let svg = render(diagram, &mut stage)?;
        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Render a diagram's drawable sequence as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StowmapError::Export`] if serialization fails.
    pub fn render_json(&self, diagram: &Diagram) -> Result<String, StowmapError> {
        let mut stage = JsonStage::new();
        let json = render(diagram, &mut stage)?;
        info!("JSON rendered successfully");
        Ok(json)
    }
}

fn render<S: RenderingSurface>(diagram: &Diagram, stage: &mut S) -> Result<String, StowmapError> {
    diagram.render_to(stage);
    Ok(stage.render()?)
}
