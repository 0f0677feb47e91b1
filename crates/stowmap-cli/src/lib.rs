//! CLI logic for the Stowmap diagram tool.
//!
//! Reads a JSON storage model, lays it out, and writes the rendered diagram.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, OutputFormat};

use std::fs;

use log::{debug, info};

use stowmap::{DiagramBuilder, StowmapError};

/// Run the Stowmap CLI application
///
/// This function processes the input file through the Stowmap pipeline
/// and writes the rendered output to the output file.
///
/// # Errors
///
/// Returns `StowmapError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed input models
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), StowmapError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let locations = builder.parse(&source)?;
    let mut diagram = builder.layout(&locations);

    if args.name_labels {
        debug!(bindings_count = diagram.bindings().len(); "Labelling files with their names");
        diagram.label_with_file_names();
    }

    let output = match args.format {
        OutputFormat::Svg => builder.render_svg(&diagram)?,
        OutputFormat::Json => builder.render_json(&diagram)?,
    };

    fs::write(&args.output, output)?;

    info!(output_file = args.output, format:? = args.format; "Diagram exported successfully");

    Ok(())
}
