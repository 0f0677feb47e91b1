//! Error adapter for converting StowmapError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use stowmap::{StowmapError, model::ModelError};

/// Adapter for [`StowmapError`] values.
///
/// Input models are JSON documents and carry no source spans of their own, so
/// every error is rendered with a code and, where one helps, a hint.
pub struct ErrorAdapter<'a>(pub &'a StowmapError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            StowmapError::Io(_) => "stowmap::io",
            StowmapError::Model(err) => match err {
                ModelError::Json(_) => "stowmap::model::json",
                ModelError::MissingField { .. } => "stowmap::model::missing_field",
                ModelError::InvalidType { .. } => "stowmap::model::invalid_type",
                ModelError::InvalidKey { .. } => "stowmap::model::invalid_key",
                ModelError::DuplicateKey { .. } => "stowmap::model::duplicate_key",
                ModelError::LocationIdOutOfRange { .. } => "stowmap::model::location_id_out_of_range",
            },
            StowmapError::Layout(_) => "stowmap::layout",
            StowmapError::Export(_) => "stowmap::export",
            StowmapError::Config(_) => "stowmap::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            StowmapError::Model(ModelError::MissingField { .. }) => {
                "locations need `name`, `type`, `folders`, `no-folder` and `shared-files`; folders need `name` and `files`"
            }
            StowmapError::Model(ModelError::InvalidKey { .. } | ModelError::DuplicateKey { .. }) => {
                "location and folder keys are unique non-negative integers written as strings, such as \"0\""
            }
            StowmapError::Model(ModelError::LocationIdOutOfRange { .. }) => {
                "location ids set the vertical band of each location; renumber them from 0"
            }
            StowmapError::Config(_) => {
                "configuration files are TOML with optional [style] and [export] sections"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`StowmapError`] into a list of reportable errors.
///
/// Model validation stops at the first problem, so the list holds exactly one
/// entry.
pub fn to_reportables(err: &StowmapError) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter(err)]
}

#[cfg(test)]
mod tests {
    use stowmap::model::Locations;

    use super::*;

    fn model_error(source: &str) -> StowmapError {
        StowmapError::Model(Locations::from_json_str(source).unwrap_err())
    }

    #[test]
    fn test_missing_field_code_and_help() {
        let err = model_error(r#"{ "0": { "name": "A" } }"#);

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        let reportable = &reportables[0];
        assert_eq!(
            reportable.code().unwrap().to_string(),
            "stowmap::model::missing_field"
        );
        assert!(reportable.help().is_some());
        assert!(reportable.to_string().starts_with("Invalid model:"));
    }

    #[test]
    fn test_json_syntax_error_code() {
        let err = model_error("{ not json");

        let reportables = to_reportables(&err);
        assert_eq!(
            reportables[0].code().unwrap().to_string(),
            "stowmap::model::json"
        );
        assert!(reportables[0].help().is_none());
    }

    #[test]
    fn test_location_id_out_of_range_code() {
        let err = model_error(
            r#"{ "200001": { "name": "A", "type": "Drive", "folders": {}, "no-folder": [], "shared-files": [] } }"#,
        );

        let reportables = to_reportables(&err);
        assert_eq!(
            reportables[0].code().unwrap().to_string(),
            "stowmap::model::location_id_out_of_range"
        );
        assert!(reportables[0].help().is_some());
    }

    #[test]
    fn test_config_error() {
        let err = StowmapError::Config("bad margin".to_string());

        let reportables = to_reportables(&err);
        assert_eq!(reportables[0].to_string(), "Configuration error: bad margin");
        assert_eq!(
            reportables[0].code().unwrap().to_string(),
            "stowmap::config"
        );
    }
}
