//! JSON loading and validation of the input model.
//!
//! Documents are parsed into a [`serde_json::Value`] first and then walked by
//! hand, so a fault can be reported against the entity that carries it
//! (`locations.0.folders.3.files`) instead of as a bare byte offset.
//! Validation stops at the first fault; no partial model is returned.

use std::collections::BTreeMap;

use log::{debug, trace};
use serde_json::{Map, Value};
use thiserror::Error;

use super::{FolderModel, LocationKind, LocationModel, Locations};
use crate::layout::coordinates::MAX_LOCATION_ID;

const NAME: &str = "name";
const TYPE: &str = "type";
const FOLDERS: &str = "folders";
const LOOSE_FILES: &str = "no-folder";
const SHARED_FILES: &str = "shared-files";
const SHARED_FOLDERS: &str = "shared-folders";
const FILES: &str = "files";

/// Errors raised while loading a model document.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("`{path}` is missing required field `{field}`")]
    MissingField { path: String, field: &'static str },

    #[error("`{path}` has the wrong type: expected {expected}, found {found}")]
    InvalidType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("`{path}` has invalid key `{key}`: keys must be non-negative integers")]
    InvalidKey { path: String, key: String },

    #[error("`{path}` repeats key {key}")]
    DuplicateKey { path: String, key: u32 },

    #[error("`{path}` has location id {id}, above the largest supported id {max}")]
    LocationIdOutOfRange { path: String, id: u32, max: u32 },
}

impl Locations {
    /// Parses and validates a JSON model document.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] for malformed JSON or for the first location or
    /// folder that lacks a field, carries a field of the wrong type, or uses a
    /// key that is not a non-negative integer. Location ids above
    /// [`MAX_LOCATION_ID`] are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use stowmap::model::Locations;
    ///
    /// let source = r#"{
    ///     "0": {
    ///         "name": "JoeDrive0",
    ///         "type": "Drive",
    ///         "folders": { "0": { "name": "Folder0", "files": ["File0"] } },
    ///         "no-folder": ["File4"],
    ///         "shared-files": []
    ///     }
    /// }"#;
    ///
    /// let locations = Locations::from_json_str(source).unwrap();
    /// assert_eq!(locations.len(), 1);
    /// ```
    pub fn from_json_str(source: &str) -> Result<Self, ModelError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(&value)
    }

    /// Validates an already parsed JSON value.
    ///
    /// The top level is either an object keyed by location id or an array,
    /// in which case element `i` gets id `i`.
    pub fn from_value(value: &Value) -> Result<Self, ModelError> {
        let path = "locations";
        let mut locations = Locations::new();

        for (id, entry) in keyed_entries(value, path)? {
            if id > MAX_LOCATION_ID {
                return Err(ModelError::LocationIdOutOfRange {
                    path: format!("{path}.{id}"),
                    id,
                    max: MAX_LOCATION_ID,
                });
            }
            let location = parse_location(id, entry, &format!("{path}.{id}"))?;
            trace!(id, name = location.name(); "Location validated");
            locations.insert(location);
        }

        debug!(locations_count = locations.len(); "Model loaded");
        Ok(locations)
    }
}

fn parse_location(id: u32, value: &Value, path: &str) -> Result<LocationModel, ModelError> {
    let object = as_object(value, path)?;

    let name = string_field(object, path, NAME)?;
    let kind = LocationKind::from(string_field(object, path, TYPE)?);
    let folders = folder_map(required(object, path, FOLDERS)?, &field_path(path, FOLDERS))?;
    let loose_files = string_list(
        required(object, path, LOOSE_FILES)?,
        &field_path(path, LOOSE_FILES),
    )?;
    let shared_files = string_list(
        required(object, path, SHARED_FILES)?,
        &field_path(path, SHARED_FILES),
    )?;
    let shared_folders = match object.get(SHARED_FOLDERS) {
        Some(value) => folder_map(value, &field_path(path, SHARED_FOLDERS))?,
        None => BTreeMap::new(),
    };

    Ok(LocationModel {
        id,
        name: name.to_string(),
        kind,
        folders,
        loose_files,
        shared_files,
        shared_folders,
    })
}

fn folder_map(value: &Value, path: &str) -> Result<BTreeMap<u32, FolderModel>, ModelError> {
    keyed_entries(value, path)?
        .into_iter()
        .map(|(key, entry)| {
            let folder = parse_folder(entry, &format!("{path}.{key}"))?;
            Ok((key, folder))
        })
        .collect()
}

fn parse_folder(value: &Value, path: &str) -> Result<FolderModel, ModelError> {
    let object = as_object(value, path)?;
    let name = string_field(object, path, NAME)?;
    let files = string_list(required(object, path, FILES)?, &field_path(path, FILES))?;

    Ok(FolderModel {
        name: name.to_string(),
        files,
    })
}

/// Returns the entries of a keyed collection in ascending key order.
///
/// Objects must use non-negative integer keys; arrays are keyed by index.
fn keyed_entries<'a>(value: &'a Value, path: &str) -> Result<Vec<(u32, &'a Value)>, ModelError> {
    match value {
        Value::Object(object) => {
            let mut entries = BTreeMap::new();
            for (key, entry) in object {
                let id = parse_key(key, path)?;
                if entries.insert(id, entry).is_some() {
                    return Err(ModelError::DuplicateKey {
                        path: path.to_string(),
                        key: id,
                    });
                }
            }
            Ok(entries.into_iter().collect())
        }
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let id = u32::try_from(index).map_err(|_| ModelError::InvalidKey {
                    path: path.to_string(),
                    key: index.to_string(),
                })?;
                Ok((id, entry))
            })
            .collect(),
        other => Err(ModelError::InvalidType {
            path: path.to_string(),
            expected: "an object or an array",
            found: type_name(other),
        }),
    }
}

fn parse_key(key: &str, path: &str) -> Result<u32, ModelError> {
    // `u32::from_str` accepts a leading `+`, which is not a plain index.
    let is_digits = !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit());
    is_digits
        .then(|| key.parse::<u32>().ok())
        .flatten()
        .ok_or_else(|| ModelError::InvalidKey {
            path: path.to_string(),
            key: key.to_string(),
        })
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ModelError> {
    value.as_object().ok_or_else(|| ModelError::InvalidType {
        path: path.to_string(),
        expected: "an object",
        found: type_name(value),
    })
}

fn required<'a>(
    object: &'a Map<String, Value>,
    path: &str,
    field: &'static str,
) -> Result<&'a Value, ModelError> {
    object.get(field).ok_or_else(|| ModelError::MissingField {
        path: path.to_string(),
        field,
    })
}

fn string_field<'a>(
    object: &'a Map<String, Value>,
    path: &str,
    field: &'static str,
) -> Result<&'a str, ModelError> {
    let value = required(object, path, field)?;
    value.as_str().ok_or_else(|| ModelError::InvalidType {
        path: field_path(path, field),
        expected: "a string",
        found: type_name(value),
    })
}

fn string_list(value: &Value, path: &str) -> Result<Vec<String>, ModelError> {
    let items = value.as_array().ok_or_else(|| ModelError::InvalidType {
        path: path.to_string(),
        expected: "an array of strings",
        found: type_name(value),
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| ModelError::InvalidType {
                    path: format!("{path}[{index}]"),
                    expected: "a string",
                    found: type_name(item),
                })
        })
        .collect()
}

fn field_path(path: &str, field: &str) -> String {
    format!("{path}.{field}")
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "1": {
            "name": "JoeComputer0",
            "type": "Computer",
            "folders": {
                "1": {"name": "Folder3", "files": []},
                "0": {"name": "Folder2", "files": ["File5", "File6", "File5", "File6"]}
            },
            "no-folder": ["File6"],
            "shared-folders": {
                "0": {"name": "Folder0", "files": ["File0", "File1", "File2"]}
            },
            "shared-files": ["File4"]
        },
        "0": {
            "name": "JoeDrive0",
            "type": "Drive",
            "folders": {},
            "no-folder": [],
            "shared-files": []
        }
    }"#;

    fn location(fields: Value) -> Value {
        serde_json::json!({ "0": fields })
    }

    fn valid_location() -> Value {
        serde_json::json!({
            "name": "EmailServer",
            "type": "Server",
            "folders": {},
            "no-folder": ["File3"],
            "shared-files": ["File4"]
        })
    }

    #[test]
    fn test_load_sample() {
        let locations = Locations::from_json_str(SAMPLE).unwrap();
        assert_eq!(locations.len(), 2);

        let ids: Vec<_> = locations.iter().map(LocationModel::id).collect();
        assert_eq!(ids, [0, 1]);

        let computer = locations.get(1).unwrap();
        assert_eq!(computer.kind(), &LocationKind::Computer);
        assert_eq!(computer.loose_files(), ["File6"]);
        assert_eq!(computer.shared_files(), ["File4"]);
        assert_eq!(computer.shared_folders().len(), 1);

        let folders: Vec<_> = computer.folders().map(|(k, f)| (k, f.name())).collect();
        assert_eq!(folders, [(0, "Folder2"), (1, "Folder3")]);
        assert_eq!(computer.folders().next().unwrap().1.files().len(), 4);
    }

    #[test]
    fn test_keys_sort_numerically() {
        let mut doc = serde_json::Map::new();
        for key in ["10", "2", "0"] {
            let mut entry = valid_location();
            entry["name"] = Value::from(format!("loc{key}"));
            doc.insert(key.to_string(), entry);
        }

        let locations = Locations::from_value(&Value::Object(doc)).unwrap();
        let ids: Vec<_> = locations.iter().map(LocationModel::id).collect();
        assert_eq!(ids, [0, 2, 10]);
    }

    #[test]
    fn test_array_input_uses_index_as_id() {
        let doc = serde_json::json!([valid_location(), valid_location()]);
        let locations = Locations::from_value(&doc).unwrap();
        let ids: Vec<_> = locations.iter().map(LocationModel::id).collect();
        assert_eq!(ids, [0, 1]);
    }

    #[test]
    fn test_missing_fields() {
        for field in ["name", "type", "folders", "no-folder", "shared-files"] {
            let mut entry = valid_location();
            entry.as_object_mut().unwrap().remove(field);

            let err = Locations::from_value(&location(entry)).unwrap_err();
            match err {
                ModelError::MissingField { path, field: missing } => {
                    assert_eq!(path, "locations.0");
                    assert_eq!(missing, field);
                }
                other => panic!("expected MissingField for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_missing_folder_files() {
        let mut entry = valid_location();
        entry["folders"] = serde_json::json!({ "3": { "name": "Folder1" } });

        let err = Locations::from_value(&location(entry)).unwrap_err();
        assert!(
            matches!(&err, ModelError::MissingField { path, field: "files" } if path == "locations.0.folders.3"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_scalar_where_sequence_expected() {
        let mut entry = valid_location();
        entry["no-folder"] = Value::from("File3");

        let err = Locations::from_value(&location(entry)).unwrap_err();
        assert!(
            matches!(&err, ModelError::InvalidType { path, found: "a string", .. } if path == "locations.0.no-folder"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_non_string_file_entry() {
        let mut entry = valid_location();
        entry["shared-files"] = serde_json::json!(["File4", 7]);

        let err = Locations::from_value(&location(entry)).unwrap_err();
        assert!(
            matches!(&err, ModelError::InvalidType { path, found: "a number", .. } if path == "locations.0.shared-files[1]"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_location_id_range() {
        let mut doc = serde_json::Map::new();
        doc.insert(MAX_LOCATION_ID.to_string(), valid_location());
        let locations = Locations::from_value(&Value::Object(doc.clone())).unwrap();
        assert!(locations.get(MAX_LOCATION_ID).is_some());

        let past = MAX_LOCATION_ID + 1;
        doc.insert(past.to_string(), valid_location());
        let err = Locations::from_value(&Value::Object(doc)).unwrap_err();
        assert!(
            matches!(&err, ModelError::LocationIdOutOfRange { id, .. } if *id == past),
            "unexpected error: {err:?}"
        );

        // Folder keys only order folders and are not bounded
        let mut entry = valid_location();
        entry["folders"] = serde_json::json!({ "4000000000": { "name": "Far", "files": [] } });
        assert!(Locations::from_value(&location(entry)).is_ok());
    }

    #[test]
    fn test_invalid_keys() {
        for key in ["-1", "one", "+1", "", "1.5"] {
            let mut doc = serde_json::Map::new();
            doc.insert(key.to_string(), valid_location());

            let err = Locations::from_value(&Value::Object(doc)).unwrap_err();
            assert!(
                matches!(&err, ModelError::InvalidKey { key: bad, .. } if bad == key),
                "unexpected error for {key:?}: {err:?}"
            );
        }
    }

    #[test]
    fn test_duplicate_numeric_keys() {
        let mut entry = valid_location();
        entry["folders"] = serde_json::json!({
            "1": { "name": "a", "files": [] },
            "01": { "name": "b", "files": [] }
        });

        let err = Locations::from_value(&location(entry)).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateKey { key: 1, .. }));
    }

    #[test]
    fn test_top_level_scalar() {
        let err = Locations::from_json_str("42").unwrap_err();
        assert!(matches!(err, ModelError::InvalidType { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = Locations::from_json_str("{ \"0\": ").unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));
    }

    #[test]
    fn test_unknown_type_is_kept() {
        let mut entry = valid_location();
        entry["type"] = Value::from("Tape");

        let locations = Locations::from_value(&location(entry)).unwrap();
        assert_eq!(
            locations.get(0).unwrap().kind(),
            &LocationKind::Other("Tape".to_string())
        );
    }
}
