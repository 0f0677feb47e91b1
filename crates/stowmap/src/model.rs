//! Input model: storage locations, their folders and files.
//!
//! The model is read-only once built. Locations and folders are keyed by
//! non-negative integers and always iterate in ascending key order, whatever
//! order they were inserted or written in the source document.
//!
//! # Overview
//!
//! - [`Locations`] - the keyed collection handed to the layout
//! - [`LocationModel`] - one drive, computer or server
//! - [`FolderModel`] - a named list of files inside a location
//! - [`LocationKind`] - the location type, which decides file colors
//!
//! Models are built programmatically or loaded from JSON with
//! [`Locations::from_json_str`], which validates the document first and
//! reports the first malformed entity as a [`ModelError`].

mod json;

pub use json::ModelError;

use std::{collections::BTreeMap, fmt};

/// The type of a storage location.
///
/// Unknown type strings are kept verbatim in [`LocationKind::Other`] rather
/// than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocationKind {
    Drive,
    Computer,
    Server,
    Other(String),
}

impl LocationKind {
    /// Returns the type name as written in source documents
    pub fn as_str(&self) -> &str {
        match self {
            Self::Drive => "Drive",
            Self::Computer => "Computer",
            Self::Server => "Server",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for LocationKind {
    fn from(name: &str) -> Self {
        match name {
            "Drive" => Self::Drive,
            "Computer" => Self::Computer,
            "Server" => Self::Server,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named group of files inside a location.
///
/// File names are kept in order and never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FolderModel {
    name: String,
    files: Vec<String>,
}

impl FolderModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
        }
    }

    /// Appends a file (builder style)
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.files.push(file.into());
        self
    }

    /// Appends several files in order (builder style)
    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files.extend(files.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }
}

/// A top-level storage location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationModel {
    id: u32,
    name: String,
    kind: LocationKind,
    folders: BTreeMap<u32, FolderModel>,
    loose_files: Vec<String>,
    shared_files: Vec<String>,
    shared_folders: BTreeMap<u32, FolderModel>,
}

impl LocationModel {
    pub fn new(id: u32, name: impl Into<String>, kind: LocationKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            folders: BTreeMap::new(),
            loose_files: Vec::new(),
            shared_files: Vec::new(),
            shared_folders: BTreeMap::new(),
        }
    }

    /// Adds a folder under `key`, replacing any folder already stored there
    pub fn with_folder(mut self, key: u32, folder: FolderModel) -> Self {
        self.folders.insert(key, folder);
        self
    }

    /// Appends a file that lives outside any folder
    pub fn with_loose_file(mut self, file: impl Into<String>) -> Self {
        self.loose_files.push(file.into());
        self
    }

    /// Appends a file shared with other locations
    pub fn with_shared_file(mut self, file: impl Into<String>) -> Self {
        self.shared_files.push(file.into());
        self
    }

    /// Adds a shared folder under `key`. Shared folders are carried as data only.
    pub fn with_shared_folder(mut self, key: u32, folder: FolderModel) -> Self {
        self.shared_folders.insert(key, folder);
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &LocationKind {
        &self.kind
    }

    /// Folders in ascending key order
    pub fn folders(&self) -> impl ExactSizeIterator<Item = (u32, &FolderModel)> {
        self.folders.iter().map(|(key, folder)| (*key, folder))
    }

    pub fn loose_files(&self) -> &[String] {
        &self.loose_files
    }

    pub fn shared_files(&self) -> &[String] {
        &self.shared_files
    }

    /// Shared folders in ascending key order
    pub fn shared_folders(&self) -> impl ExactSizeIterator<Item = (u32, &FolderModel)> {
        self.shared_folders.iter().map(|(key, folder)| (*key, folder))
    }
}

/// The keyed collection of locations, iterated in ascending id order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Locations {
    locations: BTreeMap<u32, LocationModel>,
}

impl Locations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a location under its own id, returning the location it replaced
    pub fn insert(&mut self, location: LocationModel) -> Option<LocationModel> {
        self.locations.insert(location.id(), location)
    }

    /// Inserts a location (builder style)
    pub fn with(mut self, location: LocationModel) -> Self {
        self.insert(location);
        self
    }

    pub fn get(&self, id: u32) -> Option<&LocationModel> {
        self.locations.get(&id)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Locations in ascending id order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &LocationModel> {
        self.locations.values()
    }
}

impl FromIterator<LocationModel> for Locations {
    fn from_iter<I: IntoIterator<Item = LocationModel>>(iter: I) -> Self {
        let mut locations = Self::new();
        for location in iter {
            locations.insert(location);
        }
        locations
    }
}
