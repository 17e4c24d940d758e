// src/catalog/mod.rs
//! Keyword and location definitions on disk.
//!
//! Both live as flat text files named `<prefix>_<kind>_<name>.txt` under
//! `keywords/` and `location/`. The numeric prefix fixes the order users see
//! (and the 1-based indices the CLI accepts); the name is what gets printed
//! and what ends up in job names and result file names.
//!
//! Files that don't follow the pattern are skipped with a log line rather than
//! failing the whole listing.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    Error, Result,
    config::consts::{CATALOG_EXT, KEYWORDS_DIR, KEYWORDS_MARKER, LOCATION_DIR, LOCATION_MARKER},
};

mod keywords;
mod location;

pub use keywords::{create_keyword_file, parse_keywords, read_keywords};
pub use location::{Location, create_location_file, read_location};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    Keywords,
    Location,
}

impl EntryKind {
    pub fn marker(self) -> &'static str {
        match self {
            EntryKind::Keywords => KEYWORDS_MARKER,
            EntryKind::Location => LOCATION_MARKER,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub prefix: u32,
    pub name: String,
    pub path: PathBuf,
}

impl CatalogEntry {
    pub fn file_name(&self) -> String {
        crate::file::display_name(&self.path)
    }
}

/// Split `12_keywords_bares.txt` into `(12, "bares")`.
/// The extension must be exactly `.txt` and the name dot-free, so leftovers
/// like `2_keywords_bares.txt.bak` or `3_keywords_cafes.csv` don't parse.
pub fn parse_file_name(file_name: &str, kind: EntryKind) -> Option<(u32, String)> {
    let (prefix, rest) = file_name.split_once('_')?;
    let prefix: u32 = prefix.trim().parse().ok()?;
    let rest = rest.strip_prefix(kind.marker())?.strip_prefix('_')?;
    let name = rest.strip_suffix(CATALOG_EXT)?.strip_suffix('.')?.trim();
    if name.is_empty() || name.contains('.') {
        return None;
    }
    Some((prefix, s!(name)))
}

/// Canonical file name for a new entry.
pub fn compose_file_name(prefix: u32, kind: EntryKind, name: &str) -> String {
    format!("{prefix}_{}_{name}.{CATALOG_EXT}", kind.marker())
}

/// List entries of one kind, ascending by numeric prefix (ties by name).
/// A missing directory is an empty catalog, not an error.
pub fn list_entries(dir: &Path, kind: EntryKind) -> Result<Vec<CatalogEntry>> {
    if !dir.exists() {
        logd!("Catalog: {} missing, nothing to list", dir.display());
        return Ok(Vec::new());
    }

    let mut out = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() { continue; }

        let Some(file_name) = path.file_name().and_then(|s| s.to_str()) else { continue };
        match parse_file_name(file_name, kind) {
            Some((prefix, name)) => out.push(CatalogEntry { prefix, name, path }),
            None => logd!("Catalog: Skipping {:?} (not <n>_{}_<name>)", file_name, kind.marker()),
        }
    }

    out.sort_by(|a, b| a.prefix.cmp(&b.prefix).then_with(|| a.name.cmp(&b.name)));
    Ok(out)
}

pub fn list_keyword_files(dir: &Path) -> Result<Vec<CatalogEntry>> {
    list_entries(dir, EntryKind::Keywords)
}

pub fn list_location_files(dir: &Path) -> Result<Vec<CatalogEntry>> {
    list_entries(dir, EntryKind::Location)
}

/// One past the highest prefix in use; 1 for an empty directory.
pub fn next_prefix(entries: &[CatalogEntry]) -> Result<u32> {
    match entries.iter().map(|e| e.prefix).max() {
        None => Ok(1),
        Some(m) => m
            .checked_add(1)
            .ok_or_else(|| Error::Invalid(format!("no prefix left after {m}, renumber the files"))),
    }
}

/// Both listings for one working root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    pub categories: Vec<CatalogEntry>,
    pub locations: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn load(root: &Path) -> Result<Self> {
        let categories = list_keyword_files(&root.join(KEYWORDS_DIR))?;
        let locations = list_location_files(&root.join(LOCATION_DIR))?;
        logf!(
            "Catalog: Loaded {} categories, {} locations from {}",
            categories.len(),
            locations.len(),
            root.display()
        );
        Ok(Self { categories, locations })
    }

    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|e| e.name.clone()).collect()
    }

    pub fn location_names(&self) -> Vec<String> {
        self.locations.iter().map(|e| e.name.clone()).collect()
    }
}
