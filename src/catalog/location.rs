// src/catalog/location.rs
use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use super::{CatalogEntry, EntryKind, compose_file_name, list_entries, next_prefix};
use crate::{Error, Result, core::sanitize::sanitize_component, file::ensure_directory};

/// Map view a job is centred on. Latitude and longitude stay strings: they are
/// sent to the server exactly as written in the file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub zoom: u32,
    pub lat: String,
    pub lon: String,
}

impl Location {
    /// Lines 1..=3 are zoom, latitude, longitude. Anything after is ignored.
    pub fn parse(text: &str) -> std::result::Result<Self, String> {
        let lines: Vec<&str> = text.lines().take(3).collect();
        if lines.len() < 3 {
            return Err(format!("expected 3 lines (zoom, lat, lon), found {}", lines.len()));
        }

        let zoom_txt = lines[0].trim_start_matches('\u{feff}').trim();
        let zoom: u32 = zoom_txt
            .parse()
            .map_err(|_| format!("zoom must be an integer, got {zoom_txt:?}"))?;

        let lat = lines[1].trim();
        let lon = lines[2].trim();
        if lat.is_empty() { return Err(s!("latitude is empty")); }
        if lon.is_empty() { return Err(s!("longitude is empty")); }

        Ok(Self { zoom, lat: s!(lat), lon: s!(lon) })
    }

    /// Stricter check used before writing a new file: coordinates must be numbers in range.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let lat: f64 = self.lat.trim().parse().map_err(|_| format!("latitude {:?} is not a number", self.lat))?;
        let lon: f64 = self.lon.trim().parse().map_err(|_| format!("longitude {:?} is not a number", self.lon))?;
        if !(-90.0..=90.0).contains(&lat) { return Err(format!("latitude {lat} out of range")); }
        if !(-180.0..=180.0).contains(&lon) { return Err(format!("longitude {lon} out of range")); }
        if self.zoom > 21 { return Err(format!("zoom {} out of range (0-21)", self.zoom)); }
        Ok(())
    }

    pub fn to_file_text(&self) -> String {
        format!("{}\n{}\n{}\n", self.zoom, self.lat.trim(), self.lon.trim())
    }
}

pub fn read_location(path: &Path) -> Result<Location> {
    let text = fs::read_to_string(path)?;
    Location::parse(&text).map_err(|reason| Error::Location { path: path.to_path_buf(), reason })
}

/// Write a new location file with the next free prefix and return its entry.
pub fn create_location_file(dir: &Path, name: &str, location: &Location) -> Result<CatalogEntry> {
    let name = sanitize_component(name);
    if name.is_empty() {
        return Err(Error::Invalid(s!("location name is empty")));
    }
    location.validate().map_err(Error::Invalid)?;

    ensure_directory(dir)?;
    let existing = list_entries(dir, EntryKind::Location)?;
    if existing.iter().any(|e| e.name == name) {
        return Err(Error::Invalid(format!("location {name:?} already exists")));
    }

    let prefix = next_prefix(&existing)?;
    let path = dir.join(compose_file_name(prefix, EntryKind::Location, &name));
    fs::write(&path, location.to_file_text())?;

    logf!("Catalog: Created location {} (zoom {}, {}, {}) → {}",
        name, location.zoom, location.lat, location.lon, path.display());
    Ok(CatalogEntry { prefix, name, path })
}
