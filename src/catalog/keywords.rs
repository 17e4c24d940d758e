// src/catalog/keywords.rs
use std::{fs, path::Path};

use super::{CatalogEntry, EntryKind, compose_file_name, list_entries, next_prefix};
use crate::{Error, Result, core::sanitize::{normalize_ws, sanitize_component}, file::ensure_directory};

/// One keyword per line. Lines are trimmed; blank lines are dropped.
pub fn read_keywords(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_keywords(&text))
}

pub fn parse_keywords(text: &str) -> Vec<String> {
    text.lines()
        .map(|l| normalize_ws(l.trim_start_matches('\u{feff}')))
        .filter(|l| !l.is_empty())
        .collect()
}

/// Write a new category file with the next free prefix and return its entry.
pub fn create_keyword_file(dir: &Path, name: &str, keywords: &[String]) -> Result<CatalogEntry> {
    let name = sanitize_component(name);
    if name.is_empty() {
        return Err(Error::Invalid(s!("category name is empty")));
    }

    let keywords: Vec<String> = keywords
        .iter()
        .map(|k| normalize_ws(k))
        .filter(|k| !k.is_empty())
        .collect();
    if keywords.is_empty() {
        return Err(Error::Invalid(format!("category {name:?} has no keywords")));
    }

    ensure_directory(dir)?;
    let existing = list_entries(dir, EntryKind::Keywords)?;
    if existing.iter().any(|e| e.name == name) {
        return Err(Error::Invalid(format!("category {name:?} already exists")));
    }

    let prefix = next_prefix(&existing)?;
    let path = dir.join(compose_file_name(prefix, EntryKind::Keywords, &name));

    let mut body = keywords.join("\n");
    body.push('\n');
    fs::write(&path, body)?;

    logf!("Catalog: Created category {} ({} keywords) → {}", name, keywords.len(), path.display());
    Ok(CatalogEntry { prefix, name, path })
}
