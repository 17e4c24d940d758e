// src/selection.rs
//! 1-based index lists as typed by users: `"1,2,3"`, `"2-4, 7"`.

use std::collections::HashSet;

use crate::{
    Error, Result,
    config::{consts::MAX_SELECTION_INDEX, options::Selector},
};

/// Parse a comma list of 1-based indices and inclusive ranges.
/// Order of first appearance is kept; repeats are dropped.
/// Range checks against a concrete list happen in [`select_by_indices`];
/// here an index past `MAX_SELECTION_INDEX` is an error, so a range can
/// never expand into more than that many entries.
pub fn parse_index_list(s: &str) -> Result<Vec<usize>> {
    let mut out: Vec<usize> = Vec::new();
    let mut seen: HashSet<usize> = HashSet::new();

    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if let Some((a, b)) = part.split_once('-') {
            let a = parse_one(a, part)?;
            let b = parse_one(b, part)?;
            if a > b { return Err(Error::Selection(format!("invalid range: {part}"))); }
            for v in a..=b {
                if seen.insert(v) { out.push(v); }
            }
        } else {
            let v = parse_one(part, part)?;
            if seen.insert(v) { out.push(v); }
        }
    }
    Ok(out)
}

fn parse_one(s: &str, whole: &str) -> Result<usize> {
    let v: usize = s
        .trim()
        .parse()
        .map_err(|_| Error::Selection(format!("not a number: {whole:?}")))?;
    if v > MAX_SELECTION_INDEX {
        return Err(Error::Selection(format!("{whole:?} goes past {MAX_SELECTION_INDEX}")));
    }
    Ok(v)
}

/// Items picked by index, plus the indices that didn't point at anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selected<T> {
    pub items: Vec<T>,
    pub rejected: Vec<usize>,
}

/// Pick 1-based `indices` from `items`. Out-of-range indices (including 0)
/// are collected in `rejected`; the rest are returned in the given order.
pub fn select_by_indices<T: Clone>(items: &[T], indices: &[usize]) -> Selected<T> {
    let mut picked = Vec::with_capacity(indices.len());
    let mut rejected = Vec::new();
    for &ix in indices {
        match ix.checked_sub(1).and_then(|i| items.get(i)) {
            Some(item) => picked.push(item.clone()),
            None => rejected.push(ix),
        }
    }
    Selected { items: picked, rejected }
}

pub fn resolve<T: Clone>(selector: &Selector, items: &[T]) -> Selected<T> {
    match selector {
        Selector::All => Selected { items: items.to_vec(), rejected: Vec::new() },
        Selector::Indices(ix) => select_by_indices(items, ix),
    }
}

/// `"all"` (or blank) → `Selector::All`, otherwise an index list.
pub fn parse_selector(s: &str) -> Result<Selector> {
    let t = s.trim();
    if t.is_empty() || t.eq_ignore_ascii_case("all") {
        return Ok(Selector::All);
    }
    Ok(Selector::Indices(parse_index_list(t)?))
}
