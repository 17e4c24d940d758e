// tests/catalog.rs
//
// Listing, parsing and creating keyword / location files.
mod common;

use std::fs;

use common::{tmp_dir, write_catalog};
use maps_scrape::catalog::{
    self, Catalog, EntryKind, Location, create_keyword_file, create_location_file,
    list_keyword_files, list_location_files, next_prefix, parse_file_name, read_keywords,
    read_location,
};
use maps_scrape::Error;

#[test]
fn file_names_split_into_prefix_and_name() {
    assert_eq!(parse_file_name("12_keywords_bares.txt", EntryKind::Keywords), Some((12, "bares".into())));
    assert_eq!(parse_file_name("3_location_Madrid_Centro.txt", EntryKind::Location), Some((3, "Madrid_Centro".into())));
    assert_eq!(parse_file_name("x_keywords_bares.txt", EntryKind::Keywords), None);
    assert_eq!(parse_file_name("1_location_bares.txt", EntryKind::Keywords), None);
    assert_eq!(parse_file_name("1_keywords_.txt", EntryKind::Keywords), None);
    assert_eq!(parse_file_name("2_keywords_bares.txt.bak", EntryKind::Keywords), None);
    assert_eq!(parse_file_name("3_keywords_cafes.csv", EntryKind::Keywords), None);
    assert_eq!(parse_file_name("4_keywords_a.b.txt", EntryKind::Keywords), None);
    assert_eq!(parse_file_name("5_keywords_bares", EntryKind::Keywords), None);
}

#[test]
fn listing_orders_by_prefix_and_skips_strays() {
    let dir = tmp_dir("catalog_order");
    let kw = dir.join("keywords");
    fs::create_dir_all(&kw).unwrap();
    fs::write(kw.join("10_keywords_zeta.txt"), "z\n").unwrap();
    fs::write(kw.join("2_keywords_beta.txt"), "b\n").unwrap();
    fs::write(kw.join("2_keywords_alpha.txt"), "a\n").unwrap();
    fs::write(kw.join("README.md"), "not a category").unwrap();
    fs::write(kw.join("3_keywords_beta.txt.bak"), "old b\n").unwrap();
    fs::write(kw.join("12_keywords_cafes.csv"), "c\n").unwrap();

    let entries = list_keyword_files(&kw).unwrap();
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["alpha", "beta", "zeta"]);
    assert_eq!(next_prefix(&entries).unwrap(), 11);
}

#[test]
fn missing_directory_is_an_empty_listing() {
    let dir = tmp_dir("catalog_missing");
    assert!(list_location_files(&dir.join("nope")).unwrap().is_empty());
    assert_eq!(next_prefix(&[]).unwrap(), 1);
}

#[test]
fn keywords_are_trimmed_and_blank_lines_dropped() {
    let dir = tmp_dir("catalog_keywords");
    let path = dir.join("1_keywords_x.txt");
    fs::write(&path, "\u{feff}  bar de tapas \n\n\tcafetería\r\n   \n").unwrap();
    assert_eq!(read_keywords(&path).unwrap(), vec!["bar de tapas", "cafetería"]);
}

#[test]
fn location_needs_three_valid_lines() {
    let ok = Location::parse("14\n40.4168\n-3.7038\n").unwrap();
    assert_eq!(ok, Location { zoom: 14, lat: "40.4168".into(), lon: "-3.7038".into() });

    assert!(Location::parse("14\n40.4").is_err());
    assert!(Location::parse("fourteen\n40.4\n-3.7").is_err());
    assert!(Location::parse("14\n \n-3.7").is_err());

    let dir = tmp_dir("catalog_bad_location");
    let path = dir.join("1_location_bad.txt");
    fs::write(&path, "12\n").unwrap();
    match read_location(&path) {
        Err(Error::Location { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected a location error, got {other:?}"),
    }
}

#[test]
fn created_files_get_the_next_prefix() {
    let root = tmp_dir("catalog_create");
    write_catalog(&root, &[("bares", "bar\n")], &[("madrid", "12\n40.4\n-3.7\n")]);

    let kw_dir = root.join("keywords");
    let entry = create_keyword_file(&kw_dir, "Cafés y teterías", &["café".into(), " té ".into(), "".into()]).unwrap();
    assert_eq!(entry.prefix, 2);
    assert_eq!(entry.name, "Cafés_y_teterías");
    assert_eq!(entry.file_name(), "2_keywords_Cafés_y_teterías.txt");
    assert_eq!(read_keywords(&entry.path).unwrap(), vec!["café", "té"]);

    let dup = create_keyword_file(&kw_dir, "bares", &["x".into()]);
    assert!(matches!(dup, Err(Error::Invalid(_))));
    assert!(create_keyword_file(&kw_dir, "vacía", &[]).is_err());
    assert!(create_keyword_file(&kw_dir, "...", &["x".into()]).is_err());

    let loc_dir = root.join("location");
    let loc = Location { zoom: 13, lat: "41.3874".into(), lon: "2.1686".into() };
    let entry = create_location_file(&loc_dir, "Barcelona", &loc).unwrap();
    assert_eq!(entry.prefix, 2);
    assert_eq!(read_location(&entry.path).unwrap(), loc);

    let bad = Location { zoom: 13, lat: "95".into(), lon: "2".into() };
    assert!(create_location_file(&loc_dir, "Nowhere", &bad).is_err());

    let cat = Catalog::load(&root).unwrap();
    assert_eq!(cat.category_names(), vec!["bares", "Cafés_y_teterías"]);
    assert_eq!(cat.location_names(), vec!["madrid", "Barcelona"]);
}

#[test]
fn prefix_space_running_out_is_an_error() {
    let root = tmp_dir("catalog_prefix_max");
    let kw = root.join("keywords");
    fs::create_dir_all(&kw).unwrap();
    fs::write(kw.join(format!("{}_keywords_last.txt", u32::MAX)), "x\n").unwrap();

    let entries = list_keyword_files(&kw).unwrap();
    assert_eq!(entries[0].prefix, u32::MAX);
    assert!(matches!(next_prefix(&entries), Err(Error::Invalid(_))));

    let made = create_keyword_file(&kw, "otra", &["y".into()]);
    assert!(matches!(made, Err(Error::Invalid(_))));
    assert_eq!(list_keyword_files(&kw).unwrap().len(), 1);
}

#[test]
fn compose_matches_parse() {
    let name = catalog::compose_file_name(7, EntryKind::Location, "Sevilla");
    assert_eq!(name, "7_location_Sevilla.txt");
    assert_eq!(parse_file_name(&name, EntryKind::Location), Some((7, "Sevilla".into())));
}
