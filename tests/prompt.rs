// tests/prompt.rs
use std::io::Cursor;

use maps_scrape::Error;
use maps_scrape::prompt::{Prompter, is_yes};

fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(p.into_output()).unwrap()
}

fn names(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn defaults_apply_on_blank_or_bad_input() {
    let mut p = prompter("\n  custom \n\nabc\n250\n");
    assert_eq!(p.ask_default("Host", "http://localhost:8000").unwrap(), "http://localhost:8000");
    assert_eq!(p.ask_default("Name", "Job").unwrap(), "custom");
    assert_eq!(p.ask_number_default("Radius", 10_000u32).unwrap(), 10_000);
    assert_eq!(p.ask_number_default("Depth", 10u32).unwrap(), 10);
    assert_eq!(p.ask_number_default("Max", 15u32).unwrap(), 250);
    assert!(output(p).contains("Not a valid number, using 10"));
}

#[test]
fn confirmation_accepts_english_and_spanish() {
    for yes in ["y", "YES", "s", "si", "Sí"] {
        assert!(is_yes(yes), "{yes}");
    }
    for no in ["n", "no", "", "ok"] {
        assert!(!is_yes(no), "{no}");
    }
    let mut p = prompter("s\nn\n");
    assert!(p.confirm("Go?").unwrap());
    assert!(!p.confirm("Go?").unwrap());
}

#[test]
fn choose_one_reprompts_until_valid() {
    let mut p = prompter("0\nfoo\n4\n2\n");
    let ix = p.choose_one("Locations", &names(&["madrid", "sevilla", "bilbao"])).unwrap();
    assert_eq!(ix, 1);
    let out = output(p);
    assert_eq!(out.matches("Invalid option").count(), 3);
    assert!(out.contains("3. bilbao"));
}

#[test]
fn closed_input_is_an_error() {
    let mut p = prompter("9\n");
    let err = p.choose_one("Categories", &names(&["a", "b"])).unwrap_err();
    assert!(matches!(err, Error::InputClosed));
}

#[test]
fn choose_many_variants() {
    let items = names(&["a", "b", "c", "d"]);

    let mut p = prompter("all\n");
    assert_eq!(p.choose_many(&items).unwrap(), vec![0, 1, 2, 3]);

    let mut p = prompter("2, 4\n");
    assert_eq!(p.choose_many(&items).unwrap(), vec![1, 3]);

    let mut p = prompter("1-2,9\n");
    assert_eq!(p.choose_many(&items).unwrap(), vec![0, 1]);
    assert!(output(p).contains("Ignoring 9"));

    let mut p = prompter("what\n");
    assert_eq!(p.choose_many(&items).unwrap(), vec![0]);

    let mut p = prompter("7\n");
    assert_eq!(p.choose_many(&items).unwrap(), vec![0]);

    let mut p = prompter("3-5000\n");
    assert_eq!(p.choose_many(&items).unwrap(), vec![2, 3]);
    assert!(output(p).contains("Ignoring 4996 indices"));

    let mut p = prompter("1-4294967295\n");
    assert_eq!(p.choose_many(&items).unwrap(), vec![0]);
    assert!(output(p).contains("Invalid selection"));
}
