// tests/selection.rs
use maps_scrape::config::options::{KeywordFilter, Selector};
use maps_scrape::selection::{parse_index_list, parse_selector, resolve, select_by_indices};

#[test]
fn index_lists_with_ranges() {
    assert_eq!(parse_index_list("1, 3,5-7").unwrap(), vec![1, 3, 5, 6, 7]);
    assert_eq!(parse_index_list("4,2,4,1-2").unwrap(), vec![4, 2, 1]);
    assert_eq!(parse_index_list(" ").unwrap(), Vec::<usize>::new());
    assert!(parse_index_list("3-1").is_err());
    assert!(parse_index_list("a,b").is_err());
}

#[test]
fn huge_ranges_fail_fast_instead_of_expanding() {
    use std::time::{Duration, Instant};
    use maps_scrape::config::consts::MAX_SELECTION_INDEX;

    let started = Instant::now();
    for huge in ["1-200000", "1-4294967295", "18446744073709551615", "2,5-99999999999"] {
        assert!(parse_index_list(huge).is_err(), "{huge}");
    }
    assert!(started.elapsed() < Duration::from_secs(1));

    let widest = parse_index_list(&format!("1-{MAX_SELECTION_INDEX}")).unwrap();
    assert_eq!(widest.len(), MAX_SELECTION_INDEX);
    assert_eq!(parse_index_list(&format!("{MAX_SELECTION_INDEX},1-3,2")).unwrap(), vec![MAX_SELECTION_INDEX, 1, 2, 3]);
}

#[test]
fn out_of_range_indices_are_rejected_not_fatal() {
    let items = vec!["a", "b", "c"];
    let sel = select_by_indices(&items, &[0, 2, 9, 3]);
    assert_eq!(sel.items, vec!["b", "c"]);
    assert_eq!(sel.rejected, vec![0, 9]);
}

#[test]
fn selectors() {
    assert_eq!(parse_selector("all").unwrap(), Selector::All);
    assert_eq!(parse_selector("").unwrap(), Selector::All);
    assert_eq!(parse_selector("2-3").unwrap(), Selector::Indices(vec![2, 3]));

    let items = vec![10, 20, 30];
    assert_eq!(resolve(&Selector::All, &items).items, items);
    assert_eq!(resolve(&Selector::Indices(vec![3]), &items).items, vec![30]);
}

#[test]
fn keyword_filter_is_case_insensitive_substring() {
    let kws: Vec<String> = ["Bar de tapas", "Cafetería", "Restaurante", "barbería"].iter().map(|s| s.to_string()).collect();

    assert_eq!(KeywordFilter::parse("all").apply(&kws), kws);
    assert_eq!(KeywordFilter::parse("BAR").apply(&kws), vec!["Bar de tapas", "barbería"]);
    assert_eq!(KeywordFilter::parse("cafe, resta").apply(&kws), vec!["Cafetería", "Restaurante"]);
    assert_eq!(KeywordFilter::parse(" , ").describe(), "all");
    assert_eq!(KeywordFilter::parse("a, B").describe(), "a,b");
}
