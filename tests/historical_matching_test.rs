use fwt_event_matcher::matching::find_historical_matches;
use fwt_event_matcher::{
    events_match_historically, extract_year_from_name, is_main_series,
    normalize_event_for_matching, HistoricalMatcher,
};

#[test]
fn test_same_event_different_year() {
    assert!(events_match_historically(
        "FWT Chamonix 2023 Open Faces Qualifier",
        "FWT Chamonix 2024 Open Faces Qualifier"
    ));
}

#[test]
fn test_identical_strings_are_not_historical() {
    for name in [
        "FWT Chamonix 2024 Open Faces Qualifier",
        "Freeride World Tour",
        "a",
    ] {
        assert!(!events_match_historically(name, name));
    }
}

#[test]
fn test_main_series() {
    assert!(is_main_series("Freeride World Tour"));
    assert!(!is_main_series("Freeride World Tour Qualifier"));
    assert!(!is_main_series("FWT Challenger by Orage"));
}

#[test]
fn test_year_extraction() {
    assert_eq!(extract_year_from_name("FWT Verbier 2022 Xtreme"), 2022);
    assert_eq!(extract_year_from_name("No Year Here"), 0);
}

#[test]
fn test_matching_normalization_idempotent() {
    for name in [
        "FWT Chamonix 2023 Open Faces Qualifier",
        "Obertauern by Peak Performance Qualifier 2024",
        "Salomon Kappl Freeride Qualifier",
        "IFSA - Revelstoke 4* 2019",
        "2024 FWT Chamonix Open",
    ] {
        let once = normalize_event_for_matching(name);
        assert_eq!(normalize_event_for_matching(&once), once);
    }
}

#[test]
fn test_year_first_names_match_their_series() {
    assert!(events_match_historically(
        "2024 FWT Chamonix Open",
        "FWT Chamonix Open 2023"
    ));
}

#[test]
fn test_candidate_classification() {
    let candidates = vec![
        "FWT Xtreme Verbier 2021".to_string(),
        "Xtreme Verbier 2022 by Dynastar".to_string(),
        "FWT Fieberbrunn 2022".to_string(),
    ];
    let matches = find_historical_matches(
        &HistoricalMatcher::default(),
        "FWT Xtreme Verbier 2024",
        &candidates,
    );

    let flags: Vec<bool> = matches.iter().map(|m| m.is_match).collect();
    assert_eq!(flags, vec![true, true, false]);
    assert!(matches.iter().all(|m| (0.0..=1.0).contains(&m.score)));
}
