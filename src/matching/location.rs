use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::normalize::normalize_event_name;
use crate::constants::{
    CONFIDENCE_EXACT, CONFIDENCE_NONE, CONFIDENCE_PATTERN, FALLBACK_STOPLIST, KNOWN_LOCATIONS,
    LOCATION_CLASS_PATTERN, LOCATION_YEAR_PATTERN, NON_LOCATION_PATTERNS, PATTERN_STOPLIST,
    YEAR_LOCATION_CLASS_PATTERN,
};
use crate::domain::{EventLocationInfo, MatchType};

static NON_LOCATION: Lazy<Vec<Regex>> = Lazy::new(|| {
    NON_LOCATION_PATTERNS
        .iter()
        .map(|pattern| Regex::new(&format!("(?i){pattern}")).expect("non-location regex"))
        .collect()
});

static YEAR_LOCATION_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(YEAR_LOCATION_CLASS_PATTERN).expect("year/location/class regex"));

static LOCATION_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(LOCATION_YEAR_PATTERN).expect("location/year regex"));

static LOCATION_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(LOCATION_CLASS_PATTERN).expect("location/class regex"));

static ALPHABETIC_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("alphabetic word regex"));

static NUMBER_OR_STAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\*?$").expect("star rating regex"));

/// Derive a canonical location from an event name.
///
/// Priority: ranking-list names first (no location), then the known-location
/// table, then name patterns, then a single-word fallback.
pub fn extract_location_info(event_name: &str) -> EventLocationInfo {
    let normalized = normalize_event_name(event_name);
    let lowered = normalized.to_lowercase();

    if is_non_location_event(&lowered) {
        trace!(name = %normalized, "ranking list or grouping, no location");
        return EventLocationInfo {
            location: None,
            confidence: CONFIDENCE_NONE,
            match_type: MatchType::NoLocation,
            normalized_name: normalized,
        };
    }

    if let Some(location) = lookup_known_location(&lowered) {
        trace!(name = %normalized, location, "known location");
        return EventLocationInfo {
            location: Some(location.to_string()),
            confidence: CONFIDENCE_EXACT,
            match_type: MatchType::ExactLocation,
            normalized_name: normalized,
        };
    }

    if let Some(location) = extract_by_pattern(&normalized).or_else(|| fallback_token(&normalized)) {
        trace!(name = %normalized, location = %location, "pattern-extracted location");
        return EventLocationInfo {
            location: Some(location),
            confidence: CONFIDENCE_PATTERN,
            match_type: MatchType::PatternExtracted,
            normalized_name: normalized,
        };
    }

    trace!(name = %normalized, "no location found");
    EventLocationInfo {
        location: None,
        confidence: CONFIDENCE_NONE,
        match_type: MatchType::Unknown,
        normalized_name: normalized,
    }
}

fn is_non_location_event(lowered: &str) -> bool {
    NON_LOCATION.iter().any(|re| re.is_match(lowered))
}

/// Substring containment, so "xtreme" hits inside any longer token
fn lookup_known_location(lowered: &str) -> Option<&'static str> {
    KNOWN_LOCATIONS
        .iter()
        .find(|(key, _)| lowered.contains(key))
        .map(|(_, canonical)| *canonical)
}

fn extract_by_pattern(name: &str) -> Option<String> {
    let year_first = YEAR_LOCATION_CLASS
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|candidate| {
            !PATTERN_STOPLIST.contains(&candidate.to_lowercase().as_str())
                && candidate.chars().count() > 2
        });
    if let Some(candidate) = year_first {
        return Some(candidate.to_string());
    }

    if let Some(candidate) = LOCATION_YEAR.captures(name).and_then(|caps| caps.get(1)) {
        return Some(candidate.as_str().trim().to_string());
    }

    LOCATION_CLASS
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|candidate| candidate.chars().count() > 2)
        .map(str::to_string)
}

fn fallback_token(name: &str) -> Option<String> {
    name.split(' ')
        .find(|word| {
            ALPHABETIC_WORD.is_match(word)
                && word.chars().count() > 3
                && !FALLBACK_STOPLIST.contains(&word.to_lowercase().as_str())
                && !NUMBER_OR_STAR.is_match(word)
        })
        .map(str::to_string)
}
