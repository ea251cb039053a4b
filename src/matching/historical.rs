use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::normalize::normalize_event_for_matching;
use crate::constants::{
    CONTENT_FLAG_TOKENS, CONTENT_FLAG_WEIGHT, HISTORICAL_MATCH_THRESHOLD, MAIN_SERIES_MARKERS,
    STAR_RATING_WEIGHT, SUBSERIES_MARKERS, WORD_OVERLAP_WEIGHT,
};
use crate::domain::EventCoreComponents;

static STAR_RATING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+\*").expect("star rating regex"));

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"20[0-9]{2}").expect("year regex"));

/// Decides whether two event names are different editions of one recurring competition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalMatcher {
    threshold: f64,
}

impl Default for HistoricalMatcher {
    fn default() -> Self {
        Self {
            threshold: HISTORICAL_MATCH_THRESHOLD,
        }
    }
}

impl HistoricalMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matcher with a custom score threshold (a match needs a score strictly above it)
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Identical raw strings are the same instance, never a historical recurrence
    pub fn matches(&self, current_event: &str, historical_event: &str) -> bool {
        if current_event == historical_event {
            return false;
        }

        let current = normalize_event_for_matching(current_event);
        let historical = normalize_event_for_matching(historical_event);
        if current == historical {
            debug!(current = %current_event, historical = %historical_event, "normalized names equal");
            return true;
        }

        let score = calculate_event_core_similarity(&current, &historical);
        debug!(current = %current_event, historical = %historical_event, score, "similarity scored");
        score > self.threshold
    }

    /// Similarity of the two raw names after matching normalization
    pub fn score(&self, current_event: &str, historical_event: &str) -> f64 {
        let current = normalize_event_for_matching(current_event);
        let historical = normalize_event_for_matching(historical_event);
        if current == historical {
            return 1.0;
        }
        calculate_event_core_similarity(&current, &historical)
    }
}

/// True when `historical_event` is another edition of `current_event`
pub fn events_match_historically(current_event: &str, historical_event: &str) -> bool {
    HistoricalMatcher::default().matches(current_event, historical_event)
}

/// Fingerprint a matching-normalized name
pub fn event_core_components(normalized: &str) -> EventCoreComponents {
    let words = normalized
        .split(' ')
        .filter(|word| word.chars().count() > 2)
        .map(str::to_string)
        .collect();
    let star_ratings = STAR_RATING
        .find_iter(normalized)
        .map(|m| m.as_str().to_string())
        .collect();

    let [qualifier, challenger, open, faces, week, freeride] = CONTENT_FLAG_TOKENS;
    EventCoreComponents {
        words,
        star_ratings,
        has_qualifier: normalized.contains(qualifier),
        has_challenger: normalized.contains(challenger),
        has_open: normalized.contains(open),
        has_faces: normalized.contains(faces),
        has_week: normalized.contains(week),
        has_freeride: normalized.contains(freeride),
    }
}

/// Weighted similarity in [0, 1] of two matching-normalized names.
///
/// Word overlap (Jaccard) weighs 0.7 and star ratings 0.1, each counted only
/// when at least one side has any; the six content flags always count for 0.2.
pub fn calculate_event_core_similarity(first: &str, second: &str) -> f64 {
    let a = event_core_components(first);
    let b = event_core_components(second);

    let mut score = 0.0;
    let mut max_score = 0.0;

    if !a.words.is_empty() || !b.words.is_empty() {
        let intersection = a.words.intersection(&b.words).count() as f64;
        let union = a.words.union(&b.words).count() as f64;
        score += WORD_OVERLAP_WEIGHT * (intersection / union);
        max_score += WORD_OVERLAP_WEIGHT;
    }

    if !a.star_ratings.is_empty() || !b.star_ratings.is_empty() {
        if a.star_ratings == b.star_ratings {
            score += STAR_RATING_WEIGHT;
        }
        max_score += STAR_RATING_WEIGHT;
    }

    let flags_a = a.flags();
    let flags_b = b.flags();
    let matching_flags = flags_a.iter().zip(flags_b.iter()).filter(|(x, y)| x == y).count();
    score += CONTENT_FLAG_WEIGHT * (matching_flags as f64 / flags_a.len() as f64);
    max_score += CONTENT_FLAG_WEIGHT;

    score / max_score
}

/// First 20xx in the name, if any
pub fn year_in_name(name: &str) -> Option<u32> {
    YEAR.find(name).and_then(|m| m.as_str().parse().ok())
}

/// First 20xx in the name, or 0 when there is none
pub fn extract_year_from_name(name: &str) -> u32 {
    year_in_name(name).unwrap_or(0)
}

/// Main tour events, excluding qualifier, challenger and junior series
pub fn is_main_series(name: &str) -> bool {
    let lowered = name.to_lowercase();
    MAIN_SERIES_MARKERS.iter().any(|marker| lowered.contains(marker))
        && !SUBSERIES_MARKERS.iter().any(|marker| lowered.contains(marker))
}
