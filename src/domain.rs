use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// How a location was inferred from an event name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// A key from the known-location table appears in the name
    ExactLocation,
    /// A name pattern (or the last-resort token scan) produced the location
    PatternExtracted,
    /// The name denotes a ranking list or championship grouping
    NoLocation,
    Unknown,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::ExactLocation => "exact_location",
            MatchType::PatternExtracted => "pattern_extracted",
            MatchType::NoLocation => "no_location",
            MatchType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of location extraction for a single event name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLocationInfo {
    /// Canonical location name, if one could be determined
    pub location: Option<String>,
    /// One of 1.0, 0.7 or 0.0
    pub confidence: f64,
    pub match_type: MatchType,
    /// The name after prefix and whitespace cleanup (casing, years and sponsors kept)
    pub normalized_name: String,
}

/// Structural fingerprint of a matching-normalized event name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCoreComponents {
    /// Space-separated words longer than two characters
    pub words: HashSet<String>,
    /// Star-rating tokens such as "4*", in order of appearance
    pub star_ratings: Vec<String>,
    pub has_qualifier: bool,
    pub has_challenger: bool,
    pub has_open: bool,
    pub has_faces: bool,
    pub has_week: bool,
    pub has_freeride: bool,
}

impl EventCoreComponents {
    pub fn flags(&self) -> [bool; 6] {
        [
            self.has_qualifier,
            self.has_challenger,
            self.has_open,
            self.has_faces,
            self.has_week,
            self.has_freeride,
        ]
    }
}

/// One competition result of an athlete, as returned by the results store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteResult {
    pub event_name: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub points: Option<f64>,
}

/// Results that belong to the same recurring competition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventHistoryGroup {
    /// Canonical location, or the matching-normalized name when no location is known
    pub key: String,
    pub location: Option<String>,
    pub match_type: MatchType,
    /// Newest first
    pub results: Vec<AthleteResult>,
    /// Distinct known years, newest first
    pub years: Vec<u32>,
}

/// Classification of one historical candidate against a current event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalMatch {
    pub candidate: String,
    pub score: f64,
    pub is_match: bool,
}
