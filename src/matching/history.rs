use chrono::Datelike;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::historical::{extract_year_from_name, is_main_series, HistoricalMatcher};
use super::location::extract_location_info;
use super::normalize::normalize_event_for_matching;
use crate::domain::{AthleteResult, EventHistoryGroup, HistoricalMatch};
use crate::error::Result;

/// Read an athlete's results from a JSON array file
pub fn load_results(path: &Path) -> Result<Vec<AthleteResult>> {
    let content = fs::read_to_string(path)?;
    let results: Vec<AthleteResult> = serde_json::from_str(&content)?;
    debug!(path = %path.display(), results = results.len(), "results loaded");
    Ok(results)
}

/// Score every candidate against the current event, keeping candidate order
pub fn find_historical_matches(
    matcher: &HistoricalMatcher,
    current_event: &str,
    candidates: &[String],
) -> Vec<HistoricalMatch> {
    candidates
        .iter()
        .map(|candidate| HistoricalMatch {
            candidate: candidate.clone(),
            score: matcher.score(current_event, candidate),
            is_match: matcher.matches(current_event, candidate),
        })
        .collect()
}

/// Explicit year, else the date's year, else a year in the event name (0 if none)
pub fn result_year(result: &AthleteResult) -> u32 {
    result
        .year
        .or_else(|| result.date.and_then(|date| u32::try_from(date.year()).ok()))
        .unwrap_or_else(|| extract_year_from_name(&result.event_name))
}

/// Group an athlete's results by recurring competition.
///
/// Results with a known or extracted location are keyed by it. The rest join
/// the first location-less group whose representative event is the same
/// competition, or open a new group keyed by the matching-normalized name.
pub fn group_results_by_location(
    matcher: &HistoricalMatcher,
    results: &[AthleteResult],
) -> Vec<EventHistoryGroup> {
    let mut groups: Vec<EventHistoryGroup> = Vec::new();

    for result in results {
        let info = extract_location_info(&result.event_name);

        let index = match &info.location {
            Some(location) => groups
                .iter()
                .position(|group| group.location.as_deref() == Some(location.as_str())),
            None => {
                let key = normalize_event_for_matching(&result.event_name);
                groups.iter().position(|group| {
                    group.location.is_none()
                        && (group.key == key
                            || group.results.first().is_some_and(|representative| {
                                matcher.matches(&representative.event_name, &result.event_name)
                            }))
                })
            }
        };

        match index {
            Some(index) => groups[index].results.push(result.clone()),
            None => {
                let key = info
                    .location
                    .clone()
                    .unwrap_or_else(|| normalize_event_for_matching(&result.event_name));
                debug!(key = %key, match_type = %info.match_type, "new history group");
                groups.push(EventHistoryGroup {
                    key,
                    location: info.location,
                    match_type: info.match_type,
                    results: vec![result.clone()],
                    years: Vec::new(),
                });
            }
        }
    }

    for group in &mut groups {
        group.results.sort_by_key(|result| std::cmp::Reverse(result_year(result)));
        group.years = group.results.iter().map(result_year).filter(|year| *year > 0).collect();
        group.years.dedup();
    }

    groups.sort_by(|a, b| {
        let latest_a = a.years.first().copied().unwrap_or(0);
        let latest_b = b.years.first().copied().unwrap_or(0);
        latest_b.cmp(&latest_a).then_with(|| a.key.cmp(&b.key))
    });

    groups
}

/// Only main tour results
pub fn main_series_results(results: &[AthleteResult]) -> Vec<AthleteResult> {
    results
        .iter()
        .filter(|result| is_main_series(&result.event_name))
        .cloned()
        .collect()
}
