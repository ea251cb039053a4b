//! Event-name matching: normalization, location extraction and
//! recognition of recurring competitions across seasons.

pub mod historical;
pub mod history;
pub mod location;
pub mod normalize;

pub use historical::{
    calculate_event_core_similarity, event_core_components, events_match_historically,
    extract_year_from_name, is_main_series, year_in_name, HistoricalMatcher,
};
pub use history::{
    find_historical_matches, group_results_by_location, load_results, main_series_results,
    result_year,
};
pub use location::extract_location_info;
pub use normalize::{normalize_event_for_matching, normalize_event_name};
