pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod logging;
pub mod matching;

pub use domain::{AthleteResult, EventCoreComponents, EventHistoryGroup, EventLocationInfo, HistoricalMatch, MatchType};
pub use error::{MatcherError, Result};
pub use matching::{
    events_match_historically, extract_location_info, extract_year_from_name, is_main_series,
    normalize_event_for_matching, normalize_event_name, HistoricalMatcher,
};
