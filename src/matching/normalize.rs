use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{ORGANIZATION_PREFIX_PATTERN, SPONSOR_BRAND_TOKENS};

static ORGANIZATION_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(ORGANIZATION_PREFIX_PATTERN).expect("organization prefix regex"));

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

static YEAR_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b20[0-9]{2}\b").expect("year token regex"));

// The terminal class word is captured and written back, so only the sponsor clause is dropped.
static SPONSOR_CLAUSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s+by\s+[a-z][a-z\s]*?(\s+(?:qualifier|challenger|open|championship)|$)")
        .expect("sponsor clause regex")
});

fn collapse_whitespace(name: &str) -> String {
    WHITESPACE_RUN.replace_all(name, " ").trim().to_string()
}

fn strip_organization_prefix(name: &str) -> String {
    ORGANIZATION_PREFIX.replace(name, "").into_owned()
}

/// Display normalization: drops one leading FWT/IFSA tag and collapses whitespace.
/// Casing, years and sponsor tokens are kept.
pub fn normalize_event_name(name: &str) -> String {
    let stripped = strip_organization_prefix(name.trim());
    collapse_whitespace(&stripped)
}

/// Matching normalization, used only to compare event names.
///
/// Removes every 20xx year, one leading organization tag, a trailing
/// "by <Sponsor>" clause and a leading sponsor-brand word, then collapses
/// whitespace and lowercases.
pub fn normalize_event_for_matching(name: &str) -> String {
    let mut normalized = name.trim().to_string();

    normalized = YEAR_TOKEN.replace_all(&normalized, "").into_owned();
    // a leading year leaves a space in front of the organization tag
    normalized = strip_organization_prefix(normalized.trim_start());
    normalized = SPONSOR_CLAUSE.replace(&normalized, "$1").into_owned();
    normalized = drop_leading_sponsor_word(&normalized);

    collapse_whitespace(&normalized).to_lowercase()
}

fn drop_leading_sponsor_word(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    if words.len() <= 2 {
        return name.to_string();
    }

    let first = words[0].to_lowercase();
    if SPONSOR_BRAND_TOKENS.iter().any(|token| first.contains(token)) {
        words[1..].join(" ")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_normalization_strips_prefix() {
        assert_eq!(normalize_event_name("FWT - Chamonix 2024 Qualifier"), "Chamonix 2024 Qualifier");
        assert_eq!(normalize_event_name("ifsa-Kappl Open"), "Kappl Open");
        assert_eq!(normalize_event_name("  FWT   Verbier   Xtreme "), "Verbier Xtreme");
    }

    #[test]
    fn test_display_normalization_strips_only_one_prefix() {
        assert_eq!(normalize_event_name("FWT IFSA Revelstoke"), "IFSA Revelstoke");
    }

    #[test]
    fn test_display_normalization_keeps_case_and_year() {
        assert_eq!(
            normalize_event_name("Open Faces Obertauern 2023 by Peak Performance"),
            "Open Faces Obertauern 2023 by Peak Performance"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_event_name(""), "");
        assert_eq!(normalize_event_for_matching(""), "");
        assert_eq!(normalize_event_for_matching("   "), "");
    }

    #[test]
    fn test_matching_removes_years_and_prefix() {
        assert_eq!(
            normalize_event_for_matching("FWT Chamonix 2023 Open Faces Qualifier"),
            "chamonix open faces qualifier"
        );
    }

    #[test]
    fn test_matching_strips_prefix_behind_leading_year() {
        assert_eq!(normalize_event_for_matching("2024 FWT Chamonix Open"), "chamonix open");
        assert_eq!(normalize_event_for_matching("2023 IFSA - Kappl Open Faces"), "kappl open faces");
    }

    #[test]
    fn test_matching_removes_sponsor_clause() {
        assert_eq!(normalize_event_for_matching("Xtreme Verbier by Dynastar"), "xtreme verbier");
        assert_eq!(
            normalize_event_for_matching("Obertauern by Peak Performance Qualifier 2024"),
            "obertauern qualifier"
        );
    }

    #[test]
    fn test_matching_drops_leading_sponsor_word() {
        assert_eq!(
            normalize_event_for_matching("Salomon Kappl Freeride Qualifier"),
            "kappl freeride qualifier"
        );
        // two words or fewer are left alone
        assert_eq!(normalize_event_for_matching("Salomon Kappl"), "salomon kappl");
    }

    #[test]
    fn test_matching_is_idempotent() {
        for name in [
            "FWT Chamonix 2023 Open Faces Qualifier",
            "IFSA - Kicking Horse 2* Junior 2021",
            "Xtreme Verbier 2022 by Dynastar",
            "Freeride Week at Hochfügen 3* Challenger",
            "2024 FWT Chamonix Open",
            "",
        ] {
            let once = normalize_event_for_matching(name);
            assert_eq!(normalize_event_for_matching(&once), once, "not idempotent for {name:?}");
        }
    }
}
