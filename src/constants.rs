//! Fixed lookup tables shared by the normalizer, the location extractor and the
//! historical matcher. Everything here is read-only.

// Confidence levels attached to a location inference
pub const CONFIDENCE_EXACT: f64 = 1.0;
pub const CONFIDENCE_PATTERN: f64 = 0.7;
pub const CONFIDENCE_NONE: f64 = 0.0;

/// Two differently-labelled events are the same competition above this score
pub const HISTORICAL_MATCH_THRESHOLD: f64 = 0.85;

// Similarity term weights
pub const WORD_OVERLAP_WEIGHT: f64 = 0.7;
pub const STAR_RATING_WEIGHT: f64 = 0.1;
pub const CONTENT_FLAG_WEIGHT: f64 = 0.2;

/// Organization tag stripped from the front of an event name (one occurrence only)
pub const ORGANIZATION_PREFIX_PATTERN: &str = r"(?i)^(?:FWT|IFSA)\s*-?\s*";

/// Brand fragments that mark a leading sponsor word, e.g. "Dynastar Chamonix Qualifier"
pub const SPONSOR_BRAND_TOKENS: &[&str] = &[
    "dynastar",
    "salomon",
    "atomic",
    "rossignol",
    "volkl",
    "k2",
    "peak",
    "performance",
    "orage",
    "north",
    "face",
];

/// Lowercase substring -> canonical venue name.
/// Order matters: the first key contained in a name wins.
pub const KNOWN_LOCATIONS: &[(&str, &str)] = &[
    ("chamonix", "Chamonix"),
    ("verbier", "Verbier"),
    ("xtreme", "Verbier"),
    ("fieberbrunn", "Fieberbrunn"),
    ("kicking horse", "Kicking Horse"),
    ("revelstoke", "Revelstoke"),
    ("andorra", "Ordino"),
    ("ordino", "Ordino"),
    ("baqueira", "Baqueira"),
    ("obertauern", "Obertauern"),
    ("la clusaz", "La Clusaz"),
];

/// Names matching any of these denote a ranking list or grouping, not a venue
pub const NON_LOCATION_PATTERNS: &[&str] = &[
    r"freeride'?her",
    r"world championship",
    r"qualifying list",
    r"national rankings",
    r"challenger by \w+",
    r"region [0-9]+ [a-z-]+",
];

/// Year, then location, then a class word: "2024 Kappl Open Faces"
pub const YEAR_LOCATION_CLASS_PATTERN: &str =
    r"(?i)^[0-9]{4}\s+([A-Za-z][A-Za-z\s]+?)(?:\s+(?:Challenger|Qualifier|Open|Freeride|by))";

/// Location, then year: "Kappl 2024"
pub const LOCATION_YEAR_PATTERN: &str = r"^([A-Za-z][A-Za-z\s]+?)\s+[0-9]{4}";

/// Location ahead of a class word, optionally after "Freeride Week at"
pub const LOCATION_CLASS_PATTERN: &str =
    r"(?i)(?:Freeride\s+Week\s+(?:at\s+)?)?([A-Za-z][A-Za-z\s]+?)(?:\s+(?:Challenger|Qualifier|by|Freeride))";

/// Captured locations that are really class or filler words
pub const PATTERN_STOPLIST: &[&str] = &[
    "open", "freeride", "week", "by", "faces", "the", "and", "of", "in",
];

/// Words the last-resort token scan never returns as a location
pub const FALLBACK_STOPLIST: &[&str] = &[
    "open",
    "freeride",
    "week",
    "faces",
    "challenger",
    "qualifier",
];

pub const MAIN_SERIES_MARKERS: &[&str] = &["pro tour", "world tour", "freeride world tour"];
pub const SUBSERIES_MARKERS: &[&str] = &["qualifier", "challenger", "junior"];

/// Boolean content flags compared during similarity scoring, in fingerprint order
pub const CONTENT_FLAG_TOKENS: [&str; 6] = [
    "qualifier",
    "challenger",
    "open",
    "faces",
    "week",
    "freeride",
];
