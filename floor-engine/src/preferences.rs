//! Special-request parsing
//!
//! Extracts structured seating intent from the free text a guest typed when
//! joining. Matching is deliberately lenient (e.g. "table 5" also matches
//! inside longer words); staff-facing behavior depends on that exact
//! leniency, so it is preserved rather than tightened.

use std::sync::LazyLock;

use regex::Regex;

/// "table 5", "Table5", "#5", "# 5"; first match wins
static TABLE_REQUEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"table\s*(\d+)|#\s*(\d+)").unwrap());

/// "near <name>": everything after the keyword is the name
static NEAR_REQUEST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)near\s+(.+)").unwrap());

/// Structured seating intent, derived on demand and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPreference {
    pub requested_table_id: Option<i64>,
    pub near_guest_name: Option<String>,
}

/// Parse a special-request string into a [`ParsedPreference`].
///
/// Both extractions run independently on the same input and may both be
/// present. Unmatched or absent input yields an all-absent result; there
/// are no error conditions.
pub fn parse_special_requests(requests: Option<&str>) -> ParsedPreference {
    let Some(text) = requests else {
        return ParsedPreference::default();
    };

    let lowered = text.to_lowercase();
    let requested_table_id = TABLE_REQUEST.captures(&lowered).and_then(|caps| {
        let digits = caps.get(1).or_else(|| caps.get(2))?;
        digits.as_str().parse().ok()
    });

    // Run against the original-case text so the captured name keeps its
    // spelling; a phrase that trims to nothing counts as no request.
    let near_guest_name = NEAR_REQUEST.captures(text).and_then(|caps| {
        let name = caps[1].trim();
        (!name.is_empty()).then(|| name.to_string())
    });

    ParsedPreference {
        requested_table_id,
        near_guest_name,
    }
}
