//! Object name resolution for gallery matches.
//!
//! FaceX reports the matched object's name in a legacy field that some
//! versions fill with a `{GUID}` placeholder. The real name then lives in
//! the fourth component of the parsed object path. When neither yields a
//! name, a synthetic one is built from the first path component.

use regex::Regex;
use std::sync::LazyLock;

use crate::facex::responses::MatchedFaceEntry;

static PLACEHOLDER_GUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\{[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12}\}$",
    )
    .expect("valid regex")
});

/// Index of the path component holding the name when `nameL` is a placeholder.
const NAME_PATH_COMPONENT: usize = 3;

/// Resolve the display name of a matched gallery object.
pub fn resolve(entry: &MatchedFaceEntry) -> String {
    let name = if PLACEHOLDER_GUID.is_match(&entry.name_l) {
        entry
            .path_parsed
            .get(NAME_PATH_COMPONENT)
            .map(String::as_str)
            .unwrap_or_default()
    } else {
        entry.name_l.as_str()
    };

    if name.is_empty() {
        let first = entry.path_parsed.first().map(String::as_str).unwrap_or_default();
        return strip_braces(&fallback_name(first)).to_string();
    }

    strip_braces(name).to_string()
}

/// `!1-0-<N>-0`, where N is the integer the first path component starts
/// with once colons are removed (`"12ab"` gives 12). A component with no
/// leading digits gives `NaN`.
fn fallback_name(first_component: &str) -> String {
    let text: String = first_component.chars().filter(|c| *c != ':').collect();
    format!("!1-0-{}-0", leading_integer(&text))
}

fn leading_integer(text: &str) -> String {
    let text = text.trim_start();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => ("-", &text[1..]),
        Some(b'+') => ("", &text[1..]),
        _ => ("", text),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return "NaN".to_string();
    }

    match digits.trim_start_matches('0') {
        "" => "0".to_string(),
        significant => format!("{sign}{significant}"),
    }
}

fn strip_braces(name: &str) -> &str {
    let name = name.strip_prefix('{').unwrap_or(name);
    name.strip_suffix("}#")
        .or_else(|| name.strip_suffix('}'))
        .unwrap_or(name)
}
