use crate::domain::models::KeywordRecord;
use regex_lite::Regex;
use std::collections::HashSet;

pub const MAX_SUGGESTIONS: usize = 6;

/// Lexical suggestion lookup over the keyword catalog.
///
/// Passes run in precedence order (exact, substring, whole token, word
/// boundary). Labels keep the order in which they first matched, duplicates
/// are dropped and the result is capped at [`MAX_SUGGESTIONS`]. Rows without
/// match text never match.
pub fn match_suggestions(query: &str, catalog: &[KeywordRecord]) -> Vec<String> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let boundary = match Regex::new(&format!(r"\b{}\b", regex_lite::escape(&needle))) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(query = %needle, error = %e, "word boundary pattern rejected");
            None
        }
    };

    let passes: [&dyn Fn(&str) -> bool; 4] = [
        &|text: &str| text == needle,
        &|text: &str| text.contains(needle.as_str()),
        &|text: &str| text.split(' ').any(|token| token == needle),
        &|text: &str| boundary.as_ref().is_some_and(|re| re.is_match(text)),
    ];

    let mut seen = HashSet::new();
    let mut labels = Vec::new();

    for pass in passes {
        for record in catalog {
            if labels.len() == MAX_SUGGESTIONS {
                return labels;
            }
            let Some(text) = record.match_text.as_deref() else {
                continue;
            };
            if pass(text) && seen.insert(record.label.as_str()) {
                labels.push(record.label.clone());
            }
        }
    }

    labels
}
