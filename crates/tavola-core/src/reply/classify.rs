//! Line classification for assistant replies.

use once_cell::sync::Lazy;
use regex::Regex;

use super::model::RestaurantSummary;

/// `- <name> (Rating: <int>, Distance: <int>, Price: <int>, Cuisine: <text>)`
///
/// Digits are matched as ASCII only; the name and cuisine captures are greedy.
static RECOMMENDATION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^- (.*) \(Rating: ([0-9]+), Distance: ([0-9]+), Price: ([0-9]+), Cuisine: (.*)\)$",
    )
    .expect("recommendation pattern is valid")
});

/// Classification of a single reply line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// The line is a structured restaurant recommendation.
    Recommendation(RestaurantSummary),
    /// Anything else; carries the line as written.
    Prose(&'a str),
}

/// Classifies one line of reply text.
///
/// Never fails: a line that does not match the recommendation grammar is
/// prose.
///
/// Unlike a bare `$`-anchored match, a trailing `\r` is stripped before
/// matching, so CRLF replies classify the same way as LF replies. A strict
/// matcher would treat such lines as prose.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let candidate = line.strip_suffix('\r').unwrap_or(line);

    match RECOMMENDATION_LINE.captures(candidate) {
        Some(caps) => LineKind::Recommendation(RestaurantSummary {
            name: caps[1].to_string(),
            rating: caps[2].to_string(),
            distance: caps[3].to_string(),
            price: caps[4].to_string(),
            cuisine: caps[5].to_string(),
        }),
        None => LineKind::Prose(line),
    }
}
