//! Grouping pass over classified reply lines.

use super::classify::{LineKind, classify_line};
use super::model::ParsedElement;

/// Interprets the full text of one assistant reply.
///
/// Lines are classified one by one. Consecutive prose lines are gathered
/// into a single trimmed `Text` element, and every recommendation line
/// becomes its own `Restaurant` element, in input order. Blank prose
/// blocks are dropped, so the result is empty only when the input holds no
/// visible text.
///
/// # Examples
///
/// ```
/// use tavola_core::reply::{ParsedElement, interpret_reply};
///
/// let elements = interpret_reply("Try this:\n- Zaza (Rating: 4, Distance: 3, Price: 12, Cuisine: Thai)");
/// assert_eq!(elements.len(), 2);
/// assert_eq!(elements[0], ParsedElement::text("Try this:"));
/// assert_eq!(elements[1].as_restaurant().unwrap().name, "Zaza");
/// ```
pub fn interpret_reply(text: &str) -> Vec<ParsedElement> {
    let mut elements = Vec::new();
    let mut prose = String::new();

    for line in text.split('\n') {
        match classify_line(line) {
            LineKind::Recommendation(summary) => {
                flush_prose(&mut prose, &mut elements);
                elements.push(ParsedElement::Restaurant(summary));
            }
            LineKind::Prose(line) => {
                prose.push_str(line);
                prose.push('\n');
            }
        }
    }
    flush_prose(&mut prose, &mut elements);

    tracing::trace!(elements = elements.len(), "Interpreted assistant reply");
    elements
}

fn flush_prose(buffer: &mut String, elements: &mut Vec<ParsedElement>) {
    let content = buffer.trim();
    if !content.is_empty() {
        elements.push(ParsedElement::text(content));
    }
    buffer.clear();
}
