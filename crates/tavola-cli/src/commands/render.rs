//! Terminal rendering of chat elements, restaurants and calendar events.

use colored::Colorize;
use tavola_core::chat::{ChatMessage, Sender};
use tavola_core::reply::{ParsedElement, RestaurantSummary};
use tavola_core::reservation::{CalendarEvent, DisplayKind};
use tavola_core::search::Restaurant;

/// One restaurant as a compact card line.
pub fn format_summary(summary: &RestaurantSummary) -> String {
    format!(
        "  {} {}  {}  {}  {}",
        "*".bright_yellow(),
        summary.name.bold(),
        format!("rating {}", summary.rating).yellow(),
        format!("{} km, ${}", summary.distance, summary.price).bright_black(),
        summary.cuisine.cyan(),
    )
}

pub fn format_restaurant(restaurant: &Restaurant) -> String {
    let id = restaurant
        .id
        .map(|id| format!("#{id}"))
        .unwrap_or_else(|| "#?".to_string());
    format!(
        "{} {}  {}  {}  {}",
        id.bright_black(),
        restaurant.name.bold(),
        format!("rating {}", restaurant.rating).yellow(),
        format!("{} km, ${}", restaurant.distance, restaurant.price).bright_black(),
        restaurant.cuisine.cyan(),
    )
}

pub fn format_event(event: &CalendarEvent) -> String {
    let span = format!("{} -> {}", event.start, event.end);
    match event.display_kind {
        DisplayKind::Occupied => format!("  {} {}", span.bright_black(), event.title.bright_black()),
        DisplayKind::SelectionHighlight => format!("  {} {}", span.bright_cyan(), "(selected)".cyan()),
    }
}

/// Lines for one message, in display order.
pub fn format_message(message: &ChatMessage) -> Vec<String> {
    match message.sender {
        Sender::User => vec![format!("> {}", message.text).green().to_string()],
        Sender::Assistant if message.is_error => vec![message.text.red().to_string()],
        Sender::Assistant => message
            .elements()
            .iter()
            .flat_map(|element| match element {
                ParsedElement::Text(text) => text
                    .lines()
                    .map(|line| line.bright_blue().to_string())
                    .collect::<Vec<_>>(),
                ParsedElement::Restaurant(summary) => vec![format_summary(summary)],
            })
            .collect(),
    }
}

pub fn print_message(message: &ChatMessage) {
    for line in format_message(message) {
        println!("{line}");
    }
}

pub fn print_events(events: &[CalendarEvent]) {
    if events.is_empty() {
        println!("{}", "  (no reservations)".bright_black());
    }
    for event in events {
        println!("{}", format_event(event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tavola_core::reservation::{Reservation, SelectionRange, project_occupancy};

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_assistant_message_renders_cards() {
        plain();
        let message = ChatMessage::assistant(
            "Try these:\n- Luigi's (Rating: 4, Distance: 2, Price: 30, Cuisine: Italian)",
        );
        let lines = format_message(&message);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Try these:");
        assert!(lines[1].contains("Luigi's"));
        assert!(lines[1].contains("2 km, $30"));
    }

    #[test]
    fn test_error_message_is_not_interpreted() {
        plain();
        let message = ChatMessage::error("- X (Rating: 1, Distance: 1, Price: 1, Cuisine: Y)");
        let lines = format_message(&message);
        assert_eq!(lines, vec![message.text.clone()]);
    }

    #[test]
    fn test_event_lines() {
        plain();
        let reservations = vec![Reservation {
            id: 1,
            start_time: "2025-01-10T18:00:00".into(),
            end_time: "2025-01-10T19:00:00".into(),
        }];
        let selection = SelectionRange::new("2025-01-10T20:00:00", "2025-01-10T21:00:00");
        let events = project_occupancy(&reservations, Some(&selection));

        assert_eq!(
            format_event(&events[0]),
            "  2025-01-10T18:00:00 -> 2025-01-10T19:00:00 Occupied"
        );
        assert!(format_event(&events[1]).ends_with("(selected)"));
    }
}
