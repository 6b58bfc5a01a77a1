//! Projection of reservations and the live selection into calendar events.

use serde::{Deserialize, Serialize};

use super::model::{Reservation, SelectionRange};

/// Fixed id of the selection highlight, so re-renders replace it.
pub const SELECTION_EVENT_ID: &str = "current-selection";

const OCCUPIED_TITLE: &str = "Occupied";

/// What an event stands for on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayKind {
    Occupied,
    SelectionHighlight,
}

/// How the calendar lays the event out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventDisplay {
    /// A regular block in the time grid.
    Block,
    /// A marker painted behind other events.
    Background,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStyle {
    pub background_color: String,
    pub border_color: String,
    pub text_color: String,
    pub display: EventDisplay,
    /// Whether the user may drag or resize the event.
    pub editable: bool,
}

impl EventStyle {
    /// Greyed-out, non-interactive block.
    fn blocked() -> Self {
        Self {
            background_color: "#e0e0e0".to_string(),
            border_color: "#bdbdbd".to_string(),
            text_color: "#757575".to_string(),
            display: EventDisplay::Block,
            editable: false,
        }
    }

    fn highlight() -> Self {
        Self {
            background_color: "#bbdefb".to_string(),
            border_color: "#64b5f6".to_string(),
            text_color: "#0d47a1".to_string(),
            display: EventDisplay::Background,
            editable: false,
        }
    }
}

/// A renderable calendar event. Recomputed on every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub display_kind: DisplayKind,
    pub style: EventStyle,
}

/// Maps known reservations plus the live selection to calendar events.
///
/// Every reservation becomes one `Occupied` event, in input order. A
/// selection, when present, is appended as exactly one `SelectionHighlight`
/// event with the fixed [`SELECTION_EVENT_ID`]. The two kinds are never
/// deduplicated against each other; they may overlap on the surface.
pub fn project_occupancy(
    reservations: &[Reservation],
    selection: Option<&SelectionRange>,
) -> Vec<CalendarEvent> {
    let mut events: Vec<CalendarEvent> = reservations
        .iter()
        .map(|reservation| CalendarEvent {
            id: reservation.id.to_string(),
            title: OCCUPIED_TITLE.to_string(),
            start: reservation.start_time.clone(),
            end: reservation.end_time.clone(),
            display_kind: DisplayKind::Occupied,
            style: EventStyle::blocked(),
        })
        .collect();

    if let Some(selection) = selection {
        events.push(CalendarEvent {
            id: SELECTION_EVENT_ID.to_string(),
            title: String::new(),
            start: selection.start.clone(),
            end: selection.end.clone(),
            display_kind: DisplayKind::SelectionHighlight,
            style: EventStyle::highlight(),
        });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservations(n: i64) -> Vec<Reservation> {
        (1..=n)
            .map(|id| Reservation {
                id,
                start_time: format!("2025-01-{:02}T18:00:00", id),
                end_time: format!("2025-01-{:02}T19:00:00", id),
            })
            .collect()
    }

    fn highlights(events: &[CalendarEvent]) -> usize {
        events
            .iter()
            .filter(|e| e.display_kind == DisplayKind::SelectionHighlight)
            .count()
    }

    #[test]
    fn test_one_event_per_reservation_without_selection() {
        for n in [0, 1, 5] {
            let events = project_occupancy(&reservations(n), None);
            assert_eq!(events.len(), n as usize);
            assert_eq!(highlights(&events), 0);
        }
    }

    #[test]
    fn test_selection_adds_exactly_one_highlight() {
        let selection = SelectionRange::new("2025-01-02T18:30:00-05:00", "2025-01-02T19:30:00-05:00");
        for n in [0, 3] {
            let events = project_occupancy(&reservations(n), Some(&selection));
            assert_eq!(events.len(), n as usize + 1);
            assert_eq!(highlights(&events), 1);

            let last = events.last().unwrap();
            assert_eq!(last.id, SELECTION_EVENT_ID);
            assert_eq!(last.style.display, EventDisplay::Background);
            assert_eq!(last.start, selection.start);
        }
    }

    #[test]
    fn test_occupied_events_are_blocked() {
        let events = project_occupancy(&reservations(2), None);
        assert_eq!(events[0].id, "1");
        assert_eq!(events[1].title, "Occupied");
        assert!(events.iter().all(|e| !e.style.editable));
        assert!(events.iter().all(|e| e.style.display == EventDisplay::Block));
    }

    #[test]
    fn test_overlap_is_not_deduplicated() {
        let existing = reservations(1);
        let selection = SelectionRange::new(existing[0].start_time.clone(), existing[0].end_time.clone());
        let events = project_occupancy(&existing, Some(&selection));
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_event_json_shape() {
        let events = project_occupancy(&reservations(1), None);
        let json = serde_json::to_value(&events[0]).unwrap();
        assert_eq!(json["displayKind"], "occupied");
        assert_eq!(json["style"]["backgroundColor"], "#e0e0e0");
        assert_eq!(json["style"]["display"], "block");
    }
}
