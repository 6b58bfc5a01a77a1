use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tavola_core::reservation::{
    BookingForm, CalendarSurface, DisplayKind, Reservation, ReservationWorkflow, SelectionRange,
    SubmitOutcome, project_occupancy,
};

#[derive(Default)]
struct FlagCalendar {
    cleared: AtomicBool,
}

impl CalendarSurface for FlagCalendar {
    fn clear_selection(&self) {
        self.cleared.store(true, Ordering::SeqCst);
    }
}

fn existing() -> Vec<Reservation> {
    vec![
        Reservation {
            id: 10,
            start_time: "2025-01-10T12:00:00".into(),
            end_time: "2025-01-10T13:00:00".into(),
        },
        Reservation {
            id: 11,
            start_time: "2025-01-10T20:00:00".into(),
            end_time: "2025-01-10T21:00:00".into(),
        },
    ]
}

fn highlight_count(reservations: &[Reservation], workflow: &ReservationWorkflow) -> usize {
    project_occupancy(reservations, workflow.selection())
        .iter()
        .filter(|e| e.display_kind == DisplayKind::SelectionHighlight)
        .count()
}

#[test]
fn test_highlight_follows_the_workflow() {
    let calendar = Arc::new(FlagCalendar::default());
    let mut workflow = ReservationWorkflow::new(5, calendar.clone());
    let reservations = existing();

    assert_eq!(highlight_count(&reservations, &workflow), 0);

    workflow
        .on_select(SelectionRange::new(
            "2025-01-10T18:00:00-05:00",
            "2025-01-10T19:00:00-05:00",
        ))
        .unwrap();
    assert_eq!(highlight_count(&reservations, &workflow), 1);

    // Failure keeps the highlight so the user can retry in place.
    let pending = workflow.on_submit(BookingForm::new("Grace", 4)).unwrap();
    assert_eq!(highlight_count(&reservations, &workflow), 1);
    workflow.on_submit_result(pending.ticket, Err("Server error: 400".into()));
    assert_eq!(highlight_count(&reservations, &workflow), 1);
    assert!(!calendar.cleared.load(Ordering::SeqCst));

    let retry = workflow.on_submit(BookingForm::new("Grace", 4)).unwrap();
    let outcome = workflow.on_submit_result(retry.ticket, Ok(()));

    assert_eq!(outcome, SubmitOutcome::Booked { restaurant_id: 5 });
    assert_eq!(highlight_count(&reservations, &workflow), 0);
    assert_eq!(project_occupancy(&reservations, workflow.selection()).len(), 2);
    assert!(calendar.cleared.load(Ordering::SeqCst));
}
