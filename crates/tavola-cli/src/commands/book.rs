use std::sync::Arc;

use anyhow::{Result, bail};
use colored::Colorize;
use tavola_application::BookingUseCase;
use tavola_core::reservation::{BookingForm, CalendarSurface, SelectionRange, SubmitOutcome};
use tavola_interaction::HttpApiClient;

use super::render::print_events;

/// Calendar surface for the terminal: there is no widget state to clear,
/// the next render simply omits the highlight.
pub struct TerminalCalendar;

impl CalendarSurface for TerminalCalendar {
    fn clear_selection(&self) {
        tracing::debug!("Terminal calendar selection cleared");
    }
}

pub struct BookingRequest {
    pub start: String,
    pub end: String,
    pub name: String,
    pub guests: u32,
}

/// Selects the requested range, shows it against current occupancy and
/// submits the booking once.
pub async fn run(client: HttpApiClient, restaurant_id: i64, request: BookingRequest) -> Result<()> {
    let usecase = BookingUseCase::new(restaurant_id, Arc::new(client), Arc::new(TerminalCalendar));

    if let Err(err) = usecase.refresh().await {
        eprintln!("{}", format!("Could not load reservations: {err}").yellow());
    }

    usecase.select(SelectionRange::new(request.start, request.end))?;
    println!("{}", format!("Restaurant #{restaurant_id}").bright_magenta());
    print_events(&usecase.calendar_events().await);

    let outcome = usecase
        .submit(BookingForm::new(request.name, request.guests))
        .await?;

    match outcome {
        SubmitOutcome::Booked { .. } => {
            println!("{}", "Reservation confirmed.".bright_green());
            print_events(&usecase.calendar_events().await);
        }
        SubmitOutcome::Failed { reason } => bail!("Reservation failed: {reason}"),
        SubmitOutcome::Stale => {
            tracing::warn!("Submission result arrived for a superseded request");
        }
    }
    Ok(())
}
