use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use tavola_application::BookingUseCase;
use tavola_core::reservation::TimeWindow;
use tavola_interaction::HttpApiClient;

use super::book::TerminalCalendar;
use super::render::print_events;

/// Prints the occupancy of a restaurant, optionally within a window.
pub async fn run(
    client: HttpApiClient,
    restaurant_id: i64,
    window: Option<(String, String)>,
) -> Result<()> {
    let mut usecase = BookingUseCase::new(
        restaurant_id,
        Arc::new(client),
        Arc::new(TerminalCalendar),
    );
    if let Some((start, end)) = window {
        usecase = usecase.with_window(TimeWindow::new(&start, &end));
    }

    let count = usecase.refresh().await?;
    println!(
        "{}",
        format!("Restaurant #{restaurant_id}: {count} reservation(s)").bright_magenta()
    );
    print_events(&usecase.calendar_events().await);
    Ok(())
}
