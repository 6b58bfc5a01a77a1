//! Reservation booking use case.
//!
//! Wraps a [`ReservationWorkflow`] together with the restaurant's current
//! reservation list and a [`ReservationGateway`]. The workflow lock is never
//! held across the network call, so a second submit arriving while the first
//! is on the wire sees the in-flight ticket and is refused instead of queued.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tavola_core::error::Result;
use tavola_core::reservation::{
    BookingForm, CalendarEvent, CalendarSurface, Reservation, ReservationGateway,
    ReservationWorkflow, SelectionRange, SubmitOutcome, TimeWindow, WorkflowError, WorkflowPhase,
    project_occupancy,
};
use tokio::sync::RwLock;

/// Failure reason recorded when a submission is dropped before it completes.
pub const SUBMISSION_ABANDONED: &str = "Reservation request was abandoned before completing";

pub struct BookingUseCase {
    gateway: Arc<dyn ReservationGateway>,
    /// Only ever locked for synchronous transitions, never across `.await`.
    workflow: Mutex<ReservationWorkflow>,
    /// Externally owned; replaced wholesale on every refresh.
    reservations: RwLock<Vec<Reservation>>,
    window: Option<TimeWindow>,
}

fn lock(workflow: &Mutex<ReservationWorkflow>) -> MutexGuard<'_, ReservationWorkflow> {
    workflow.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Holds a submission ticket until its result is reported.
///
/// If the submitting future is dropped mid-request (timeout, `select!`), the
/// request is gone with it, so the ticket is released as a failure.
struct InFlightTicket<'a> {
    workflow: &'a Mutex<ReservationWorkflow>,
    ticket: Option<u64>,
}

impl InFlightTicket<'_> {
    fn report(mut self, result: std::result::Result<(), String>) -> SubmitOutcome {
        match self.ticket.take() {
            Some(ticket) => lock(self.workflow).on_submit_result(ticket, result),
            None => SubmitOutcome::Stale,
        }
    }
}

impl Drop for InFlightTicket<'_> {
    fn drop(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            tracing::warn!(ticket, "Reservation submission dropped before completion");
            lock(self.workflow).on_submit_result(ticket, Err(SUBMISSION_ABANDONED.to_string()));
        }
    }
}

impl BookingUseCase {
    pub fn new(
        restaurant_id: i64,
        gateway: Arc<dyn ReservationGateway>,
        calendar: Arc<dyn CalendarSurface>,
    ) -> Self {
        Self {
            gateway,
            workflow: Mutex::new(ReservationWorkflow::new(restaurant_id, calendar)),
            reservations: RwLock::new(Vec::new()),
            window: None,
        }
    }

    /// Limits reservation reads to the given window.
    pub fn with_window(mut self, window: TimeWindow) -> Self {
        self.window = Some(window);
        self
    }

    pub fn restaurant_id(&self) -> i64 {
        lock(&self.workflow).restaurant_id()
    }

    pub fn phase(&self) -> WorkflowPhase {
        lock(&self.workflow).phase().clone()
    }

    pub fn is_submitting(&self) -> bool {
        lock(&self.workflow).is_submitting()
    }

    pub async fn reservations(&self) -> Vec<Reservation> {
        self.reservations.read().await.clone()
    }

    /// Re-fetches the reservation list, replacing the cached one.
    ///
    /// # Returns
    ///
    /// The number of reservations now known.
    pub async fn refresh(&self) -> Result<usize> {
        let restaurant_id = self.restaurant_id();
        let fetched = self
            .gateway
            .list_reservations(restaurant_id, self.window.as_ref())
            .await?;
        let count = fetched.len();
        *self.reservations.write().await = fetched;

        tracing::debug!(restaurant_id, count, "Reservations refreshed");
        Ok(count)
    }

    pub fn select(&self, range: SelectionRange) -> std::result::Result<BookingForm, WorkflowError> {
        lock(&self.workflow).on_select(range)
    }

    pub fn cancel(&self) {
        lock(&self.workflow).on_cancel();
    }

    /// Validates and submits the booking prompt.
    ///
    /// Validation failures (including a submission already in flight) come
    /// back as `Err` without touching the network. Otherwise exactly one
    /// create request is sent; its result is reported as a
    /// [`SubmitOutcome`]. A successful booking triggers a refresh; a failed
    /// refresh is logged and does not change the outcome.
    ///
    /// Dropping the returned future before it resolves aborts the request
    /// and reports it as failed with [`SUBMISSION_ABANDONED`], so the
    /// workflow never stays busy.
    pub async fn submit(&self, form: BookingForm) -> Result<SubmitOutcome> {
        let pending = lock(&self.workflow).on_submit(form)?;
        let ticket = InFlightTicket {
            workflow: &self.workflow,
            ticket: Some(pending.ticket),
        };

        let result = self
            .gateway
            .create_reservation(&pending.draft)
            .await
            .map_err(|err| err.to_string());
        let outcome = ticket.report(result);

        if let SubmitOutcome::Booked { restaurant_id } = outcome {
            if let Err(err) = self.refresh().await {
                tracing::warn!(restaurant_id, error = %err, "Refresh after booking failed");
            }
        }
        Ok(outcome)
    }

    /// Calendar events for the current reservations and live selection.
    pub async fn calendar_events(&self) -> Vec<CalendarEvent> {
        let reservations = self.reservations.read().await;
        let workflow = lock(&self.workflow);
        project_occupancy(&reservations, workflow.selection())
    }
}
