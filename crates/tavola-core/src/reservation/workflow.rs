//! Reservation booking state machine.
//!
//! ```text
//! Idle ──select──▶ Confirming ──submit──▶ Submitting ──ok──▶ Idle
//!  ▲                 │    ▲                    │
//!  └──────cancel─────┘    └───────failed───────┘
//! ```
//!
//! A calendar select event passes through "selecting" and lands directly in
//! `Confirming` with the booking prompt pre-filled. The network call itself
//! happens outside the workflow: `on_submit` hands back a
//! [`PendingSubmission`], and the caller reports the result through
//! [`ReservationWorkflow::on_submit_result`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::{BookingForm, ReservationDraft, SelectionRange};
use crate::timestamp::normalize_timestamp;

/// The calendar widget the workflow drives.
pub trait CalendarSurface: Send + Sync {
    /// Removes the widget's own visual selection. Must be idempotent.
    fn clear_selection(&self);
}

/// Reasons a workflow operation is refused before any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowError {
    #[error("Reservation name must not be empty")]
    EmptyName,

    #[error("Guest count must be at least 1")]
    NoGuests,

    #[error("Select a time range on the calendar first")]
    NoSelection,

    #[error("A reservation request is already being submitted")]
    SubmissionInFlight,
}

/// Current phase of the booking interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowPhase {
    /// Nothing selected.
    Idle,
    /// A range is selected and the booking prompt is shown.
    Confirming {
        selection: SelectionRange,
        /// Values shown in the prompt.
        form: BookingForm,
        /// The last draft that failed to submit, kept for retry.
        draft: Option<ReservationDraft>,
        /// Failure reason from the last submission, shown verbatim.
        last_error: Option<String>,
    },
    /// A request is on the wire.
    Submitting {
        selection: SelectionRange,
        draft: ReservationDraft,
    },
}

/// A submission the caller must now send to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub ticket: u64,
    pub draft: ReservationDraft,
}

/// What happened when a submission finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Booked. The caller must refresh the reservation list.
    Booked { restaurant_id: i64 },
    /// Rejected by the backend or the transport.
    Failed { reason: String },
    /// The ticket does not match the submission in flight; nothing changed.
    Stale,
}

/// Drives a single restaurant's booking interaction.
///
/// Owns the live selection and the in-flight submission marker. At most one
/// selection is live, and at most one submission is outstanding: the
/// in-flight ticket is held until its result is reported, even if the user
/// cancels meanwhile.
pub struct ReservationWorkflow {
    restaurant_id: i64,
    phase: WorkflowPhase,
    in_flight: Option<u64>,
    next_ticket: u64,
    calendar: Arc<dyn CalendarSurface>,
}

impl ReservationWorkflow {
    pub fn new(restaurant_id: i64, calendar: Arc<dyn CalendarSurface>) -> Self {
        Self {
            restaurant_id,
            phase: WorkflowPhase::Idle,
            in_flight: None,
            next_ticket: 1,
            calendar,
        }
    }

    pub fn restaurant_id(&self) -> i64 {
        self.restaurant_id
    }

    pub fn phase(&self) -> &WorkflowPhase {
        &self.phase
    }

    /// The live selection, if any.
    pub fn selection(&self) -> Option<&SelectionRange> {
        match &self.phase {
            WorkflowPhase::Idle => None,
            WorkflowPhase::Confirming { selection, .. }
            | WorkflowPhase::Submitting { selection, .. } => Some(selection),
        }
    }

    /// Whether a submission is still outstanding.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Handles a calendar select event.
    ///
    /// Replaces any previous selection and resets the prompt to its
    /// defaults. Refused while a submission is outstanding.
    pub fn on_select(&mut self, range: SelectionRange) -> Result<BookingForm, WorkflowError> {
        if self.in_flight.is_some() {
            return Err(WorkflowError::SubmissionInFlight);
        }

        tracing::debug!(
            restaurant_id = self.restaurant_id,
            start = %range.start,
            end = %range.end,
            "Selection made"
        );
        let form = BookingForm::default();
        self.phase = WorkflowPhase::Confirming {
            selection: range,
            form: form.clone(),
            draft: None,
            last_error: None,
        };
        Ok(form)
    }

    /// Drops the selection and any draft, and clears the calendar highlight.
    ///
    /// Safe to call in any phase. An outstanding submission keeps running;
    /// its result will be reported against an idle workflow.
    pub fn on_cancel(&mut self) {
        if self.phase != WorkflowPhase::Idle {
            tracing::debug!(restaurant_id = self.restaurant_id, "Selection cancelled");
        }
        self.phase = WorkflowPhase::Idle;
        self.calendar.clear_selection();
    }

    /// Validates the prompt and starts a submission.
    ///
    /// On success the workflow moves to `Submitting` and the returned draft
    /// carries naive start/end times. On error nothing changes.
    pub fn on_submit(&mut self, form: BookingForm) -> Result<PendingSubmission, WorkflowError> {
        if self.in_flight.is_some() {
            return Err(WorkflowError::SubmissionInFlight);
        }
        let selection = match &self.phase {
            WorkflowPhase::Confirming { selection, .. } => selection.clone(),
            _ => return Err(WorkflowError::NoSelection),
        };
        if form.name.trim().is_empty() {
            return Err(WorkflowError::EmptyName);
        }
        if form.guest_count < 1 {
            return Err(WorkflowError::NoGuests);
        }

        let draft = ReservationDraft {
            restaurant_id: self.restaurant_id,
            name: form.name,
            guest_count: form.guest_count,
            start_time: normalize_timestamp(&selection.start),
            end_time: normalize_timestamp(&selection.end),
        };
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        self.phase = WorkflowPhase::Submitting {
            selection,
            draft: draft.clone(),
        };

        tracing::debug!(
            restaurant_id = self.restaurant_id,
            ticket,
            start = %draft.start_time,
            end = %draft.end_time,
            "Submitting reservation"
        );
        Ok(PendingSubmission { ticket, draft })
    }

    /// Reports the result of the submission identified by `ticket`.
    ///
    /// `Err` carries the failure reason to show to the user.
    pub fn on_submit_result(&mut self, ticket: u64, result: Result<(), String>) -> SubmitOutcome {
        if self.in_flight != Some(ticket) {
            tracing::warn!(ticket, in_flight = ?self.in_flight, "Ignoring stale submission result");
            return SubmitOutcome::Stale;
        }
        self.in_flight = None;

        let phase = std::mem::replace(&mut self.phase, WorkflowPhase::Idle);
        match (phase, result) {
            (WorkflowPhase::Submitting { .. }, Ok(())) => {
                self.calendar.clear_selection();
                tracing::info!(restaurant_id = self.restaurant_id, "Reservation booked");
                SubmitOutcome::Booked {
                    restaurant_id: self.restaurant_id,
                }
            }
            (WorkflowPhase::Submitting { selection, draft }, Err(reason)) => {
                tracing::warn!(restaurant_id = self.restaurant_id, %reason, "Reservation failed");
                self.phase = WorkflowPhase::Confirming {
                    selection,
                    form: draft.form(),
                    draft: Some(draft),
                    last_error: Some(reason.clone()),
                };
                SubmitOutcome::Failed { reason }
            }
            // Cancelled while in flight: report, but stay where the user left us.
            (phase, Ok(())) => {
                self.phase = phase;
                SubmitOutcome::Booked {
                    restaurant_id: self.restaurant_id,
                }
            }
            (phase, Err(reason)) => {
                self.phase = phase;
                SubmitOutcome::Failed { reason }
            }
        }
    }
}
