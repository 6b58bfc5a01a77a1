//! Reservation scheduling domain module.
//!
//! # Module Structure
//!
//! - `model`: Reservation records, selection ranges and drafts
//! - `workflow`: The booking state machine (`ReservationWorkflow`)
//! - `projector`: Calendar event projection (`project_occupancy`)
//! - `gateway`: Trait for the reservation backend

mod gateway;
mod model;
mod projector;
mod workflow;

pub use gateway::ReservationGateway;
pub use model::{BookingForm, Reservation, ReservationDraft, SelectionRange, TimeWindow};
pub use projector::{
    CalendarEvent, DisplayKind, EventDisplay, EventStyle, SELECTION_EVENT_ID, project_occupancy,
};
pub use workflow::{
    CalendarSurface, PendingSubmission, ReservationWorkflow, SubmitOutcome, WorkflowError,
    WorkflowPhase,
};
