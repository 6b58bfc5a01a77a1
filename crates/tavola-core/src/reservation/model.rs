//! Reservation data model.

use serde::{Deserialize, Serialize};

use crate::timestamp::normalize_timestamp;

/// An existing, server-sourced reservation. Read-only on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub start_time: String,
    pub end_time: String,
}

/// The user's current, uncommitted calendar drag.
///
/// Endpoints are kept exactly as the calendar emitted them, usually with a
/// timezone offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRange {
    pub start: String,
    pub end: String,
}

impl SelectionRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Values entered in the booking prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingForm {
    pub name: String,
    pub guest_count: u32,
}

impl Default for BookingForm {
    /// Prompt defaults: empty name, one guest.
    fn default() -> Self {
        Self {
            name: String::new(),
            guest_count: 1,
        }
    }
}

impl BookingForm {
    pub fn new(name: impl Into<String>, guest_count: u32) -> Self {
        Self {
            name: name.into(),
            guest_count,
        }
    }
}

/// A validated reservation request, ready for `POST /reservations`.
///
/// Both times are naive (no timezone marker).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    pub restaurant_id: i64,
    #[serde(rename = "reservationName")]
    pub name: String,
    pub guest_count: u32,
    pub start_time: String,
    pub end_time: String,
}

impl ReservationDraft {
    /// The prompt values this draft was built from.
    pub fn form(&self) -> BookingForm {
        BookingForm::new(self.name.clone(), self.guest_count)
    }
}

/// Optional time window for reading reservations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: String,
    pub end: String,
}

impl TimeWindow {
    /// Builds a window with both bounds normalized to naive timestamps.
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: normalize_timestamp(start),
            end: normalize_timestamp(end),
        }
    }
}
