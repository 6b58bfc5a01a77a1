//! Reservation backend trait.

use async_trait::async_trait;

use super::model::{Reservation, ReservationDraft, TimeWindow};
use crate::error::Result;

/// Reads and writes reservations for a restaurant.
#[async_trait]
pub trait ReservationGateway: Send + Sync {
    /// Lists reservations for a restaurant, optionally limited to a window.
    async fn list_reservations(
        &self,
        restaurant_id: i64,
        window: Option<&TimeWindow>,
    ) -> Result<Vec<Reservation>>;

    /// Submits one reservation request. Never retried by the implementation.
    async fn create_reservation(&self, draft: &ReservationDraft) -> Result<()>;
}
