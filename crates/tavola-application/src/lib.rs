//! Application layer for Tavola.
//!
//! Use cases that connect the pure state machines in `tavola-core` to the
//! gateway traits, and hold the client-side "busy" guarantees across
//! `.await` points.

pub mod booking_usecase;
pub mod chat_usecase;
pub mod search_usecase;

pub use booking_usecase::BookingUseCase;
pub use chat_usecase::ChatUseCase;
pub use search_usecase::{SearchResults, SearchUseCase};
