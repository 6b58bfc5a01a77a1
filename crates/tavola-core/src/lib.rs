//! Domain core of the Tavola restaurant client.
//!
//! Everything here is free of I/O: the network lives behind the gateway
//! traits (`ChatGateway`, `ReservationGateway`, `SearchGateway`).

pub mod chat;
pub mod config;
pub mod error;
pub mod reply;
pub mod reservation;
pub mod search;
pub mod timestamp;

// Re-export common error type
pub use error::{Result, TavolaError};
