//! HTTP implementations of the Tavola gateway traits.
//!
//! - `client`: `HttpApiClient`, a reqwest-backed `ChatGateway`,
//!   `ReservationGateway` and `SearchGateway`
//! - `config`: Loading `ClientConfig` from `~/.config/tavola/config.json`
//!   and environment variables

pub mod client;
pub mod config;

pub use client::HttpApiClient;
pub use config::load_client_config;
