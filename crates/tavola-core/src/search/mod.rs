//! Restaurant search: filter model and backend trait.
//!
//! Search is a thin collaborator of the client core; the filters only need
//! to reach `GET /search/advanced` with blank values left out.

pub mod model;
pub mod service;

pub use model::{Restaurant, SearchFilters};
pub use service::SearchGateway;
