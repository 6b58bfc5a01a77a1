//! Assistant reply interpretation.
//!
//! Turns the free text of one assistant reply into an ordered sequence of
//! renderable elements: prose blocks and structured restaurant
//! recommendations.
//!
//! # Module Structure
//!
//! - `model`: Output element types (`ParsedElement`, `RestaurantSummary`)
//! - `classify`: Per-line classification (`LineKind`, `classify_line`)
//! - `interpreter`: Grouping pass over classified lines (`interpret_reply`)

mod classify;
mod interpreter;
mod model;

pub use classify::{LineKind, classify_line};
pub use interpreter::interpret_reply;
pub use model::{ParsedElement, RestaurantSummary};
