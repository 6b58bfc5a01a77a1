pub mod book;
pub mod chat;
pub mod render;
pub mod reservations;
pub mod search;
