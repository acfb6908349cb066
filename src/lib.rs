//! Minimal task list kept in memory and served over HTTP.

pub mod api;
pub mod models;
pub mod store;
