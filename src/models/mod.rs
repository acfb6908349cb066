//! Domain models for taskbox.
//!
//! There is exactly one entity: [`Task`], a client-identified record in the
//! shared in-memory list. Records live for the duration of the process and
//! never change once created.

mod task;

pub use task::*;
