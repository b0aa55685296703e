//! Domain layer: pure types and aggregates, no I/O.

pub mod dashboard;
pub mod feed;
pub mod foundation;
pub mod network;
pub mod user;
