//! UniConnect Core - Dashboard State Engine
//!
//! This crate implements the session, profile, and dashboard state model for
//! the UniConnect platform: a mock-credential session manager with a durable
//! single-user slot, role-tagged profiles for students, professors, and
//! investors, and the in-memory entity collections the dashboard renders.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
