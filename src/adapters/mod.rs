//! Adapters - implementations of the ports.

pub mod storage;
