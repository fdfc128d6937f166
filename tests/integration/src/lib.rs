//! Integration test utilities for the table server
//!
//! This crate provides helpers for driving the gateway end to end:
//! connecting sessions, seating them at tables, and sending typing commands.


pub use fixtures::*;
pub use helpers::*;
