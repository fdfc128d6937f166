//! Live tables

mod registry;

pub use registry::InMemoryTableRegistry;
