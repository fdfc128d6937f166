//! Fan-out of table events to sessions

mod notifier;

pub use notifier::SessionNotifier;
