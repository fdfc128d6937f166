//! Collaborator traits (ports) consumed by the typing engine

mod collaborators;

pub use collaborators::{TableRegistry, TypingNotifier};
