//! Live client sessions

mod manager;
mod session;

pub use manager::SessionManager;
pub use session::{SendError, Session};
