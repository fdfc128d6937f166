//! Domain entities - tables and the participants seated at them

mod participant;
mod table;

pub use participant::Participant;
pub use table::{Seat, Table, TableState};
