//! Value objects - immutable identifier types

mod ids;

pub use ids::{IdParseError, TableId, UserId};
