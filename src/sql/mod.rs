//! Statement text. Every value is bound through a `$n` placeholder, never formatted into the SQL.

mod queries;
pub use queries::*;
