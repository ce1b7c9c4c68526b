//! Schema types for representing the tables being generated.

mod column;
mod table;
mod types;

pub use column::Column;
pub use table::{Row, TableDescriptor};
pub use types::{ColumnType, Dialect, TEXT_WIDTH};
