//! Input parsing and source file handling.

mod parser;
mod record;
mod source;

pub(crate) use parser::decode_record;
pub use parser::{Parser, ParserConfig};
pub use record::FieldMap;
pub use source::{derive_table_name, list_source_files};
