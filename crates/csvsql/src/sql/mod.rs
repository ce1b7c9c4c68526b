//! SQL text generation: literal escaping and statements.

mod escape;
mod generator;

pub use escape::{escape_literal, unescape_literal, NULL_LITERAL};
pub use generator::{StatementGenerator, STATEMENT_SEPARATOR};
