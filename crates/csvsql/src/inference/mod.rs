//! Column type inference.

mod tally;
mod value;

pub use tally::TypeTally;
pub use value::infer_value;
