//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;
pub mod range;

pub use generate::generate_batch;
