//! # st_sequence
//!
//! Random DNA sequences with an embedded name, their nucleotide composition,
//! and FASTA output that never overwrites an existing file.

mod error;

/// Nucleotide, Sequence, ...
mod nucleotides;

/// Injectable randomness: the `rand` adapter and scripted draws.
mod randomness;

mod generator;
mod statistics;
mod insertion;

/// Output file naming and the existence check.
mod guard;

mod fasta;

/// The whole generate-and-write run.
mod pipeline;

pub use error::*;
pub use nucleotides::*;
pub use randomness::*;
pub use generator::*;
pub use statistics::*;
pub use insertion::*;
pub use guard::*;
pub use fasta::*;
pub use pipeline::*;
