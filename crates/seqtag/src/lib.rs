//! # seqtag
//!
//! Command-line front end: collects the run inputs from flags or prompts and
//! hands them to [`sequence::run`].
//!
//! This crate re-exports the core functionality from `st_sequence`.

pub mod input_parsers;
pub mod run_parsers;

pub mod sequence {
    pub use ::st_sequence::*;
}
