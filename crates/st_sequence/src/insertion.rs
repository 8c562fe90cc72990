use std::fmt;

use log::debug;

use crate::Sequence;
use crate::RandomSource;

/// A sequence with one foreign string spliced in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSequence {
    body: String,
    offset: usize,
}

impl NamedSequence {
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Position (in nucleotides of the original sequence) where the name starts.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn into_body(self) -> String {
        self.body
    }
}

impl fmt::Display for NamedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.body)
    }
}

/// Splice `name` into `sequence` at a uniformly drawn position in `[0, len]`.
pub fn insert_name<S: RandomSource + ?Sized>(
    sequence: &Sequence,
    name: &str,
    rng: &mut S,
) -> NamedSequence {
    let offset = rng.uniform_inclusive(0, sequence.len());
    debug!("Inserting name of length {} at offset {}", name.chars().count(), offset);
    insert_at(sequence, name, offset)
}

/// `sequence[..offset] + name + sequence[offset..]`.
///
/// # Panics
/// If `offset > sequence.len()`.
pub fn insert_at(sequence: &Sequence, name: &str, offset: usize) -> NamedSequence {
    assert!(offset <= sequence.len(), "offset {} beyond sequence end {}", offset, sequence.len());
    let mut body = String::with_capacity(sequence.len() + name.len());
    body.extend(sequence[..offset].iter().map(|&n| char::from(n)));
    body.push_str(name);
    body.extend(sequence[offset..].iter().map(|&n| char::from(n)));
    NamedSequence { body, offset }
}
