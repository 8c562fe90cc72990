use std::fmt;
use std::borrow::Borrow;
use std::ops::Deref;

use crate::SequenceError;


#[derive(Clone, Hash, Copy, Debug, Eq, PartialEq)]
pub enum Nucleotide { A, C, G, T }
pub const NCOUNT: usize = 4; // 4 Nucleotide variants for tables.

/// All nucleotides, in the order they are reported.
pub const NUCLEOTIDES: [Nucleotide; NCOUNT] = {
    use Nucleotide::*;
    [A, C, G, T]
};

impl TryFrom<char> for Nucleotide {
    type Error = SequenceError;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Nucleotide::A),
            'C' => Ok(Nucleotide::C),
            'G' => Ok(Nucleotide::G),
            'T' => Ok(Nucleotide::T),
            _ => Err(SequenceError::InvalidChar(c)),
        }
    }
}

impl From<Nucleotide> for char {
    fn from(n: Nucleotide) -> Self {
        match n {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}


/// An ordered string over {A, C, G, T}.
#[derive(Clone, Hash, Debug, Default, Eq, PartialEq)]
pub struct Sequence(pub Vec<Nucleotide>);

impl Deref for Sequence {
    type Target = [Nucleotide];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<[Nucleotide]> for Sequence {
    fn borrow(&self) -> &[Nucleotide] {
        &self.0
    }
}

impl FromIterator<Nucleotide> for Sequence {
    fn from_iter<I: IntoIterator<Item = Nucleotide>>(iter: I) -> Self {
        Sequence(iter.into_iter().collect())
    }
}

impl TryFrom<&str> for Sequence {
    type Error = SequenceError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.chars().map(Nucleotide::try_from).collect()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in &self.0 {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}
