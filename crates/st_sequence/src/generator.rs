use log::debug;

use crate::Nucleotide;
use crate::Sequence;
use crate::SequenceError;
use crate::RandomSource;
use crate::NUCLEOTIDES;

/// Draw `length` independent, uniform nucleotides.
///
/// The length is signed so that nonsense input from the outside (`0`, `-5`)
/// is reported as [`SequenceError::InvalidLength`] instead of wrapping around.
pub fn generate<S: RandomSource + ?Sized>(
    length: i64,
    rng: &mut S,
) -> Result<Sequence, SequenceError> {
    if length <= 0 {
        return Err(SequenceError::InvalidLength(length.to_string()));
    }
    let length = usize::try_from(length)
        .map_err(|_| SequenceError::InvalidLength(length.to_string()))?;

    debug!("Generating random sequence of length {}", length);
    let seq: Sequence = (0..length)
        .map(|_| random_nucleotide(rng))
        .collect();
    Ok(seq)
}

fn random_nucleotide<S: RandomSource + ?Sized>(rng: &mut S) -> Nucleotide {
    NUCLEOTIDES[rng.choose_index(NUCLEOTIDES.len())]
}
