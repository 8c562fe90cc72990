use std::path::Path;
use std::path::PathBuf;

use log::debug;

use crate::SequenceError;

pub const FASTA_EXTENSION: &str = "fasta";

/// Resolve `<directory>/<identifier>.fasta`, rejecting identifiers that
/// would not stay a plain file name inside `directory`.
pub fn fasta_path(identifier: &str, directory: &Path) -> Result<PathBuf, SequenceError> {
    if identifier.is_empty()
        || identifier == "."
        || identifier == ".."
        || identifier.contains(['/', '\\'])
    {
        return Err(SequenceError::InvalidIdentifier(identifier.to_string()));
    }
    Ok(directory.join(format!("{}.{}", identifier, FASTA_EXTENSION)))
}

/// Fail with [`SequenceError::AlreadyExists`] if the output file for
/// `identifier` is present. Read-only: nothing is created or locked, the
/// writer re-checks atomically when it opens the file.
pub fn ensure_absent(identifier: &str, directory: &Path) -> Result<PathBuf, SequenceError> {
    let path = fasta_path(identifier, directory)?;
    if path.try_exists()? {
        return Err(SequenceError::AlreadyExists(path));
    }
    debug!("Output file {} is available", path.display());
    Ok(path)
}
