use std::fmt;
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug)]
pub enum SequenceError {
    InvalidLength(String),      // raw user input that is not a positive integer
    InvalidIdentifier(String),  // identifier unusable as a file stem
    InvalidChar(char),          // not one of A, C, G, T
    AlreadyExists(PathBuf),     // output file is already present
    Io(std::io::Error),
}

impl SequenceError {
    /// Errors caused by bad input rather than by the environment. These are
    /// reported to the user and end the run without writing anything.
    pub fn is_validation(&self) -> bool {
        matches!(self,
            Self::InvalidLength(_)
            | Self::InvalidIdentifier(_)
            | Self::AlreadyExists(_))
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(s) =>
                write!(f, "Sequence length must be a positive integer (got '{s}')"),
            Self::InvalidIdentifier(s) =>
                write!(f, "Identifier '{s}' cannot be used as a file name"),
            Self::InvalidChar(c) =>
                write!(f, "Unsupported nucleotide: '{c}'"),
            Self::AlreadyExists(p) =>
                write!(f, "Output file {} already exists", p.display()),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl Error for SequenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SequenceError {
    fn from(e: std::io::Error) -> Self { Self::Io(e) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors() {
        assert!(SequenceError::InvalidLength("-5".into()).is_validation());
        assert!(SequenceError::AlreadyExists(PathBuf::from("x.fasta")).is_validation());
        assert!(SequenceError::InvalidIdentifier("".into()).is_validation());

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SequenceError::from(io);
        assert!(!err.is_validation());
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display() {
        let err = SequenceError::InvalidLength("abc".into());
        assert_eq!(err.to_string(), "Sequence length must be a positive integer (got 'abc')");
        let err = SequenceError::AlreadyExists(PathBuf::from("test1.fasta"));
        assert_eq!(err.to_string(), "Output file test1.fasta already exists");
    }
}
