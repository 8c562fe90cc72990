use std::fs::OpenOptions;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use log::info;

use crate::SequenceError;

/// Maximum number of sequence characters per body line.
pub const FASTA_LINE_WIDTH: usize = 80;

/// One FASTA entry: `>{identifier} {description}` followed by the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub identifier: String,
    pub description: String,
    pub body: String,
}

impl FastaRecord {
    pub fn new(identifier: &str, description: &str, body: String) -> Self {
        Self {
            identifier: identifier.to_string(),
            description: description.to_string(),
            body,
        }
    }

    pub fn header(&self) -> String {
        format!(">{} {}", self.identifier, self.description)
    }

    /// Serialize the header line and the body wrapped at `width` characters.
    /// Every line, including the last one, ends with a newline.
    pub fn write<W: Write>(&self, writer: &mut W, width: usize) -> std::io::Result<()> {
        writeln!(writer, "{}", self.header())?;
        for line in wrap_lines(&self.body, width) {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }

    /// Create `path` and write the record into it.
    ///
    /// The file is opened with `create_new`, so an existing file is never
    /// replaced, even one that appeared after [`crate::ensure_absent`] ran.
    pub fn create<P: AsRef<Path>>(&self, path: P) -> Result<(), SequenceError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => SequenceError::AlreadyExists(path.to_path_buf()),
                _ => SequenceError::Io(e),
            })?;
        let mut writer = BufWriter::new(file);
        self.write(&mut writer, FASTA_LINE_WIDTH)?;
        writer.flush()?;
        info!("Wrote {} characters to {}", self.body.chars().count(), path.display());
        Ok(())
    }
}

/// Split `s` into consecutive chunks of at most `width` characters.
/// Counts characters, not bytes, so a multi-byte name is never cut apart.
pub fn wrap_lines(s: &str, width: usize) -> impl Iterator<Item = &str> {
    assert!(width > 0, "line width must be positive");
    let mut rest = s;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let cut = rest.char_indices()
            .nth(width)
            .map_or(rest.len(), |(i, _)| i);
        let (line, tail) = rest.split_at(cut);
        rest = tail;
        Some(line)
    })
}
