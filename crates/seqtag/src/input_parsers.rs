use std::io::{BufRead, Error, ErrorKind, Write};

use st_sequence::SequenceError;

/// Print `label` (no newline) and read one line from `reader`.
///
/// Only the line terminator is removed; leading and trailing spaces are part
/// of the answer. End of input is an error.
pub fn prompt<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> std::io::Result<String> {
    write!(writer, "{}", label)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(Error::new(
            ErrorKind::UnexpectedEof,
            format!("input ended while waiting for '{}'", label.trim_end()),
        ));
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

/// Use `value` if given, otherwise ask for it.
pub fn value_or_prompt<R: BufRead, W: Write>(
    value: Option<&str>,
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> std::io::Result<String> {
    match value {
        Some(v) => Ok(v.to_string()),
        None => prompt(reader, writer, label),
    }
}

/// Parse a sequence length. Anything but a positive integer is
/// [`SequenceError::InvalidLength`]; surrounding whitespace is ignored.
pub fn parse_length(s: &str) -> Result<i64, SequenceError> {
    match s.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(SequenceError::InvalidLength(s.trim().to_string())),
    }
}
