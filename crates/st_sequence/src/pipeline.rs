use std::fmt;
use std::path::PathBuf;

use log::info;

use crate::generate;
use crate::insert_name;
use crate::ensure_absent;
use crate::FastaRecord;
use crate::RandomSource;
use crate::SequenceError;
use crate::Statistics;

/// The four user inputs plus the directory receiving `<identifier>.fasta`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub length: i64,
    pub identifier: String,
    pub description: String,
    pub name: String,
    pub directory: PathBuf,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub path: PathBuf,
    /// Composition of the generated sequence, without the inserted name.
    pub statistics: Statistics,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sequence written to file: {}", self.path.display())?;
        writeln!(f)?;
        writeln!(f, "Sequence statistics:")?;
        write!(f, "{}", self.statistics)
    }
}

/// Generate, check, measure, splice and write.
///
/// Every validation (length, identifier, existing file) happens before the
/// output file is opened, so a failed run leaves nothing behind.
pub fn run<S: RandomSource + ?Sized>(
    request: &RunRequest,
    rng: &mut S,
) -> Result<RunReport, SequenceError> {
    let sequence = generate(request.length, rng)?;
    let path = ensure_absent(&request.identifier, &request.directory)?;

    let statistics = Statistics::compute(&sequence);
    let named = insert_name(&sequence, &request.name, rng);
    info!("Name inserted at position {} of {}", named.offset(), sequence.len());

    let record = FastaRecord::new(&request.identifier, &request.description, named.into_body());
    record.create(&path)?;

    Ok(RunReport { path, statistics })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;
    use crate::RngSource;
    use crate::ScriptedSource;
    use crate::Nucleotide;

    fn request(length: i64, id: &str, dir: &Path) -> RunRequest {
        RunRequest {
            length,
            identifier: id.to_string(),
            description: "demo".to_string(),
            name: "X".to_string(),
            directory: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_run_end_to_end() {
        let dir = TempDir::new().unwrap();
        // A, C, G, T, then the insertion offset.
        let mut rng = ScriptedSource::new([0, 1, 2, 3, 2]);
        let report = run(&request(4, "test1", dir.path()), &mut rng).unwrap();

        assert_eq!(report.path, dir.path().join("test1.fasta"));
        assert_eq!(fs::read_to_string(&report.path).unwrap(), ">test1 demo\nACXGT\n");
        for n in [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T] {
            assert_eq!(report.statistics.percentage(n), 25.0);
        }
        assert_eq!(report.statistics.cg_percent(), 50.0);
        assert_eq!(rng.remaining(), 0);

        let text = report.to_string();
        assert!(text.ends_with("A: 25.00%\nC: 25.00%\nG: 25.00%\nT: 25.00%\n%CG: 50.00"));
        assert!(text.starts_with("Sequence written to file: "));
    }

    #[test]
    fn test_run_invalid_length_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut rng = RngSource::seeded(1);
        for len in [0, -5] {
            let res = run(&request(len, "bad", dir.path()), &mut rng);
            assert!(matches!(res, Err(SequenceError::InvalidLength(_))));
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_run_existing_file_is_untouched() {
        let dir = TempDir::new().unwrap();
        let existing = dir.path().join("dup.fasta");
        fs::write(&existing, ">dup old\nTTTT\n").unwrap();

        let mut rng = RngSource::seeded(1);
        let res = run(&request(10, "dup", dir.path()), &mut rng);
        assert!(matches!(res, Err(SequenceError::AlreadyExists(p)) if p == existing));
        assert_eq!(fs::read_to_string(&existing).unwrap(), ">dup old\nTTTT\n");
    }

    #[test]
    fn test_run_long_sequence_is_wrapped() {
        let dir = TempDir::new().unwrap();
        let mut rng = RngSource::seeded(5);
        let mut req = request(250, "long", dir.path());
        req.name = "Katarzyna".to_string();
        let report = run(&req, &mut rng).unwrap();

        let text = fs::read_to_string(&report.path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(">long demo"));
        let body: Vec<&str> = lines.collect();
        assert_eq!(body.len(), 4);
        assert!(body[..3].iter().all(|l| l.len() == 80));
        assert_eq!(body[3].len(), 19);

        let joined = body.concat();
        assert!(joined.contains("Katarzyna"));
        let stripped = joined.replacen("Katarzyna", "", 1);
        assert_eq!(stripped.len(), 250);
        assert_eq!(report.statistics.len(), 250);
        assert_eq!(Statistics::compute(&crate::Sequence::try_from(stripped.as_str()).unwrap()),
            report.statistics);
    }
}
