use std::io::{BufRead, Write};
use std::path::Path;
use std::path::PathBuf;

use clap::Args;
use log::debug;
use rand::rngs::StdRng;
use st_sequence::RngSource;
use st_sequence::RunRequest;
use st_sequence::SequenceError;

use crate::input_parsers::parse_length;
use crate::input_parsers::value_or_prompt;

/// The four record inputs. Anything left out is asked for on stdin.
#[derive(Debug, Args)]
pub struct RecordArguments {
    /// Sequence length (positive integer)
    #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Sequence identifier, also the output file stem
    #[arg(short, long = "id", value_name = "ID")]
    pub identifier: Option<String>,

    /// Free-text description for the FASTA header
    #[arg(short, long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Name to embed in the sequence
    #[arg(short, long, value_name = "TEXT")]
    pub name: Option<String>,
}

impl RecordArguments {
    /// Fill in missing values interactively, in the order length,
    /// identifier, description, name. The length is checked before the
    /// remaining questions are asked.
    pub fn resolve<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
        directory: &Path,
    ) -> Result<RunRequest, SequenceError> {
        let raw = value_or_prompt(self.length.as_deref(), reader, writer, "Sequence length: ")?;
        let length = parse_length(&raw)?;
        let identifier = value_or_prompt(self.identifier.as_deref(), reader, writer, "Sequence ID: ")?;
        let description = value_or_prompt(self.description.as_deref(), reader, writer, "Sequence description: ")?;
        let name = value_or_prompt(self.name.as_deref(), reader, writer, "Name: ")?;

        debug!("Length: {}", length);
        debug!("Identifier: {:?}", identifier);
        debug!("Description: {:?}", description);
        debug!("Name: {:?}", name);

        Ok(RunRequest {
            length,
            identifier,
            description,
            name,
            directory: directory.to_path_buf(),
        })
    }
}

/// Where to write and how to seed.
#[derive(Debug, Args)]
pub struct OutputArguments {
    /// Directory receiving <ID>.fasta
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub outdir: PathBuf,

    /// Seed for a reproducible run (default: OS entropy)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

impl OutputArguments {
    pub fn build_rng(&self) -> RngSource<StdRng> {
        match self.seed {
            Some(seed) => {
                debug!("Using seed {}", seed);
                RngSource::seeded(seed)
            }
            None => RngSource::from_os_rng(),
        }
    }
}
