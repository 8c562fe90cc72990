use std::io::{stdin, stdout, Write};
use log::{info, warn};
use colored::*;
use env_logger::Builder;
use clap::Parser;
use clap::ArgAction;
use anyhow::Result;

use st_sequence::run;

use seqtag::run_parsers::RecordArguments;
use seqtag::run_parsers::OutputArguments;


#[derive(Debug, Parser)]
#[command(name = "st-generate")]
#[command(author, version, about = "Random DNA sequence with an embedded name, written as <ID>.fasta")]
pub struct Cli {
    #[command(flatten, next_help_heading = "Record (prompted for when missing)")]
    record: RecordArguments,

    #[command(flatten, next_help_heading = "Output")]
    output: OutputArguments,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            writeln!(buf, "{}", record.args())
        })
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut rng = cli.output.build_rng();
    let mut reader = stdin().lock();
    let mut writer = stdout();

    let outcome = cli.record
        .resolve(&mut reader, &mut writer, &cli.output.outdir)
        .and_then(|request| {
            info!("Writing into {}", request.directory.display());
            run(&request, &mut rng)
        });

    match outcome {
        Ok(report) => {
            println!("{}", report.to_string().green());
            Ok(())
        }
        Err(e) if e.is_validation() => {
            warn!("Run aborted, no file written");
            eprintln!("{} {}", "Error:".red(), e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
