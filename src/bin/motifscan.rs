//! # motifscan
//!
//! Reads sequences from standard input and reports motif positions or simple
//! statistics.
//!
//! ```bash
//! # Find FLARE in a sequence, positions are 1-based
//! echo XXFLAREYY | motifscan literal
//!
//! # Any pentapeptide, given as the second token
//! printf 'MKFLAREQQ FLARE' | motifscan penta
//!
//! # Any peptide no longer than the sequence
//! printf 'AAAA AA' | motifscan --zero-based peptide
//!
//! # Open reading frames in a DNA or RNA file
//! motifscan orfs genome.txt
//! ```
//!
//! Set `RUST_LOG=debug` to see the policy and lengths used for each search.

use clap::{Parser, Subcommand};
use log::{debug, warn};
use motifscan::{
    config::{DEFAULT_MAX_MOTIF_LEN, DEFAULT_MAX_SUBJECT_LEN, ScanConfig},
    data::{
        err::{GetCode, InputError, OrFail, SearchError},
        input::{TokenReader, read_sequence_file},
        types::Sequence,
    },
    report,
    search::{Indexing, OrfScan, SearchPolicy, ends_with_motif, find_all, scan_orfs},
};
use std::{
    io::{self, BufWriter, Read, Write},
    path::PathBuf,
};
use thiserror::Error;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Report 0-based offsets instead of 1-based positions
    #[arg(long, global = true)]
    zero_based: bool,

    /// Longest sequence accepted from input
    #[arg(long, global = true, value_name = "LEN", default_value_t = DEFAULT_MAX_SUBJECT_LEN)]
    max_subject_len: usize,

    /// Longest motif accepted from input
    #[arg(long, global = true, value_name = "LEN", default_value_t = DEFAULT_MAX_MOTIF_LEN)]
    max_motif_len: usize,

    /// Accept input of any length
    #[arg(long, global = true)]
    no_limit: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Search one sequence for a fixed five-letter motif.
    Literal {
        #[arg(long, default_value = "FLARE")]
        motif: String,
    },
    /// Search a sequence for a pentapeptide read as the second token.
    Penta,
    /// Search a sequence for a peptide of any length up to the sequence length.
    Peptide,
    /// Print the GC content of a sequence as a percentage.
    Gc,
    /// Print the net charge of a peptide.
    Charge,
    /// Check whether a sequence ends with a suffix.
    Suffix {
        #[arg(long, default_value = "EAA")]
        suffix: String,
    },
    /// Find open reading frames in a DNA or RNA file.
    Orfs {
        /// Input file; whitespace is ignored and letters are uppercased
        file: PathBuf,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("could not write output: {0}")]
    Io(#[from] io::Error),
    #[error("no open reading frames were found")]
    NoReadingFrames,
}

impl GetCode for CliError {
    fn get_code(&self) -> i32 {
        match self {
            CliError::Search(e) => e.get_code(),
            CliError::Input(e) => e.get_code(),
            CliError::Io(e) => e.get_code(),
            CliError::NoReadingFrames => 1,
        }
    }
}

impl Cli {
    fn config(&self, policy: SearchPolicy) -> ScanConfig {
        let limit = |len| if self.no_limit { None } else { Some(len) };
        ScanConfig {
            policy,
            indexing: if self.zero_based {
                Indexing::ZeroBased
            } else {
                Indexing::OneBased
            },
            max_subject_len: limit(self.max_subject_len),
            max_motif_len: limit(self.max_motif_len),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    env_logger::init();

    run(&cli).unwrap_or_fail();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut input = TokenReader::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = dispatch(cli, &mut input, &mut out);
    out.flush()?;

    if let Err(ref e) = result {
        warn!("{e}");
    }
    result
}

fn dispatch<R: Read, W: Write>(cli: &Cli, input: &mut TokenReader<R>, out: &mut W) -> Result<(), CliError> {
    match &cli.command {
        Command::Literal { motif } => {
            let config = cli.config(SearchPolicy::pentamer());
            let subject = config.read_subject(input)?;
            search(&config, &subject, motif.as_bytes(), out)
        }
        Command::Penta => {
            let config = cli.config(SearchPolicy::pentamer());
            let subject = config.read_subject(input)?;
            let motif = config.read_motif(input)?;
            search(&config, &subject, motif.as_bytes(), out)
        }
        Command::Peptide => {
            let config = cli.config(SearchPolicy::Unbounded);
            let subject = config.read_subject(input)?;
            let motif = config.read_motif(input)?;
            search(&config, &subject, motif.as_bytes(), out)
        }
        Command::Gc => {
            let subject = cli.config(SearchPolicy::Unbounded).read_subject(input)?;
            report::write_length(out, subject.len())?;
            report::write_gc(out, subject.gc_percent())?;
            Ok(())
        }
        Command::Charge => {
            let subject = cli.config(SearchPolicy::Unbounded).read_subject(input)?;
            report::write_length(out, subject.len())?;
            report::write_charge(out, subject.net_charge())?;
            Ok(())
        }
        Command::Suffix { suffix } => {
            let subject = cli.config(SearchPolicy::Unbounded).read_subject(input)?;
            let ends_with = ends_with_motif(subject.as_bytes(), suffix.as_bytes(), suffix.len())?;
            report::write_length(out, subject.len())?;
            report::write_suffix(out, suffix.as_bytes(), ends_with)?;
            Ok(())
        }
        Command::Orfs { file } => {
            writeln!(out, "Processing file: {}", file.display())?;
            let sequence = read_sequence_file(file)?;
            debug!("read {} bases from {}", sequence.len(), file.display());

            let scan = scan_orfs(sequence.as_bytes())?;
            report::write_orf_scan(out, &scan, cli.config(SearchPolicy::Unbounded).indexing)?;

            if matches!(scan, OrfScan::Dna { .. }) && scan.frames().is_empty() {
                Err(CliError::NoReadingFrames)
            } else {
                Ok(())
            }
        }
    }
}

/// Prints the subject length, validates, then prints every match.
fn search<W: Write>(config: &ScanConfig, subject: &Sequence, motif: &[u8], out: &mut W) -> Result<(), CliError> {
    report::write_length(out, subject.len())?;

    let offsets = find_all(subject, motif, config.policy)?;
    debug!(
        "{:?}: {} match(es) for a motif of length {} in a sequence of length {}",
        config.policy,
        offsets.len(),
        motif.len(),
        subject.len()
    );

    report::write_matches(out, &offsets, config.indexing)?;
    Ok(())
}
