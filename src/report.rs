//! Human-readable reports for the command-line exercises.
//!
//! Every writer emits whole lines terminated by `\n`. A search with no
//! matches writes no lines at all; callers that want a "not found" message
//! must add it themselves.

use crate::search::{Indexing, OpenReadingFrame, OrfScan, OrfScore};
use std::io::{self, Write};

/// Writes `The length was: <len>`.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_length<W: Write>(w: &mut W, len: usize) -> io::Result<()> {
    let mut buff = itoa::Buffer::new();
    w.write_all(b"The length was: ")?;
    w.write_all(buff.format(len).as_bytes())?;
    w.write_all(b"\n")
}

/// Writes one `Found it at <position>` line per zero-based offset, numbered
/// according to `indexing`.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_matches<W: Write>(w: &mut W, offsets: &[usize], indexing: Indexing) -> io::Result<()> {
    let mut buff = itoa::Buffer::new();
    for &offset in offsets {
        w.write_all(b"Found it at ")?;
        w.write_all(buff.format(indexing.position(offset)).as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

/// Writes `The GC content is: <percent>` with six decimal places, or `n/a`
/// when the percentage is undefined.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_gc<W: Write>(w: &mut W, percent: Option<f64>) -> io::Result<()> {
    match percent {
        Some(p) => writeln!(w, "The GC content is: {p:.6}"),
        None => writeln!(w, "The GC content is: n/a"),
    }
}

/// Writes `The total charge is: <charge>`.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_charge<W: Write>(w: &mut W, charge: i64) -> io::Result<()> {
    let mut buff = itoa::Buffer::new();
    w.write_all(b"The total charge is: ")?;
    w.write_all(buff.format(charge).as_bytes())?;
    w.write_all(b"\n")
}

/// Writes `Ends with <suffix>` or `Doesn't end with <suffix>`.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_suffix<W: Write>(w: &mut W, suffix: &[u8], ends_with: bool) -> io::Result<()> {
    if ends_with {
        w.write_all(b"Ends with ")?;
    } else {
        w.write_all(b"Doesn't end with ")?;
    }
    w.write_all(suffix)?;
    w.write_all(b"\n")
}

fn write_score<W: Write>(w: &mut W, label: &str, score: OrfScore) -> io::Result<()> {
    let mut buff = itoa::Buffer::new();
    w.write_all(label.as_bytes())?;
    w.write_all(b": ")?;
    w.write_all(buff.format(score.count).as_bytes())?;
    w.write_all(b" sequences, longest = ")?;
    w.write_all(buff.format(score.longest).as_bytes())?;
    w.write_all(b"\n")
}

/// Writes one reading frame as a coordinate line followed by its codons
/// separated by spaces.
///
/// `End` is the last base of the stop codon under `indexing`, so a 1-based
/// report of `CCATGGCCTAACC` gives `End: 11`. This is one less than the
/// exclusive end plus one that earlier scripts printed (`End: 12`).
///
/// # Errors
///
/// Propagates write failures.
pub fn write_orf<W: Write>(w: &mut W, frame: &OpenReadingFrame, indexing: Indexing) -> io::Result<()> {
    let mut buff = itoa::Buffer::new();
    w.write_all(b"Start: ")?;
    w.write_all(buff.format(indexing.position(frame.start)).as_bytes())?;
    w.write_all(b", End: ")?;
    w.write_all(buff.format(indexing.position(frame.end - 1)).as_bytes())?;
    w.write_all(b", Sequence length: ")?;
    w.write_all(buff.format(frame.len()).as_bytes())?;
    w.write_all(b", Codons length: ")?;
    w.write_all(buff.format(frame.codon_count()).as_bytes())?;
    w.write_all(b"\n")?;

    for (i, codon) in frame.codons().enumerate() {
        if i > 0 {
            w.write_all(b" ")?;
        }
        w.write_all(codon)?;
    }
    w.write_all(b"\n\n")
}

/// Writes the full report for an [`OrfScan`]: the detected type, the strand
/// scores and choice for DNA, then every frame.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_orf_scan<W: Write>(w: &mut W, scan: &OrfScan, indexing: Indexing) -> io::Result<()> {
    w.write_all(b"Sequence type: ")?;
    w.write_all(scan.kind().name().as_bytes())?;
    w.write_all(b"\n\n")?;

    if let OrfScan::Dna {
        forward_score,
        reverse_score,
        best,
        ..
    } = scan
    {
        write_score(w, "Original", *forward_score)?;
        write_score(w, "Complement", *reverse_score)?;
        w.write_all(b"\n")?;

        if scan.frames().is_empty() {
            return w.write_all(b"No subsequences found.\n");
        }

        w.write_all(b"Best: ")?;
        w.write_all(best.label().as_bytes())?;
        w.write_all(b"\n\n")?;
    }

    for frame in scan.frames() {
        write_orf(w, frame, indexing)?;
    }
    Ok(())
}
