/// Exact motif search with explicit length policies.
mod motif;
/// Open reading frame detection.
mod orf;

pub use motif::*;
pub use orf::*;
