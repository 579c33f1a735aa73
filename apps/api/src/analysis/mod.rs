// Job-posting analysis.
// Normalize → extract → enrich / critique / profile → align resume → summarize.
// Every stage is a pure function over text and the shared `Lexicon`; only
// `ingestion` performs I/O.

pub mod alignment;
pub mod critique;
pub mod enrichment;
pub mod extraction;
pub mod handlers;
pub mod ingestion;
pub mod lexicon;
pub mod normalizer;
pub mod pipeline;
pub mod profiling;
pub mod summary;

pub use ingestion::{FetchError, HttpPostingFetcher, PostingFetcher};
pub use lexicon::Lexicon;
pub use pipeline::ProfilePipeline;

/// Rounds to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
