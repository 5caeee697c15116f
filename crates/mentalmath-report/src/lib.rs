//! mentalmath-report: End-of-session summary and results export.
//!
//! Derives accuracy and pacing metrics from the final session statistics,
//! renders the summary block, and writes the optional plain-text results
//! file.

pub mod export;
pub mod summary;

pub use export::{render_results, results_filename, save_results};
pub use summary::{write_summary, SessionSummary};
