//! Collision-search harness against the digest pipeline
//!
//! Two independent black-box probes: a scan over a set of reference files,
//! and a random-string search against one fixed reference input.

mod probe;
mod scan;

pub use probe::{random_probe, ProbeConfig, ProbeOutcome, DEFAULT_ATTEMPTS, DEFAULT_INTERVAL};
pub use scan::{scan_files, scan_files_with_engine, Collision, ScanReport, ScannedFile, SkippedFile};
