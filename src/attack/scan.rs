//! Reference-set collision scan
//!
//! Runs the full pipeline over an ordered list of files and reports the
//! first pair of distinct inputs that land on the same root digest. A file
//! that cannot be read or tokenized is skipped and reported; it never
//! aborts the rest of the scan.

use crate::digest::DigestEngine;
use crate::encoder::Encoder;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{info, warn};

/// A file that made it through the pipeline
#[derive(Clone, Debug, Serialize)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub digest: String,
}

/// A file whose contribution was dropped
#[derive(Clone, Debug, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// The first colliding pair found
#[derive(Clone, Debug, Serialize)]
pub struct Collision {
    pub first: PathBuf,
    pub second: PathBuf,
    pub digest: String,
}

/// Outcome of a reference-set scan
#[derive(Clone, Debug, Default, Serialize)]
pub struct ScanReport {
    /// First pair of distinct inputs with equal root digests, if any
    pub collision: Option<Collision>,
    pub scanned: Vec<ScannedFile>,
    pub skipped: Vec<SkippedFile>,
}

/// Scan files with the default engine
pub fn scan_files(paths: &[PathBuf]) -> ScanReport {
    scan_files_with_engine(DigestEngine::new(), paths)
}

/// Scan files in order, stopping at the first collision
///
/// Two files whose stripped texts are byte-identical are the same input,
/// not a collision; the scan keeps going past them.
pub fn scan_files_with_engine(engine: DigestEngine, paths: &[PathBuf]) -> ScanReport {
    let mut report = ScanReport::default();
    // digest → index of the first scanned file that produced it
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut texts: Vec<String> = Vec::new();

    for path in paths {
        let encoder = match Encoder::from_file_with_engine(engine, path) {
            Ok(encoder) => encoder,
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping reference input");
                report.skipped.push(SkippedFile {
                    path: path.clone(),
                    reason: err.to_string(),
                });
                continue;
            }
        };

        let digest = encoder.root_digest().to_string();
        info!(path = %path.display(), %digest, "scanned");

        if let Some(&earlier) = seen.get(&digest) {
            if texts[earlier] != encoder.original_text() {
                report.collision = Some(Collision {
                    first: report.scanned[earlier].path.clone(),
                    second: path.clone(),
                    digest,
                });
                return report;
            }
        } else {
            seen.insert(digest.clone(), report.scanned.len());
        }

        texts.push(encoder.original_text().to_string());
        report.scanned.push(ScannedFile {
            path: path.clone(),
            digest,
        });
    }

    report
}
