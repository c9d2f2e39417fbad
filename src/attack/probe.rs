//! Random-search collision probe
//!
//! Fixes one reference input and throws random alphanumeric strings of the
//! same length at the pipeline until one of them lands on the reference
//! root digest or the attempt budget runs out. Attempts are independent,
//! so they fan out across the rayon pool; the first hit cancels the rest.

use crate::digest::DigestEngine;
use crate::encoder::Encoder;
use crate::Result;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Attempt budget used by the original harness
pub const DEFAULT_ATTEMPTS: u64 = 10_000;

/// How often progress is logged, in attempts
pub const DEFAULT_INTERVAL: u64 = 1_000;

/// Knobs for the random-search probe
#[derive(Clone, Copy, Debug)]
pub struct ProbeConfig {
    /// Give up after this many candidates
    pub attempts: u64,
    /// Log progress every this many attempts (0 disables)
    pub report_interval: u64,
    /// Seed candidate generation per attempt index, for reproducible runs
    pub seed: Option<u64>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        ProbeConfig {
            attempts: DEFAULT_ATTEMPTS,
            report_interval: DEFAULT_INTERVAL,
            seed: None,
        }
    }
}

/// How a probe run ended
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// A distinct input collided with the reference root digest
    Found { candidate: String, attempts: u64 },
    /// The attempt budget ran out without a collision
    Exhausted { attempts: u64 },
}

impl ProbeOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, ProbeOutcome::Found { .. })
    }
}

/// Search for a random-string collision against a reference input
///
/// Candidates run the full tokenize-build-digest pipeline with the
/// reference's engine. A candidate counts only if its stripped text differs
/// from the reference's. Pipeline failures inside the search are fatal:
/// the probe cannot say anything about a broken digest function.
pub fn random_probe(reference: &Encoder, config: &ProbeConfig) -> Result<ProbeOutcome> {
    let engine = reference.engine();
    let target_digest = reference.root_digest();
    let target_text = reference.original_text();
    let length = target_text.chars().count();

    let tried = AtomicU64::new(0);

    let hit = (0..config.attempts)
        .into_par_iter()
        .find_map_any(|index| -> Option<Result<String>> {
            let candidate = candidate_string(length, config.seed, index);

            let count = tried.fetch_add(1, Ordering::Relaxed) + 1;
            if config.report_interval > 0 && count % config.report_interval == 0 {
                info!(attempts = count, "no collision yet");
            }

            match Encoder::with_engine(engine, &candidate) {
                Ok(encoder)
                    if encoder.root_digest() == target_digest
                        && encoder.original_text() != target_text =>
                {
                    Some(Ok(candidate))
                }
                Ok(_) => None,
                Err(err) => Some(Err(err)),
            }
        });

    match hit {
        Some(Ok(candidate)) => Ok(ProbeOutcome::Found {
            candidate,
            attempts: tried.load(Ordering::Relaxed),
        }),
        Some(Err(err)) => Err(err),
        None => Ok(ProbeOutcome::Exhausted {
            attempts: config.attempts,
        }),
    }
}

/// Random alphanumeric string of the reference's length
///
/// With a seed, the RNG is derived from the attempt index so candidates do
/// not depend on how rayon schedules the attempts.
fn candidate_string(length: usize, seed: Option<u64>, index: u64) -> String {
    match seed {
        Some(seed) => fill(&mut StdRng::seed_from_u64(seed.wrapping_add(index)), length),
        None => fill(&mut rand::rng(), length),
    }
}

fn fill<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| {
            let idx: u8 = rng.random_range(0..62);
            let byte = match idx {
                0..=9 => b'0' + idx,
                10..=35 => b'a' + (idx - 10),
                _ => b'A' + (idx - 36),
            };
            byte as char
        })
        .collect()
}
