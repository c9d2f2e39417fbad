//! End-to-end pipeline tests
//!
//! Drives the public library API through the scenarios the system promises
//! to uphold: deterministic fingerprints, inclusion proofs that round-trip,
//! tamper detection, and the collision harness exercised against a
//! deliberately narrowed digest.

use huffmark::attack::{random_probe, scan_files, ProbeConfig, ProbeOutcome};
use huffmark::{tree, DigestEngine, Encoder, ProofPath};
use std::fs;
use tempfile::tempdir;

const SCENARIO: &str = "the cat sat on the mat";

#[test]
fn scenario_builds_five_leaves_and_one_root() {
    let encoder = Encoder::from_text(SCENARIO).unwrap();
    let table = encoder.frequency_table();

    assert_eq!(table.len(), 5);
    assert_eq!(table.get("the"), Some(2));
    for token in ["cat", "sat", "on", "mat"] {
        assert_eq!(table.get(token), Some(1));
    }

    // 5 leaves, 4 merges
    assert_eq!(encoder.tree().leaves().count(), 5);
    assert_eq!(encoder.tree().len(), 9);
}

#[test]
fn scenario_is_deterministic_across_runs() {
    let a = Encoder::from_text(SCENARIO).unwrap();
    let b = Encoder::from_text(SCENARIO).unwrap();
    assert_eq!(a.root_digest(), b.root_digest());
}

#[test]
fn scenario_frequent_token_has_shorter_proof() {
    let encoder = Encoder::from_text(SCENARIO).unwrap();
    let the = encoder.derive_path("the").unwrap();
    let cat = encoder.derive_path("cat").unwrap();
    assert!(the.len() < cat.len(), "weight 2 must sit above weight 1");

    let root = encoder.root_digest().to_string();
    assert!(encoder.verify("the", &the, &root));
    assert!(encoder.verify("cat", &cat, &root));
}

#[test]
fn every_leaf_round_trips() {
    let encoder = Encoder::from_text("to be or not to be that is the question").unwrap();
    let root = encoder.root_digest().to_string();
    for (token, _) in encoder.frequency_table().iter() {
        let path = encoder.derive_path(token).unwrap();
        assert!(encoder.verify(token, &path, &root), "failed for {token:?}");
    }
}

#[test]
fn different_inputs_fingerprint_differently() {
    let a = Encoder::from_text("the cat sat on the mat").unwrap();
    let b = Encoder::from_text("the dog sat on the mat").unwrap();
    let c = Encoder::from_text("the cat cat sat on mat").unwrap();
    assert_ne!(a.root_digest(), b.root_digest());
    assert_ne!(a.root_digest(), c.root_digest());
}

#[test]
fn singleton_input_root_is_leaf_digest() {
    let encoder = Encoder::from_text("hello").unwrap();
    assert_eq!(encoder.tree().len(), 1);
    assert_eq!(encoder.root_digest(), DigestEngine::new().digest("hello"));
}

#[test]
fn tampered_proof_is_rejected() {
    let encoder = Encoder::from_text(SCENARIO).unwrap();
    let root = encoder.root_digest().to_string();
    let path = encoder.derive_path("on").unwrap();

    // Flip one hex digit of the first sibling by editing the serialized proof
    let mut value = serde_json::to_value(&path).unwrap();
    let sibling = value[0]["sibling"].as_str().unwrap().to_string();
    let flipped = if sibling.starts_with('0') { "1" } else { "0" };
    value[0]["sibling"] = serde_json::Value::String(format!("{}{}", flipped, &sibling[1..]));

    let tampered: ProofPath = serde_json::from_value(value).unwrap();
    assert!(!encoder.verify("on", &tampered, &root));
}

#[test]
fn proofs_verify_without_the_tree() {
    // A verifier holding only the chunk, the proof, and the root digest
    // needs no access to the original tree.
    let encoder = Encoder::from_text(SCENARIO).unwrap();
    let root = encoder.root_digest().to_string();
    let path = encoder.derive_path("mat").unwrap();
    drop(encoder);

    assert!(tree::verify(&DigestEngine::new(), "mat", &path, &root));
}

#[test]
fn file_and_string_inputs_agree() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("input.txt");
    fs::write(&path, SCENARIO).unwrap();

    let from_file = Encoder::from_file(&path).unwrap();
    let from_text = Encoder::from_text(SCENARIO).unwrap();
    assert_eq!(from_file.root_digest(), from_text.root_digest());
    assert_eq!(from_file.original_text(), from_text.original_text());
}

#[test]
fn scan_skips_bad_files_and_keeps_going() {
    let dir = tempdir().unwrap();
    let mut paths = Vec::new();
    for (name, content) in [("a.txt", "first file"), ("b.txt", "second file")] {
        let p = dir.path().join(name);
        fs::write(&p, content).unwrap();
        paths.push(p);
    }
    paths.insert(1, dir.path().join("absent.txt"));

    let report = scan_files(&paths);
    assert!(report.collision.is_none());
    assert_eq!(report.scanned.len(), 2);
    assert_eq!(report.skipped.len(), 1);
}

#[test]
fn narrowed_digest_probe_finds_collision_within_budget() {
    let engine = DigestEngine::new().with_width(1);
    let reference = Encoder::with_engine(engine, "collide me").unwrap();
    let config = ProbeConfig {
        attempts: 10_000,
        report_interval: 0,
        seed: Some(7),
    };

    let outcome = random_probe(&reference, &config).unwrap();
    match outcome {
        ProbeOutcome::Found { candidate, .. } => {
            assert_ne!(candidate, reference.original_text());
            let collided = Encoder::with_engine(engine, &candidate).unwrap();
            assert_eq!(collided.root_digest(), reference.root_digest());
        }
        ProbeOutcome::Exhausted { .. } => panic!("narrowed space must collide"),
    }
}
