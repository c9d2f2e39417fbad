//! huffmark CLI - fingerprint text, derive and check inclusion proofs, and
//! hunt for digest collisions from the command line.

use clap::{Parser, Subcommand};
use huffmark::attack::{self, ProbeConfig};
use huffmark::{tree, DigestEngine, Encoder, ProofPath, DEFAULT_ROUNDS};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "huffmark")]
#[command(about = "Frequency-weighted merkle fingerprints for text")]
#[command(version)]
struct Cli {
    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Mixing rounds for the digest function
    #[arg(long, default_value_t = DEFAULT_ROUNDS)]
    rounds: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Fingerprint a string or file
    Digest {
        /// The text to fingerprint
        input: Option<String>,
        /// Read the input from a file instead
        #[arg(short = 'F', long, conflicts_with = "input")]
        file: Option<PathBuf>,
        /// Also list the leaf nodes
        #[arg(long)]
        leaves: bool,
    },

    /// Derive the inclusion proof for a token
    Prove {
        /// The token to prove
        label: String,
        /// The text the tree is built from
        input: Option<String>,
        /// Read the input from a file instead
        #[arg(short = 'F', long, conflicts_with = "input")]
        file: Option<PathBuf>,
    },

    /// Verify a data chunk against a proof and a root digest
    Verify {
        /// The raw chunk the proof was derived for
        chunk: String,
        /// The proof path as JSON (output of `prove`)
        #[arg(short, long)]
        proof: String,
        /// The expected root digest
        #[arg(short, long)]
        root: String,
    },

    /// Scan reference files for pairwise collisions
    Scan {
        /// Files to scan, in order
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Search for a random-string collision against a reference input
    Probe {
        /// The reference text
        input: Option<String>,
        /// Read the reference from a file instead
        #[arg(short = 'F', long, conflicts_with = "input")]
        file: Option<PathBuf>,
        /// Attempt budget
        #[arg(long, default_value_t = attack::DEFAULT_ATTEMPTS)]
        attempts: u64,
        /// Progress log interval in attempts (0 disables)
        #[arg(long, default_value_t = attack::DEFAULT_INTERVAL)]
        interval: u64,
        /// Seed for reproducible candidate generation
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let engine = DigestEngine::with_rounds(cli.rounds);

    match cli.command {
        Commands::Digest {
            input,
            file,
            leaves,
        } => {
            let encoder = load_encoder(engine, input, file)?;
            let mut value = serde_json::json!({
                "digest": encoder.root_digest(),
                "tokens": encoder.frequency_table().len(),
                "nodes": encoder.tree().len(),
            });
            if leaves {
                let listed: Vec<_> = encoder
                    .tree()
                    .leaves()
                    .map(|leaf| {
                        serde_json::json!({
                            "label": leaf.token(),
                            "weight": leaf.weight,
                            "digest": leaf.digest,
                        })
                    })
                    .collect();
                value["leaves"] = serde_json::Value::Array(listed);
            }
            output(&cli.format, &value);
        }

        Commands::Prove { label, input, file } => {
            let encoder = load_encoder(engine, input, file)?;
            match encoder.derive_path(&label) {
                Some(path) => {
                    output(
                        &cli.format,
                        &serde_json::json!({
                            "label": label,
                            "root": encoder.root_digest(),
                            "depth": path.len(),
                            "proof": path,
                        }),
                    );
                }
                None => {
                    output(
                        &cli.format,
                        &serde_json::json!({
                            "status": "error",
                            "message": format!("No leaf with label {:?}", label)
                        }),
                    );
                    std::process::exit(1);
                }
            }
        }

        Commands::Verify { chunk, proof, root } => {
            let path: ProofPath = serde_json::from_str(&proof)?;
            let valid = tree::verify(&engine, &chunk, &path, &root);
            output(
                &cli.format,
                &serde_json::json!({
                    "valid": valid,
                    "root": root,
                }),
            );
            if !valid {
                std::process::exit(1);
            }
        }

        Commands::Scan { files } => {
            let report = attack::scan_files_with_engine(engine, &files);
            output(&cli.format, &serde_json::to_value(&report)?);
        }

        Commands::Probe {
            input,
            file,
            attempts,
            interval,
            seed,
        } => {
            let reference = load_encoder(engine, input, file)?;
            let config = ProbeConfig {
                attempts,
                report_interval: interval,
                seed,
            };
            let outcome = attack::random_probe(&reference, &config)?;
            let mut value = serde_json::to_value(&outcome)?;
            value["reference_digest"] = serde_json::Value::String(reference.root_digest().into());
            output(&cli.format, &value);
        }
    }

    Ok(())
}

fn load_encoder(
    engine: DigestEngine,
    input: Option<String>,
    file: Option<PathBuf>,
) -> anyhow::Result<Encoder> {
    match (input, file) {
        (Some(text), None) => Ok(Encoder::with_engine(engine, &text)?),
        (None, Some(path)) => Ok(Encoder::from_file_with_engine(engine, path)?),
        _ => anyhow::bail!("provide either an input string or --file"),
    }
}

fn output(format: &OutputFormat, value: &serde_json::Value) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(value).unwrap());
        }
        OutputFormat::Text => {
            println!("{}", serde_json::to_string_pretty(value).unwrap());
        }
    }
}
