use anyhow::{Context, Result};
use clap::Parser;
use seq_order_count::{logging, read_sequences, Counter, CounterConfig, Relation, Report};
use std::path::PathBuf;

/// Count the orderings of the sequences in a two-line record file in which
/// every substring comes before the sequences containing it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path of the record file (header line, sequence line, ...)
    fasta: PathBuf,

    /// Reduce the count modulo this number [default: 100003]
    #[arg(long)]
    modulus: Option<u64>,

    /// JSON config file, e.g. {"modulus": 100003}
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a JSON report instead of the bare count
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    logging::init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => CounterConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CounterConfig::default(),
    };
    if let Some(modulus) = args.modulus {
        config.modulus = modulus;
    }

    let seqs = read_sequences(&args.fasta)?;
    let relation = Relation::from_sequences(&seqs)
        .with_context(|| format!("failed to extract sequences from {}", args.fasta.display()))?;
    let mut counter = Counter::with_config(&relation, &config)?;
    let count = counter.count();

    if args.json {
        let report =
            Report::new(&seqs, &relation, count, counter.modulus(), counter.cached_states());
        println!("{}", report.to_json()?);
    } else {
        println!("{}", count);
    }
    Ok(())
}
