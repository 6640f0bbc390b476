//! solver-cli
//!
//! Command-line front end: flag parsing, dictionary loading, run banner,
//! and hit/summary output. All search logic lives in solver-core.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use solver_core::constants::{
    DEFAULT_CHUNK_SIZE, DEFAULT_MAX_HITS, DEFAULT_PROGRESS_EVERY, DEFAULT_THRESHOLD,
    DEFAULT_WORKERS, SAMPLE_CIPHERTEXT,
};
use solver_core::stages::BifidAlphabet;
use solver_core::utils::{limit_keys, load_dictionary};
use solver_core::{
    parse_pipeline, run_search, RunConfig, SearchProfile, SearchSpace, SolverError,
};

#[derive(Parser, Debug)]
#[command(name = "solver", about = "Multi-stage classical-cipher brute-forcing pipeline")]
struct Cli {
    /// Pipeline stages separated by '>' (e.g. caesar>bifid>b64>xor).
    #[arg(long)]
    pipeline: String,

    /// Ciphertext to decrypt (defaults to a built-in sample).
    #[arg(long)]
    ciphertext: Option<String>,

    /// Candidate-key dictionary, one key per line.
    #[arg(long, default_value = "dictionary.txt")]
    dictionary: PathBuf,

    /// Limit the dictionary to the first N keys (0 = use all keys).
    #[arg(long, default_value_t = 0)]
    key_limit: usize,

    /// Minimum score to record a hit (0.0-2.0; 1.7 works well for English).
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Cap on reported hits.
    #[arg(long, default_value_t = DEFAULT_MAX_HITS)]
    max_hits: usize,

    /// Worker thread count (0 = one per core, leaving one free).
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Parameter combinations per worker task.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: u64,

    /// Progress line every N completed tasks.
    #[arg(long, default_value_t = DEFAULT_PROGRESS_EVERY)]
    progress_every: usize,

    /// Bifid square: "standard" (5x5, J merged into I) or "base64" (8x8).
    #[arg(long, default_value = "standard")]
    bifid_alphabet: String,

    /// Print parameter-space sizing and exit.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<(), SolverError> {
    let stages = parse_pipeline(&cli.pipeline)?;
    let bifid_alphabet = BifidAlphabet::from_name(&cli.bifid_alphabet).ok_or_else(|| {
        SolverError::Validation(format!(
            "unknown bifid alphabet \"{}\" (valid: standard, base64)",
            cli.bifid_alphabet
        ))
    })?;

    let keys = limit_keys(load_dictionary(&cli.dictionary)?, cli.key_limit);
    let space = SearchSpace::compute(&stages, keys.len())?;

    println!("[pipeline] {}", cli.pipeline);
    println!("[keys] {}", keys.len());
    if !space.axes.is_empty() {
        let axes: Vec<String> = space
            .axes
            .iter()
            .map(|a| format!("{}={}", a.stage, a.len))
            .collect();
        println!("[axes] {}", axes.join(" "));
    }
    println!("[estimate] param_tuples={}", space.total);

    if cli.dry_run {
        return Ok(());
    }

    let workers = if cli.workers == 0 {
        num_cpus::get().saturating_sub(1).max(1)
    } else {
        cli.workers
    };

    let config = RunConfig {
        ciphertext: cli
            .ciphertext
            .unwrap_or_else(|| SAMPLE_CIPHERTEXT.to_string()),
        keys: Arc::new(keys),
        stages,
        bifid_alphabet,
        threshold: cli.threshold,
    };
    let profile = SearchProfile {
        workers,
        chunk_size: cli.chunk_size,
        progress_every: cli.progress_every,
        max_hits: cli.max_hits,
    };

    let report = run_search(&config, &space, &profile);

    for hit in &report.hits {
        println!("{:.3} meta={}", hit.score, hit.meta);
    }
    let snapshot = &report.snapshot;
    println!(
        "[done] attempts={} hits={} time={:.2}s",
        snapshot.attempts,
        snapshot.hits_found,
        snapshot.elapsed.as_secs_f64(),
    );
    if snapshot.chunks_failed > 0 {
        eprintln!("[warn] failed_chunks={}", snapshot.chunks_failed);
    }

    Ok(())
}
