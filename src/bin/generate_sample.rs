//! `generate-sample` - draw the blind evaluation sample from a review pool.
//!
//! Exit codes: 0 on success, 2 on configuration problems (including an
//! invalid target distribution), 3 when the pool cannot meet a stratum
//! target, 1 for anything else.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use review_sampler::{
    write_artifact, PoolLoader, SampleManifest, SampleSpec, SamplerError, StratifiedSampler,
    TargetDistribution, DEFAULT_SAMPLE_SIZE, DEFAULT_SEED, EXPECTED_POOL_SIZE,
};

#[derive(Debug, Parser)]
#[command(
    name = "generate-sample",
    version,
    about = "Deterministically draw a stratified blind evaluation sample from a labeled review pool"
)]
struct Args {
    /// Pool file(s), e.g. train.txt and test.txt; order matters for
    /// reproducibility
    #[arg(long = "pool", required = true)]
    pool: Vec<PathBuf>,

    /// Output path for the sample (one review id per line); the manifest is
    /// written next to it as <out>.manifest.json
    #[arg(long)]
    out: PathBuf,

    /// Random seed for the deterministic draw
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Total sample size
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    total: usize,

    /// Optional TOML file with target fractions; defaults to the documented
    /// protocol distribution
    #[arg(long)]
    config: Option<PathBuf>,

    /// Replace an existing artifact (regeneration is deliberate, never
    /// silent)
    #[arg(long)]
    force: bool,

    /// Field delimiter override; by default .csv files are comma-separated
    /// and everything else tab-separated
    #[arg(long)]
    delimiter: Option<char>,

    /// Treat pool files as headerless
    #[arg(long)]
    no_header: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}: {}", err.category(), err);
            eprintln!("error: {}", err);
            match err {
                SamplerError::InvalidDistribution { .. } | SamplerError::Config { .. } => {
                    ExitCode::from(2)
                }
                SamplerError::InsufficientPool { .. } => ExitCode::from(3),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(args: &Args) -> Result<(), SamplerError> {
    let distribution = match &args.config {
        Some(path) => TargetDistribution::from_file(path)?,
        None => TargetDistribution::default(),
    };

    let spec = SampleSpec::builder()
        .total(args.total)
        .seed(args.seed)
        .distribution(distribution)
        .build()?;

    let mut loader = PoolLoader::new().with_header(!args.no_header);
    if let Some(delimiter) = args.delimiter {
        loader = loader.with_delimiter(delimiter);
    }
    let pool = loader.load(&args.pool)?;

    if pool.len() != EXPECTED_POOL_SIZE {
        log::warn!(
            "pool size {} differs from the documented protocol pool of {}",
            pool.len(),
            EXPECTED_POOL_SIZE
        );
    }

    let sample = StratifiedSampler::new(spec).sample(&pool)?;
    let manifest = SampleManifest::new(&spec, pool.len(), &sample);
    write_artifact(&sample, &manifest, &args.out, args.force)?;

    println!(
        "wrote {} review ids to {} (seed {}, pool {})",
        sample.len(),
        args.out.display(),
        spec.seed,
        pool.len()
    );
    Ok(())
}
