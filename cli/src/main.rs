//! `prng` - write a deterministic PRNG run to a text file
//!
//! ```text
//! prng file_path=out.txt seed_u8=00,1F length_u8=64 types_of_arr=u64:5,f64:3
//! prng --config run.json --checkpoint-out state.json
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use prng_core_rs::output::render_session;
use prng_core_rs::{RandomNumberDevice, RunConfig};

#[derive(Parser, Debug)]
#[command(
    name = "prng",
    version,
    about = "Seed a hash-conditioned PRNG and dump its state and drawn values"
)]
struct Opts {
    /// key=value assignments: file_path, seed_u8, length_u8, types_of_arr
    assignments: Vec<String>,

    /// Read the run configuration from a JSON file instead of assignments
    #[arg(long, conflicts_with = "assignments")]
    config: Option<PathBuf>,

    /// Also write a JSON checkpoint of the final device state
    #[arg(long)]
    checkpoint_out: Option<PathBuf>,
}

fn load_config(opts: &Opts) -> Result<RunConfig> {
    if let Some(path) = &opts.config {
        return RunConfig::from_json_file(path)
            .with_context(|| format!("load config {}", path.display()));
    }
    if opts.assignments.is_empty() {
        bail!("no arguments: pass key=value assignments or --config <file>");
    }
    RunConfig::from_assignments(&opts.assignments).context("parse arguments")
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();
    let opts = Opts::parse();

    let config = load_config(&opts)?;
    log::info!(
        "run: length_u8={} seed_len={} requests={}",
        config.length_u8,
        config.seed_u8.len(),
        config.requests.len()
    );

    let mut device =
        RandomNumberDevice::new(&config.seed_u8, config.length_u8).context("construct device")?;

    // render fully before touching the filesystem so a failure leaves no file
    let text = render_session(&mut device, &config.requests);
    let checkpoint = match &opts.checkpoint_out {
        Some(_) => Some(device.checkpoint()?.to_json()?),
        None => None,
    };

    std::fs::write(&config.file_path, text)
        .with_context(|| format!("write {}", config.file_path))?;
    if let (Some(path), Some(json)) = (&opts.checkpoint_out, checkpoint) {
        std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    }

    log::info!("wrote {}", config.file_path);
    Ok(())
}
