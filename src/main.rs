use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use log::warn;
use keystore_b64::{encode, envs, report};

const SUCCESS: i32 = 0;
const FAILURE: i32 = 1;

/// Encodes an Android upload keystore as a single-line Base64 CI secret.
#[derive(Parser)]
#[command(name = "encode-keystore", version)]
struct Cli {
    /// Keystore to encode
    #[arg(short, long, default_value = envs::KEYSTORE_FILE)]
    input: PathBuf,
    /// Where to write the Base64 text
    #[arg(short, long, default_value = envs::OUTPUT_FILE)]
    output: PathBuf,
    /// Skip the upload instructions
    #[arg(short, long)]
    quiet: bool,
}

/// Console output is informational; losing it must not change the outcome.
fn shown(r: io::Result<()>) {
    if let Err(e) = r {
        if e.kind() != io::ErrorKind::BrokenPipe {
            warn!("console output failed: {}", e);
        }
    }
}

fn run(cli: &Cli) -> bool {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    shown(report::banner(&mut out));
    let ok = match encode(&cli.input, &cli.output) {
        Ok(x) => {
            shown(report::success(&mut out, &x, cli.quiet));
            true
        }
        Err(e) => {
            shown(report::error(&mut io::stderr(), &e));
            false
        }
    };
    shown(report::finished(&mut out, ok));
    shown(out.flush());

    ok
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error"))
        .try_init()
        .context("failed to initialise logging")?;
    let cli = Cli::parse();

    std::process::exit(if run(&cli) { SUCCESS } else { FAILURE });
}
