use std::{env, process::ExitCode};

use anyhow::Result;
use log::error;
use m3u_filter::{job, load_config};

fn app_entry() -> Result<()> {
    let config = load_config(env::var("MF_CONFIG_PATH").unwrap_or_else(|_| "config.yml".into()))?;
    let report = job::run(&config)?;
    println!("{}", report);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    if let Err(e) = app_entry() {
        error!("Fatal error: {:#}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
