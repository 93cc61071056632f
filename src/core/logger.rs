use std::fs::{create_dir_all, OpenOptions};
use std::io::Write;
use std::time::Instant;

use anyhow::Result;
use serde::Serialize;

pub fn measure_start(label: &str) -> (String, Instant) {
    (label.to_string(), Instant::now())
}

pub fn measure_end(start: (String, Instant)) {
    let elapsed = start.1.elapsed();
    println!("Elapsed: {:.2?} for '{}'", elapsed, start.0);
}

/// One line per deployment, appended to `output/deploy.jsonl`.
#[derive(Serialize)]
pub struct DeployLog {
    pub chain: String,
    pub contract: String,
    pub address: String,
    pub tx_hash: String,
    pub gas_used: u128,
    pub elapsed_ms: u128,
}

#[derive(Serialize)]
pub struct SwapLog {
    pub chain: String,
    pub from_token: String,
    pub to_token: String,
    pub amount_in: String,
    pub amount_out: String,
    pub elapsed_ms: u128,
}

pub fn log_deploy(log: &DeployLog) -> Result<()> {
    append_jsonl("output/deploy.jsonl", log)
}

pub fn log_swap(log: &SwapLog) -> Result<()> {
    append_jsonl("output/swap.jsonl", log)
}

fn append_jsonl<T: Serialize>(path: &str, record: &T) -> Result<()> {
    let json = serde_json::to_string(record)?;
    println!("{json}");

    create_dir_all("output")?;
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    writeln!(file, "{json}")?;
    Ok(())
}
