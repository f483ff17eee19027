//! Command-line host that reconstructs a message from a keypad capture log.
//!
//! The log is a CSV of `timestamp,code` records, one per physical key press.
//! Run with: cargo run --example decode_log -- capture.csv

use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use tap_mini::{Keymap, decode, read_events};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: decode_log <capture.csv>")?;
    let file = File::open(&path).with_context(|| format!("opening {path}"))?;
    let events = read_events(BufReader::new(file))?;
    let message = decode(events, Keymap::ABC);
    println!("{message}");
    Ok(())
}
