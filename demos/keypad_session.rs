//! Keypad Session
//!
//! Drives the calculator display from key names read on stdin, one or more
//! per line separated by whitespace, and prints the display after each line.
//!
//! Key names follow browser `KeyboardEvent.key` values: digits, `.`,
//! `+ - * /`, `Enter`, `=`, `Escape`, `Backspace`.
//!
//! Run with: cargo run --example keypad_session [display.toml]
//!
//! ```text
//! > 1 0 * 2 / 4 Enter
//! 5
//! ```
//!
//! On end of input the session prints how many phase changes were kept and
//! the time they span.
//!
//! Set `RUST_LOG=tally=debug` to watch each state machine step.

use std::io::{self, BufRead, Write};
use tally::config::DisplayConfig;
use tally::display::CalculatorDisplay;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => DisplayConfig::load(path)?,
        None => DisplayConfig::default(),
    };
    let mut display = CalculatorDisplay::new(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", display.text())?;

    for line in stdin.lock().lines() {
        let line = line?;
        for key in line.split_whitespace() {
            if display.press_key(key).is_none() {
                writeln!(stdout, "(ignored key {key:?})")?;
            }
            if let Some(notice) = display.take_notice() {
                writeln!(stdout, "! {notice}")?;
            }
        }
        writeln!(stdout, "{}", display.text())?;
    }

    let history = display.calculator().history();
    if let Some(elapsed) = history.duration() {
        writeln!(
            stdout,
            "{} phase changes over {:.1}s",
            history.len(),
            elapsed.as_secs_f64()
        )?;
    }

    Ok(())
}
