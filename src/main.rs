//! Bank Deposit CLI
//!
//! Asks for the bank name, deposit count, deposit size and interest rate on
//! stdin, then prints the total interest payment.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! printf 'MyBank\n5\n2000\n10\n' | cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug`, `info` or `warn` to control logging verbosity

use bank_deposit::{session, Result};
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    session::run(stdin.lock(), stdout.lock())?;

    Ok(())
}
