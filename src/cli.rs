// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the ringlist demo binary.
//!
//! Three subcommands: `demo` replays the canonical insert/delete scenario
//! while recording structure dumps, `stress` hammers the ends of the list
//! with verification after every step, and `snapshot` prints the JSON form
//! of a small list for piping into other tooling.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ringlist",
    about = "Arena-backed ring list demo driver",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay the demonstration scenario, dumping structure after each phase
    Demo {
        /// Directory for the HTML report and .dot sources
        #[arg(short, long, default_value = "logs")]
        output: String,
    },
    /// Run head/tail insertion loops, verifying after every operation
    Stress {
        /// Elements inserted at the head
        #[arg(long, default_value_t = 100)]
        head: usize,
        /// Elements inserted at the tail
        #[arg(long, default_value_t = 10)]
        tail: usize,
    },
    /// Print the JSON snapshot of a small example list
    Snapshot,
}

/// Print a success line, with a green check when stdout is a terminal.
pub fn report_ok(message: &str) {
    if colored(atty::Stream::Stdout) {
        println!("\x1b[32m✓\x1b[0m {}", message);
    } else {
        println!("ok: {}", message);
    }
}

/// Print a failure line, with a red cross when stderr is a terminal.
pub fn report_err(message: &str) {
    if colored(atty::Stream::Stderr) {
        eprintln!("\x1b[31m✗\x1b[0m {}", message);
    } else {
        eprintln!("error: {}", message);
    }
}

fn colored(stream: atty::Stream) -> bool {
    atty::is(stream) && std::env::var_os("NO_COLOR").is_none()
}
