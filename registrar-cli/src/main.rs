//! Registrar — student-course registration console.
//!
//! # Usage
//!
//! ```text
//! registrar [--file <PATH>]
//! ```
//!
//! Presents a four-option menu on stdin/stdout: register a student for a
//! course, show the roster, save it to the JSON roster file, exit. The file
//! defaults to `Enrollments.json` in the working directory.

mod session;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use registrar_core::DEFAULT_FILE_NAME;
use session::Session;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "registrar",
    version,
    about = "Register students for courses from an interactive console menu",
    long_about = None,
)]
struct Cli {
    /// Roster file to load at startup and write on save.
    #[arg(long, short = 'f', value_name = "PATH", default_value = DEFAULT_FILE_NAME)]
    file: PathBuf,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(cli.file, stdin.lock(), stdout.lock());
    session.run().context("console session failed")
}
