//! Render an S-expression read from stdin as `output.png`, via Graphviz `dot`.
//!
//! ```ignore
//! echo '(S (NP=H (N dogs)) (VP (V=H bark)))' | sexp2png
//! ```
//!
//! At a terminal, prompts for a single line.

use std::io::{BufRead, IsTerminal, Read, Write};

use tracing_subscriber::EnvFilter;

use sexp2png::{sexp2png, Config, Error};

fn read_input() -> std::io::Result<String> {
    let mut stdin = std::io::stdin().lock();
    let mut input = String::new();
    if stdin.is_terminal() {
        let mut stderr = std::io::stderr().lock();
        write!(stderr, "S-expression:")?;
        stderr.flush()?;
        stdin.read_line(&mut input)?;
    } else {
        stdin.read_to_string(&mut input)?;
    }
    Ok(input)
}

fn main() -> Result<(), Error> {
    // install global collector configured based on RUST_LOG env var.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let input = read_input()?;
    let output = sexp2png(&input, &Config::default())?;
    tracing::debug!("conversion finished: {}", output.display());
    Ok(())
}
