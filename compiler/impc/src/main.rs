//! Imp CLI.
//!
//! `imp <file.imp>` symbolically executes the single function in the
//! file and prints one JSON document (one entry per explored path) to
//! stdout. Set `IMP_LOG` (an `env_filter` directive) for diagnostics on
//! stderr.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use impc::{render_json, run_source};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("IMP_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(path), None) = (args.next(), args.next()) else {
        eprintln!("Usage: imp <file.imp>");
        eprintln!();
        eprintln!("Symbolically executes the function in <file.imp> and prints");
        eprintln!("one JSON entry per control-flow path.");
        return ExitCode::FAILURE;
    };

    let source = match std::fs::read_to_string(&path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read `{path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let results = match run_source(&source) {
        Ok(results) => results,
        Err(err) => {
            match err.span() {
                Some(span) => {
                    let (line, col) = line_col(&source, span.start);
                    eprintln!("error: {path}:{line}:{col}: {err}");
                }
                None => eprintln!("error: {err}"),
            }
            return ExitCode::FAILURE;
        }
    };

    match render_json(&results) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: cannot encode results: {err}");
            ExitCode::FAILURE
        }
    }
}

/// 1-based line and column of a byte offset.
fn line_col(source: &str, offset: u32) -> (usize, usize) {
    let offset = (offset as usize).min(source.len());
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let col = before
        .rfind('\n')
        .map_or(offset, |newline| offset - newline - 1)
        + 1;
    (line, col)
}
