//! Write the equation reference from the live catalog.
//!
//! ```bash
//! cargo run --bin gen-equations [OUTPUT]
//! ```
//!
//! OUTPUT defaults to `eqsolve_core/EQUATIONS.md`, relative to the workspace
//! root.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use eqsolve_core::equations::{generate_equations_markdown, EquationCategory, ALL_EQUATIONS};

const DEFAULT_OUTPUT: &str = "eqsolve_core/EQUATIONS.md";

fn output_path(arg: Option<std::ffi::OsString>) -> PathBuf {
    arg.map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
}

fn summary(output: &Path, bytes: usize) -> String {
    format!(
        "{} equations in {} categories written to {} ({} bytes)",
        ALL_EQUATIONS.len(),
        EquationCategory::ALL.len(),
        output.display(),
        bytes
    )
}

fn main() -> ExitCode {
    let output = output_path(std::env::args_os().nth(1));
    let markdown = generate_equations_markdown();

    if let Err(e) = std::fs::write(&output, &markdown) {
        eprintln!("cannot write {}: {}", output.display(), e);
        return ExitCode::FAILURE;
    }
    println!("{}", summary(&output, markdown.len()));
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        assert_eq!(output_path(None), PathBuf::from("eqsolve_core/EQUATIONS.md"));
        assert_eq!(output_path(Some("docs/eq.md".into())), PathBuf::from("docs/eq.md"));
    }

    #[test]
    fn test_summary_counts_equations() {
        let line = summary(Path::new("EQUATIONS.md"), 1234);
        assert_eq!(line, "20 equations in 6 categories written to EQUATIONS.md (1234 bytes)");
    }
}
