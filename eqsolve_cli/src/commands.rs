use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use eqsolve_core::KnownValue;

/// Unit-aware single-equation solver
#[derive(Parser)]
#[command(name = "eqsolve")]
#[command(version, about = "Solve one equation for its unknown variable, with units", long_about = None)]
pub struct CommandLine {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every equation with its variables, kinds and default units
    #[command(alias = "ls")]
    List,
    /// Show the registered units, optionally for one quantity kind
    Units {
        /// Quantity kind, e.g. "velocity" or "specific heat"
        kind: Option<String>,
    },
    /// Solve an equation for one variable
    #[command(alias = "s")]
    Solve {
        /// Equation id, e.g. "drag-equation"
        equation: String,

        /// Variable to solve for
        #[arg(short, long)]
        target: String,

        /// Known value as NAME=VALUE or NAME=VALUE:UNIT (repeatable)
        #[arg(short = 's', long = "set", value_name = "NAME=VALUE[:UNIT]", value_parser = parse_assignment)]
        set: Vec<(String, KnownValue)>,

        /// Output unit for the target
        #[arg(short, long)]
        unit: Option<String>,

        /// Print the solution (or error) as JSON
        #[arg(long)]
        json: bool,

        /// Formatting settings file (JSON)
        #[arg(long, value_name = "FILE")]
        settings: Option<PathBuf>,
    },
    /// Interior angles of the triangle with the given vertices
    Vertices {
        /// Three points as X,Y
        #[arg(num_args = 3, value_name = "X,Y", allow_hyphen_values = true, value_parser = parse_point)]
        points: Vec<(f64, f64)>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// `NAME=VALUE[:UNIT]`; the value stays raw text so the solver reports
/// unparseable numbers itself
pub fn parse_assignment(s: &str) -> Result<(String, KnownValue), String> {
    let (name, rest) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE[:UNIT], got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in '{}'", s));
    }
    let (raw, unit) = rest.split_once(':').unwrap_or((rest, ""));
    Ok((name.to_string(), KnownValue::new(raw.trim(), unit.trim())))
}

/// `X,Y`
pub fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let coord = |c: &str| c.trim().parse::<f64>().map_err(|_| format!("'{}' is not a number", c.trim()));
    Ok((coord(x)?, coord(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        let (name, known) = parse_assignment("rho=1.225:kg/m³").unwrap();
        assert_eq!(name, "rho");
        assert_eq!(known, KnownValue::new("1.225", "kg/m³"));

        let (name, known) = parse_assignment("Cd=0.47").unwrap();
        assert_eq!(name, "Cd");
        assert_eq!(known.unit, "");

        assert!(parse_assignment("0.47").is_err());
        assert!(parse_assignment("=1").is_err());
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("-1.5, 2").unwrap(), (-1.5, 2.0));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn test_cli_parses_solve() {
        let cli = CommandLine::try_parse_from([
            "eqsolve",
            "-v",
            "solve",
            "drag-equation",
            "--target",
            "F",
            "--set",
            "rho=1.225:kg/m³",
            "-s",
            "v=36:km/h",
            "--unit",
            "kN",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Solve { equation, target, set, unit, json, .. } => {
                assert_eq!(equation, "drag-equation");
                assert_eq!(target, "F");
                assert_eq!(set.len(), 2);
                assert_eq!(unit.as_deref(), Some("kN"));
                assert!(!json);
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn test_cli_parses_negative_vertices() {
        let cli = CommandLine::try_parse_from(["eqsolve", "vertices", "0,0", "-4,0", "0,-3"]).unwrap();
        match cli.command {
            Commands::Vertices { points } => assert_eq!(points, vec![(0.0, 0.0), (-4.0, 0.0), (0.0, -3.0)]),
            _ => panic!("expected vertices"),
        }
    }
}
