//! # Eqsolve CLI Application
//!
//! Command-line form shell for the solver: list equations and units, solve
//! one equation for its unknown, or compute triangle angles from vertices.

mod commands;

use std::path::Path;

use anyhow::Context;
use eqsolve_core::equations::{registry, EquationCategory};
use eqsolve_core::figures::angles_from_vertices;
use eqsolve_core::format::{format_value, render_trace};
use eqsolve_core::{EquationId, PhysicalQuantityKind, SolveRequest, SolverSettings};
use tracing_subscriber::EnvFilter;

use commands::{CommandLine, Commands};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLine::parse_args();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List => {
            list();
            Ok(())
        }
        Commands::Units { kind } => units(kind.as_deref()),
        Commands::Solve {
            equation,
            target,
            set,
            unit,
            json,
            settings,
        } => {
            let mut request = SolveRequest::new(target);
            request.known.extend(set);
            request.target_unit = unit;
            solve(&equation, &request, json, settings.as_deref())
        }
        Commands::Vertices { points } => vertices(&points),
    }
}

fn list() {
    for category in EquationCategory::all_sorted() {
        println!("{}", category.display_name());
        println!("{}", "─".repeat(category.display_name().chars().count()));
        for id in category.equations() {
            let calc = registry::calculator(id);
            println!("  {:<30} {}", id.code(), calc.name());
            println!("  {:<30} {}", "", calc.formula());
            for var in calc.variables() {
                let unit = if var.default_unit.is_empty() { "-" } else { var.default_unit };
                let default = var
                    .default_value
                    .map(|value| format!(" (default {} {})", value, unit))
                    .unwrap_or_default();
                println!(
                    "      {:<14} {:<4} {:<22} [{}] {}{}",
                    var.name,
                    var.symbol,
                    var.kind.display_name(),
                    unit,
                    var.domain.describe(),
                    default
                );
            }
            println!("      inputs: {}", calc.input_rule());
            println!();
        }
    }
}

fn units(kind: Option<&str>) -> anyhow::Result<()> {
    let kinds = match kind {
        Some(name) => vec![PhysicalQuantityKind::from_str_flexible(name)?],
        None => PhysicalQuantityKind::ALL.to_vec(),
    };
    for kind in kinds {
        println!("{} (base: {})", kind.display_name(), display_symbol(kind.base_unit().symbol));
        for unit in kind.units() {
            let aliases = if unit.aliases.is_empty() {
                String::new()
            } else {
                format!("  (also: {})", unit.aliases.join(", "))
            };
            println!("  {:<10} {}{}", display_symbol(unit.symbol), unit.name, aliases);
        }
        println!();
    }
    Ok(())
}

fn display_symbol(symbol: &str) -> &str {
    if symbol.is_empty() {
        "-"
    } else {
        symbol
    }
}

fn solve(equation: &str, request: &SolveRequest, json: bool, settings: Option<&Path>) -> anyhow::Result<()> {
    let settings = match settings {
        Some(path) => SolverSettings::load(path).with_context(|| format!("loading settings from {}", path.display()))?,
        None => SolverSettings::default(),
    };
    let id = EquationId::from_str_flexible(equation)?;
    tracing::debug!(equation = %id, target = %request.target, known = request.known.len(), "dispatching solve");

    match eqsolve_core::solve_with_settings(id, request, &settings) {
        Ok(solution) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&solution)?);
                return Ok(());
            }
            println!("═══════════════════════════════════════");
            println!("  {} ({})", id.display_name(), id);
            println!("═══════════════════════════════════════");
            println!();
            println!("Result: {} = {}", solution.variable, solution.display);
            if !solution.related.is_empty() {
                println!();
                println!("Also derived:");
                for related in &solution.related {
                    println!("  {} = {}", related.variable, related.display);
                }
            }
            println!();
            println!("Steps:");
            println!("{}", render_trace(&solution.trace));
            Ok(())
        }
        Err(e) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&e)?);
            }
            Err(anyhow::Error::new(e).context(format!("solving {} for '{}'", id, request.target)))
        }
    }
}

fn vertices(points: &[(f64, f64)]) -> anyhow::Result<()> {
    let [p1, p2, p3] = points else {
        anyhow::bail!("expected exactly three points, got {}", points.len());
    };
    let angles = angles_from_vertices(*p1, *p2, *p3)?;
    for (label, angle) in ["A", "B", "C"].iter().zip(angles) {
        println!("{} = {}°", label, format_value(angle));
    }
    println!("A + B + C = {}°", format_value(angles.iter().sum()));
    Ok(())
}
