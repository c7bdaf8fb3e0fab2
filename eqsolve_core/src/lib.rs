//! # eqsolve_core - Unit-Aware Single-Equation Solver
//!
//! `eqsolve_core` solves one physics or geometry equation for whichever
//! variable is left unknown. Inputs arrive as raw text with a unit choice,
//! are converted to SI base units, checked against each variable's allowed
//! range, and the result comes back in the requested unit together with a
//! step-by-step derivation trace. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every solve is a pure function of its request
//! - **Data-driven**: equations are descriptors run by one generic engine
//! - **Rich Errors**: structured error types with stable codes, not strings
//!
//! ## Quick Start
//!
//! ```rust
//! use eqsolve_core::{solve, EquationId, SolveRequest};
//!
//! let request = SolveRequest::new("v")
//!     .with("F", "2.87875", "N")
//!     .with("rho", "1.225", "kg/m³")
//!     .with("A", "0.1", "m²")
//!     .with("Cd", "0.47", "")
//!     .in_unit("km/h");
//!
//! let solution = solve(EquationId::DragEquation, &request).unwrap();
//! assert!((solution.value - 36.0).abs() < 1e-9);
//! assert_eq!(solution.display, "36 km/h");
//! ```
//!
//! ## Modules
//!
//! - [`units`] - physical quantity kinds and the unit registry
//! - [`equations`] - equation descriptors, ids and the catalog
//! - [`figures`] - polygon, triangle and midpoint solvers
//! - [`solver`] - requests, solutions and the generic engine
//! - [`format`] - number formatting and trace rendering
//! - [`settings`] - formatting settings loaded from JSON
//! - [`errors`] - structured error types

pub mod equations;
pub mod errors;
pub mod figures;
pub mod format;
pub mod settings;
pub mod solver;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use equations::{solve, solve_by_name, solve_with_settings, EquationId};
pub use errors::{EqResult, SolveError};
pub use settings::{FormatSettings, SolverSettings};
pub use solver::{Calculator, FormField, KnownValue, SolveRequest, Solution};
pub use units::PhysicalQuantityKind;
