//! # Geometric Figure Solvers
//!
//! Figures whose unknowns cannot be expressed as one inverse per variable.
//! Each implements [`Calculator`](crate::solver::Calculator) directly and
//! returns the other derived properties as related values.
//!
//! - [`polygon`] - regular n-gon from n and one measure
//! - [`triangle`] - SSS, SAS, ASA/AAS triangles and angles from vertices
//! - [`midpoint`] - midpoint or missing endpoint of a segment

pub mod midpoint;
pub mod polygon;
pub mod triangle;

pub use midpoint::MidpointCalculator;
pub use polygon::{PolygonCalculator, PolygonProperties};
pub use triangle::{angles_from_vertices, Triangle, TriangleCalculator};
