//! # Beam Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Case` - Input parameters (JSON-serializable)
//! - `*Solution` - Calculation results (JSON-serializable)
//! - `solve(input) -> Result<*Solution, BeamError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`two_point_load`] - Reactions, section shear/moment and maxima for a
//!   simply-supported beam under two point loads
//! - [`diagrams`] - Shear force and bending moment diagrams for a solved case

pub mod diagrams;
pub mod two_point_load;

// Re-export commonly used types
pub use diagrams::{DiagramVertices, ShearMomentDiagram};
pub use two_point_load::{analyze_beam, solve, solve_with, BeamCase, BeamSolution};
