//! # beam_core - Simply Supported Beam Statics
//!
//! `beam_core` solves a simply supported beam carrying two point loads:
//! support reactions, shear force and bending moment at a chosen section,
//! and the maximum shear and moment along the span. All inputs and outputs
//! are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take a case and return a solution
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::calculations::{solve, BeamCase};
//!
//! // 6 m span, 4 kN at 1 m from A, 3 kN a further 2 m along
//! let case = BeamCase::new(6.0, 4.0, 3.0, 2.0, 1.0);
//! let solution = solve(&case).unwrap();
//!
//! let total = solution.reaction_a_kn + solution.reaction_b_kn;
//! assert!((total - 7.0).abs() < 1e-12);
//!
//! let json = serde_json::to_string_pretty(&solution).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The two point load solver and its diagrams
//! - [`settings`] - Validation mode and display options
//! - [`case_file`] - Batches of cases with shared settings
//! - [`file_io`] - Case file load, atomic save and append
//! - [`units`] - Unit wrappers used for display
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod case_file;
pub mod errors;
pub mod file_io;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{analyze_beam, solve, solve_with, BeamCase, BeamSolution};
pub use case_file::CaseFile;
pub use errors::{BeamError, BeamResult};
pub use file_io::{append_case, load_case_file, save_case_file};
pub use settings::{AnalysisSettings, SpanCheck};
