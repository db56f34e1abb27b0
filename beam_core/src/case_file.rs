//! # Case Files
//!
//! A `CaseFile` groups beam cases that share one set of analysis settings.
//! Case files serialize as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! CaseFile
//! ├── version: schema version string
//! ├── modified: last save timestamp
//! ├── settings: AnalysisSettings (validation mode, display decimals)
//! └── cases: Vec<BeamCase>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use beam_core::case_file::CaseFile;
//! use beam_core::calculations::BeamCase;
//!
//! let mut file = CaseFile::new();
//! file.add_case(BeamCase::new(6.0, 4.0, 3.0, 2.0, 1.0).with_label("Bay 1"));
//!
//! let results = file.solve_all();
//! assert!(results[0].is_ok());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::{solve_with, BeamCase, BeamSolution};
use crate::errors::BeamResult;
use crate::settings::AnalysisSettings;

/// Current schema version for case files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// A set of beam cases with shared settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseFile {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// When the file was last modified
    pub modified: DateTime<Utc>,

    /// Settings applied to every case
    #[serde(default)]
    pub settings: AnalysisSettings,

    /// Cases in input order
    #[serde(default)]
    pub cases: Vec<BeamCase>,
}

impl CaseFile {
    /// Create an empty case file with default settings
    pub fn new() -> Self {
        CaseFile {
            version: SCHEMA_VERSION.to_string(),
            modified: Utc::now(),
            settings: AnalysisSettings::default(),
            cases: Vec::new(),
        }
    }

    /// Replace the settings and return self (builder pattern)
    pub fn with_settings(mut self, settings: AnalysisSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Append a case
    pub fn add_case(&mut self, case: BeamCase) {
        self.cases.push(case);
        self.touch();
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.modified = Utc::now();
    }

    /// Solve every case with the file's settings.
    ///
    /// One result per case, in order. A rejected case does not stop the rest.
    pub fn solve_all(&self) -> Vec<BeamResult<BeamSolution>> {
        self.cases
            .iter()
            .map(|case| solve_with(case, &self.settings))
            .collect()
    }
}

impl Default for CaseFile {
    fn default() -> Self {
        CaseFile::new()
    }
}
