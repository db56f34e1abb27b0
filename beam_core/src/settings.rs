//! # Analysis Settings
//!
//! Options that change how a case is validated and presented. Settings travel
//! inside case files (see [`crate::file_io`]) and every field has a default,
//! so a file may omit the whole block or any part of it.
//!
//! ```rust
//! use beam_core::settings::{AnalysisSettings, SpanCheck};
//!
//! let settings: AnalysisSettings = serde_json::from_str(r#"{"span_check": "Unchecked"}"#).unwrap();
//! assert_eq!(settings.span_check, SpanCheck::Unchecked);
//! assert_eq!(settings.display_decimals, 2);
//! ```

use serde::{Deserialize, Serialize};

/// Default number of decimals for reported forces and moments
pub const DEFAULT_DISPLAY_DECIMALS: usize = 2;

/// Default number of evenly spaced diagram samples
pub const DEFAULT_DIAGRAM_SAMPLES: usize = 101;

/// How strictly a case is checked before solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpanCheck {
    /// Reject non-finite inputs, non-positive spans and sections off the beam,
    /// in addition to the load position check.
    #[default]
    Strict,
    /// Only the load position check. A zero span or a NaN input flows through
    /// the arithmetic unchanged.
    Unchecked,
}

/// Settings shared by every case in a case file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Validation mode
    pub span_check: SpanCheck,

    /// Decimals used when printing forces and moments. Display only; solved
    /// values are never rounded.
    pub display_decimals: usize,

    /// Evenly spaced samples per shear/moment diagram
    pub diagram_samples: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            span_check: SpanCheck::Strict,
            display_decimals: DEFAULT_DISPLAY_DECIMALS,
            diagram_samples: DEFAULT_DIAGRAM_SAMPLES,
        }
    }
}

impl AnalysisSettings {
    /// Settings that only enforce the load position rule
    pub fn unchecked() -> Self {
        AnalysisSettings {
            span_check: SpanCheck::Unchecked,
            ..AnalysisSettings::default()
        }
    }

    /// True when the hardened checks are enabled
    pub fn is_strict(&self) -> bool {
        self.span_check == SpanCheck::Strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AnalysisSettings::default();
        assert!(settings.is_strict());
        assert_eq!(settings.display_decimals, 2);
        assert_eq!(settings.diagram_samples, 101);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: AnalysisSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, AnalysisSettings::default());

        let settings: AnalysisSettings =
            serde_json::from_str(r#"{"display_decimals": 4}"#).unwrap();
        assert_eq!(settings.display_decimals, 4);
        assert!(settings.is_strict());
    }

    #[test]
    fn test_span_check_serialization() {
        let json = serde_json::to_string(&SpanCheck::Unchecked).unwrap();
        assert_eq!(json, "\"Unchecked\"");
        assert!(!AnalysisSettings::unchecked().is_strict());
    }
}
