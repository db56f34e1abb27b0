//! Simply-Supported Beam Under Two Point Loads
//!
//! Closed-form statics for a span `L` on a pin at A and a roller at B, loaded
//! by `W1` at `a` from A and `W2` a further `x` along the beam.
//!
//! ## Solution Steps
//! 1. Moments about A: `RB = (W1*a + W2*(a + x)) / L`
//! 2. Vertical equilibrium: `RA = W1 + W2 - RB`
//! 3. Shear and moment at the section from the free body left of the cut
//! 4. Maxima from the support reactions and the two load points
//!
//! ## Sign Convention
//! - Loads act downward, reactions upward, both positive
//! - Positive shear: left side up
//! - Positive moment: sagging
//!
//! ## Section Boundary
//! A load contributes to the free body only when it lies strictly left of the
//! section. Evaluating exactly at a load position returns the value just
//! before the load is applied.
//!
//! ## Example
//! ```rust
//! use beam_core::calculations::two_point_load::analyze_beam;
//!
//! // L = 6 m, W1 = 4 kN at 1 m, W2 = 3 kN at 3 m
//! let solution = analyze_beam(6.0, 4.0, 3.0, 2.0, 1.0, None).unwrap();
//! assert!((solution.reaction_b_kn - 13.0 / 6.0).abs() < 1e-12);
//! assert!((solution.reaction_a_kn - 29.0 / 6.0).abs() < 1e-12);
//! assert_eq!(solution.eval_x_m, 3.0);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};
use crate::settings::AnalysisSettings;

/// Input parameters for one beam case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamCase {
    /// User label for this case
    #[serde(default)]
    pub label: String,

    /// Span between supports (m)
    pub span_m: f64,

    /// First point load W1 (kN, downward)
    pub load1_kn: f64,

    /// Second point load W2 (kN, downward)
    pub load2_kn: f64,

    /// Distance between W1 and W2 (m)
    pub spacing_m: f64,

    /// Distance from support A to W1 (m)
    pub offset_m: f64,

    /// Section to evaluate shear and moment at (m from A). Midspan when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eval_x_m: Option<f64>,
}

impl BeamCase {
    /// Create an unlabelled case evaluated at midspan
    pub fn new(span_m: f64, load1_kn: f64, load2_kn: f64, spacing_m: f64, offset_m: f64) -> Self {
        BeamCase {
            label: String::new(),
            span_m,
            load1_kn,
            load2_kn,
            spacing_m,
            offset_m,
            eval_x_m: None,
        }
    }

    /// Set the evaluation section and return self (builder pattern)
    pub fn at(mut self, eval_x_m: f64) -> Self {
        self.eval_x_m = Some(eval_x_m);
        self
    }

    /// Set the label and return self (builder pattern)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Position of W1 from support A (z1)
    pub fn load1_position_m(&self) -> f64 {
        self.offset_m
    }

    /// Position of W2 from support A (z2)
    pub fn load2_position_m(&self) -> f64 {
        self.offset_m + self.spacing_m
    }

    /// Section used for evaluation, resolving the midspan default
    pub fn resolved_eval_x_m(&self) -> f64 {
        self.eval_x_m.unwrap_or(self.span_m / 2.0)
    }

    fn validate(&self, settings: &AnalysisSettings) -> BeamResult<()> {
        if settings.is_strict() {
            let fields = [
                ("span_m", self.span_m),
                ("load1_kn", self.load1_kn),
                ("load2_kn", self.load2_kn),
                ("spacing_m", self.spacing_m),
                ("offset_m", self.offset_m),
            ];
            for (field, value) in fields.into_iter().chain(self.eval_x_m.map(|x| ("eval_x_m", x))) {
                if !value.is_finite() {
                    return Err(BeamError::invalid_input(
                        field,
                        value.to_string(),
                        "Value must be a finite number",
                    ));
                }
            }
        }

        // Only the second load is checked against the span.
        let z2 = self.load2_position_m();
        if z2 > self.span_m {
            return Err(BeamError::PositionOutOfRange {
                position_m: z2,
                span_m: self.span_m,
            });
        }

        if settings.is_strict() {
            if self.span_m <= 0.0 {
                return Err(BeamError::InvalidSpan {
                    span_m: self.span_m,
                });
            }
            if let Some(x) = self.eval_x_m {
                if !(0.0..=self.span_m).contains(&x) {
                    return Err(BeamError::invalid_input(
                        "eval_x_m",
                        x.to_string(),
                        format!("Section must lie on the beam (0 to {} m)", self.span_m),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Results for one beam case. Values are unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamSolution {
    /// The case as supplied
    pub case: BeamCase,

    /// Section shear and moment were evaluated at (m from A)
    pub eval_x_m: f64,
    /// Position of W1 from A (m)
    pub load1_position_m: f64,
    /// Position of W2 from A (m)
    pub load2_position_m: f64,

    /// Reaction at support A (kN, upward)
    pub reaction_a_kn: f64,
    /// Reaction at support B (kN, upward)
    pub reaction_b_kn: f64,

    /// Shear at the evaluation section (kN)
    pub shear_at_eval_kn: f64,
    /// Bending moment at the evaluation section (kNm)
    pub moment_at_eval_knm: f64,

    /// Largest shear magnitude (kN)
    pub max_shear_kn: f64,
    /// Largest bending moment magnitude among the load points and the section (kNm)
    pub max_moment_knm: f64,
}

impl BeamSolution {
    /// Sum of the applied loads (kN)
    pub fn total_load_kn(&self) -> f64 {
        self.case.load1_kn + self.case.load2_kn
    }

    /// Shear at section `x_m`, same free-body rule as the evaluation section
    pub fn shear_at(&self, x_m: f64) -> f64 {
        let mut shear = self.reaction_a_kn;
        if self.load1_position_m < x_m {
            shear -= self.case.load1_kn;
        }
        if self.load2_position_m < x_m {
            shear -= self.case.load2_kn;
        }
        shear
    }

    /// Bending moment at section `x_m` (kNm)
    pub fn moment_at(&self, x_m: f64) -> f64 {
        let mut moment = self.reaction_a_kn * x_m;
        if self.load1_position_m < x_m {
            moment -= self.case.load1_kn * (x_m - self.load1_position_m);
        }
        if self.load2_position_m < x_m {
            moment -= self.case.load2_kn * (x_m - self.load2_position_m);
        }
        moment
    }
}

/// Solve a case with default (strict) settings.
pub fn solve(case: &BeamCase) -> BeamResult<BeamSolution> {
    solve_with(case, &AnalysisSettings::default())
}

/// Solve a case.
///
/// # Errors
///
/// * `BeamError::PositionOutOfRange` - the second load lies beyond support B
/// * `BeamError::InvalidSpan` - strict mode, span is zero or negative
/// * `BeamError::InvalidInput` - strict mode, a non-finite value or a section off the beam
pub fn solve_with(case: &BeamCase, settings: &AnalysisSettings) -> BeamResult<BeamSolution> {
    if let Err(e) = case.validate(settings) {
        warn!("rejected beam case '{}': {}", case.label, e);
        return Err(e);
    }

    let span = case.span_m;
    let w1 = case.load1_kn;
    let w2 = case.load2_kn;
    let z1 = case.load1_position_m();
    let z2 = case.load2_position_m();

    // Moments about A, then vertical equilibrium
    let rb = (w1 * z1 + w2 * z2) / span;
    let ra = w1 + w2 - rb;

    let eval_x = case.resolved_eval_x_m();

    let mut solution = BeamSolution {
        case: case.clone(),
        eval_x_m: eval_x,
        load1_position_m: z1,
        load2_position_m: z2,
        reaction_a_kn: ra,
        reaction_b_kn: rb,
        shear_at_eval_kn: 0.0,
        moment_at_eval_knm: 0.0,
        max_shear_kn: ra.abs().max(rb.abs()),
        max_moment_knm: 0.0,
    };

    solution.shear_at_eval_kn = solution.shear_at(eval_x);
    solution.moment_at_eval_knm = solution.moment_at(eval_x);

    // Moment peaks sit under a load; the section value is kept as a third candidate.
    let moment_at_load1 = ra * z1;
    let moment_at_load2 = ra * z2 - w1 * (z2 - z1);
    solution.max_moment_knm = moment_at_load1
        .abs()
        .max(moment_at_load2.abs())
        .max(solution.moment_at_eval_knm.abs());

    debug!(
        "solved beam case '{}': RA={} RB={} SF({})={} BM({})={}",
        case.label,
        ra,
        rb,
        eval_x,
        solution.shear_at_eval_kn,
        eval_x,
        solution.moment_at_eval_knm
    );

    Ok(solution)
}

/// Positional form of [`solve`]: span, loads, spacing, offset and optional section.
///
/// ```rust
/// use beam_core::calculations::two_point_load::analyze_beam;
/// use beam_core::errors::BeamError;
///
/// let err = analyze_beam(6.0, 4.0, 3.0, 4.0, 3.0, None).unwrap_err();
/// assert!(matches!(err, BeamError::PositionOutOfRange { .. }));
/// ```
pub fn analyze_beam(
    span_m: f64,
    load1_kn: f64,
    load2_kn: f64,
    spacing_m: f64,
    offset_m: f64,
    eval_x_m: Option<f64>,
) -> BeamResult<BeamSolution> {
    let case = BeamCase {
        eval_x_m,
        ..BeamCase::new(span_m, load1_kn, load2_kn, spacing_m, offset_m)
    };
    solve(&case)
}
