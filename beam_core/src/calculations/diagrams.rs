//! Shear Force and Bending Moment Diagrams
//!
//! Samples a solved case along its span for plotting. Sample positions are an
//! even grid plus each load position and a point just past it, so the shear
//! step at a load shows up as a near-vertical segment.
//!
//! ## Example
//! ```rust
//! use beam_core::calculations::diagrams::ShearMomentDiagram;
//! use beam_core::calculations::two_point_load::{solve, BeamCase};
//!
//! let solution = solve(&BeamCase::new(6.0, 4.0, 3.0, 2.0, 3.0)).unwrap();
//! let diagram = ShearMomentDiagram::from_solution(&solution, 61);
//!
//! assert!((diagram.max_abs_shear() - 4.5).abs() < 1e-9);
//! assert!((diagram.max_abs_moment() - 7.5).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use super::two_point_load::BeamSolution;

/// Fewest evenly spaced samples a diagram will use
pub const MIN_SAMPLES: usize = 11;

/// Offset past a load, as a fraction of the span
const STEP_OFFSET: f64 = 0.001;

/// Sampled diagrams as `(position_m, value)` pairs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShearMomentDiagram {
    /// Shear force along the beam (kN)
    pub shear: Vec<(f64, f64)>,
    /// Bending moment along the beam (kNm)
    pub moment: Vec<(f64, f64)>,
}

/// Exact piecewise-linear outline of both diagrams.
///
/// Shear has two points at each load (before and after the step); moment has
/// one point at each support and each load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramVertices {
    /// Shear vertices (kN)
    pub shear: Vec<(f64, f64)>,
    /// Moment vertices (kNm)
    pub moment: Vec<(f64, f64)>,
}

impl ShearMomentDiagram {
    /// Sample both diagrams for a solved case
    pub fn from_solution(solution: &BeamSolution, samples: usize) -> Self {
        let positions = sample_positions(solution, samples);

        let shear = positions
            .iter()
            .map(|&x| (x, solution.shear_at(x)))
            .collect();
        let moment = positions
            .iter()
            .map(|&x| (x, solution.moment_at(x)))
            .collect();

        ShearMomentDiagram { shear, moment }
    }

    /// Largest sampled shear magnitude (kN)
    pub fn max_abs_shear(&self) -> f64 {
        self.shear.iter().map(|(_, v)| v.abs()).fold(0.0, f64::max)
    }

    /// Largest sampled moment magnitude (kNm)
    pub fn max_abs_moment(&self) -> f64 {
        self.moment.iter().map(|(_, m)| m.abs()).fold(0.0, f64::max)
    }

    /// Outline of the diagrams through supports and load points
    pub fn vertices(solution: &BeamSolution) -> DiagramVertices {
        let span = solution.case.span_m;
        let z1 = solution.load1_position_m;
        let z2 = solution.load2_position_m;
        let w1 = solution.case.load1_kn;
        let w2 = solution.case.load2_kn;
        let ra = solution.reaction_a_kn;

        // Loads may be given in either order along the beam
        let (first, second) = if z1 <= z2 { ((z1, w1), (z2, w2)) } else { ((z2, w2), (z1, w1)) };

        let v0 = ra;
        let v1 = v0 - first.1;
        let v2 = v1 - second.1;

        let shear = vec![
            (0.0, v0),
            (first.0, v0),
            (first.0, v1),
            (second.0, v1),
            (second.0, v2),
            (span, v2),
        ];

        let m1 = v0 * first.0;
        let m2 = m1 + v1 * (second.0 - first.0);
        let m_end = m2 + v2 * (span - second.0);

        let moment = vec![(0.0, 0.0), (first.0, m1), (second.0, m2), (span, m_end)];

        DiagramVertices { shear, moment }
    }
}

/// Sample positions including the critical points at each load
fn sample_positions(solution: &BeamSolution, samples: usize) -> Vec<f64> {
    let span = solution.case.span_m;
    let samples = samples.max(MIN_SAMPLES);

    let mut positions: Vec<f64> = (0..samples)
        .map(|i| span * i as f64 / (samples - 1) as f64)
        .collect();

    let epsilon = span * STEP_OFFSET;
    for pos in [solution.load1_position_m, solution.load2_position_m] {
        // Loads within one offset of a support are already covered by the grid end points
        if pos > epsilon && pos < span - epsilon {
            positions.push(pos);
            positions.push(pos + epsilon);
        }
    }

    positions.sort_by(f64::total_cmp);
    positions.dedup_by(|a, b| (*a - *b).abs() < epsilon / 2.0);

    positions
}
