use std::fmt::Write;

use beam_core::calculations::DiagramVertices;
use beam_core::units::{KiloNewtonMeters, KiloNewtons, Meters};
use beam_core::{BeamError, BeamSolution};

/// Render the console report for a solved case.
///
/// Inputs are echoed as given; forces and moments are rounded to `decimals`
/// for display only.
#[must_use]
pub fn render_report(solution: &BeamSolution, decimals: usize) -> String {
    let case = &solution.case;
    let eval_x = Meters(solution.eval_x_m);
    let mut output = String::new();

    writeln!(&mut output).expect("writing to string cannot fail");
    writeln!(&mut output, "Beam Analysis Results").expect("writing to string cannot fail");
    writeln!(&mut output, "Beam Length (L): {}", Meters(case.span_m))
        .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Load W1 = {} at a = {} from A",
        KiloNewtons(case.load1_kn),
        Meters(case.offset_m)
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "Load W2 = {} at a + x = {} from A",
        KiloNewtons(case.load2_kn),
        Meters(solution.load2_position_m)
    )
    .expect("writing to string cannot fail");
    writeln!(&mut output, "Evaluation point: x = {eval_x}\n")
        .expect("writing to string cannot fail");

    let ra = KiloNewtons(solution.reaction_a_kn);
    let rb = KiloNewtons(solution.reaction_b_kn);
    let sf = KiloNewtons(solution.shear_at_eval_kn);
    let bm = KiloNewtonMeters(solution.moment_at_eval_knm);
    let sf_max = KiloNewtons(solution.max_shear_kn);
    let bm_max = KiloNewtonMeters(solution.max_moment_knm);

    writeln!(&mut output, " Maximum Reaction at A (RA): {ra:.decimals$}")
        .expect("writing to string cannot fail");
    writeln!(&mut output, " Maximum Reaction at B (RB): {rb:.decimals$}")
        .expect("writing to string cannot fail");
    writeln!(&mut output, " Shear Force at x = {eval_x} (SF_01): {sf:.decimals$}")
        .expect("writing to string cannot fail");
    writeln!(&mut output, " Bending Moment at x = {eval_x} (BM_01): {bm:.decimals$}")
        .expect("writing to string cannot fail");
    writeln!(&mut output, " Maximum Shear Force (SF_max): {sf_max:.decimals$}")
        .expect("writing to string cannot fail");
    writeln!(&mut output, " Maximum Bending Moment (BM_max): {bm_max:.decimals$}")
        .expect("writing to string cannot fail");

    output
}

/// Render the shear and moment outlines as `x: value` tables.
#[must_use]
pub fn render_diagram(vertices: &DiagramVertices, decimals: usize) -> String {
    let mut output = String::new();

    writeln!(&mut output).expect("writing to string cannot fail");
    writeln!(&mut output, "Shear Force Diagram").expect("writing to string cannot fail");
    for &(x, v) in &vertices.shear {
        writeln!(
            &mut output,
            " x = {:.decimals$}: {:.decimals$}",
            Meters(x),
            KiloNewtons(v)
        )
        .expect("writing to string cannot fail");
    }

    writeln!(&mut output, "Bending Moment Diagram").expect("writing to string cannot fail");
    for &(x, m) in &vertices.moment {
        writeln!(
            &mut output,
            " x = {:.decimals$}: {:.decimals$}",
            Meters(x),
            KiloNewtonMeters(m)
        )
        .expect("writing to string cannot fail");
    }

    output
}

/// One-line message for a case that could not be solved.
#[must_use]
pub fn render_error(error: &BeamError) -> String {
    match error {
        BeamError::PositionOutOfRange { .. } => {
            " Error: Load positions exceed beam length.".to_string()
        }
        BeamError::InvalidNumericInput { .. } => {
            " Invalid input. Please enter numeric values.".to_string()
        }
        other => format!(" Error: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beam_core::calculations::ShearMomentDiagram;
    use beam_core::{solve, BeamCase};

    #[test]
    fn test_worked_example_report() {
        let solution = solve(&BeamCase::new(6.0, 4.0, 3.0, 2.0, 1.0)).unwrap();
        let expected = "
Beam Analysis Results
Beam Length (L): 6.0 m
Load W1 = 4.0 kN at a = 1.0 m from A
Load W2 = 3.0 kN at a + x = 3.0 m from A
Evaluation point: x = 3.0 m

 Maximum Reaction at A (RA): 4.83 kN
 Maximum Reaction at B (RB): 2.17 kN
 Shear Force at x = 3.0 m (SF_01): 0.83 kN
 Bending Moment at x = 3.0 m (BM_01): 6.50 kNm
 Maximum Shear Force (SF_max): 4.83 kN
 Maximum Bending Moment (BM_max): 6.50 kNm
";
        assert_eq!(render_report(&solution, 2), expected);
    }

    #[test]
    fn test_decimals_setting() {
        let solution = solve(&BeamCase::new(6.0, 4.0, 3.0, 2.0, 3.0).at(2.5)).unwrap();
        let report = render_report(&solution, 3);
        assert!(report.contains("Evaluation point: x = 2.5 m"));
        assert!(report.contains("(RA): 2.500 kN"));
        assert!(report.contains("(RB): 4.500 kN"));
        assert!(report.contains("(BM_01): 6.250 kNm"));
    }

    #[test]
    fn test_diagram_tables() {
        let solution = solve(&BeamCase::new(6.0, 4.0, 3.0, 2.0, 1.0)).unwrap();
        let text = render_diagram(&ShearMomentDiagram::vertices(&solution), 2);
        let lines: Vec<&str> = text.lines().collect();

        // Blank line, two headings, six shear and four moment vertices
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[1], "Shear Force Diagram");
        assert_eq!(lines[2], " x = 0.00 m: 4.83 kN");
        assert_eq!(lines[4], " x = 1.00 m: 0.83 kN");
        assert_eq!(lines[8], "Bending Moment Diagram");
        assert_eq!(lines[9], " x = 0.00 m: 0.00 kNm");
        assert_eq!(lines[11], " x = 3.00 m: 6.50 kNm");
    }

    #[test]
    fn test_error_lines() {
        let out_of_range = BeamError::PositionOutOfRange {
            position_m: 7.0,
            span_m: 6.0,
        };
        assert_eq!(
            render_error(&out_of_range),
            " Error: Load positions exceed beam length."
        );
        assert_eq!(
            render_error(&BeamError::InvalidSpan { span_m: 0.0 }),
            " Error: Invalid span: 0 m - span must be positive"
        );
    }
}
