use std::io::{BufRead, Write};

use beam_core::{BeamCase, BeamError, BeamResult};

/// Prompts in the order the values are asked for: field name and text.
const PROMPTS: [(&str, &str); 5] = [
    ("L", "Enter beam length L (m): "),
    ("W1", "Enter load W1 (kN): "),
    ("W2", "Enter load W2 (kN): "),
    ("x", "Enter distance between W1 and W2 (x) (m): "),
    ("a", "Enter distance from A to W1 (a) (m): "),
];

const EVAL_PROMPT: (&str, &str) = ("eval_x", "Enter point x to evaluate SF and BM (m): ");

/// Parse one answer as a number.
pub fn parse_number(field: &str, text: &str) -> BeamResult<f64> {
    text.trim()
        .parse()
        .map_err(|_| BeamError::invalid_numeric_input(field, text.trim()))
}

/// Parse an answer that may be left blank.
pub fn parse_optional(field: &str, text: &str) -> BeamResult<Option<f64>> {
    if text.trim().is_empty() {
        Ok(None)
    } else {
        parse_number(field, text).map(Some)
    }
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> BeamResult<String> {
    write!(output, "{prompt}")
        .and_then(|_| output.flush())
        .map_err(|e| BeamError::file_error("write", "<stdout>", e.to_string()))?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| BeamError::file_error("read", "<stdin>", e.to_string()))?;
    Ok(line)
}

/// Ask for the six values of a beam case.
///
/// Stops at the first answer that is not a number. A blank evaluation point
/// selects midspan.
pub fn read_case<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> BeamResult<BeamCase> {
    let mut values = [0.0; 5];
    for (value, (field, prompt)) in values.iter_mut().zip(PROMPTS) {
        let answer = ask(input, output, prompt)?;
        *value = parse_number(field, &answer)?;
    }
    let [span, w1, w2, spacing, offset] = values;

    let (field, prompt) = EVAL_PROMPT;
    let answer = ask(input, output, prompt)?;
    let eval_x = parse_optional(field, &answer)?;

    Ok(BeamCase {
        eval_x_m: eval_x,
        ..BeamCase::new(span, w1, w2, spacing, offset)
    })
}
