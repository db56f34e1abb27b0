//! # Beam CLI
//!
//! Console driver for the two point load beam solver.
//!
//! ```text
//! beam_cli                     prompt for one case
//! beam_cli --save cases.json   prompt, then append the case to a case file
//! beam_cli --case cases.json   solve every case in a case file
//! beam_cli --diagram           also print shear and moment outlines
//! beam_cli --json              also print each solution as JSON
//! ```
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` to see each solve.

mod prompt;
mod report;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use beam_core::calculations::{DiagramVertices, ShearMomentDiagram};
use beam_core::{
    append_case, load_case_file, solve, AnalysisSettings, BeamError, BeamResult, BeamSolution,
};
use log::{info, warn};
use serde::Serialize;

use report::{render_diagram, render_error, render_report};

const USAGE: &str = "usage: beam_cli [--case <file.json> | --save <file.json>] [--diagram] [--json]";

/// Command line options
#[derive(Debug, Default, PartialEq)]
struct CliOptions {
    /// Case file to solve instead of prompting
    case_path: Option<PathBuf>,
    /// Case file to append a prompted case to
    save_path: Option<PathBuf>,
    /// Print diagram outlines after each report
    diagram: bool,
    /// Print JSON after each report
    json: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--diagram" => options.diagram = true,
            "--case" => {
                let path = args
                    .next()
                    .ok_or_else(|| "--case needs a file path".to_string())?;
                options.case_path = Some(PathBuf::from(path));
            }
            "--save" => {
                let path = args
                    .next()
                    .ok_or_else(|| "--save needs a file path".to_string())?;
                options.save_path = Some(PathBuf::from(path));
            }
            other => return Err(format!("unknown argument '{other}'")),
        }
    }
    if options.case_path.is_some() && options.save_path.is_some() {
        return Err("--save only applies to a prompted case, not --case".to_string());
    }
    Ok(options)
}

/// JSON form of a solved case, with diagrams when asked for
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    solution: &'a BeamSolution,
    #[serde(skip_serializing_if = "Option::is_none")]
    diagram: Option<ShearMomentDiagram>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vertices: Option<DiagramVertices>,
}

impl<'a> JsonReport<'a> {
    fn new(solution: &'a BeamSolution, settings: &AnalysisSettings, diagram: bool) -> Self {
        if !diagram {
            return JsonReport {
                solution,
                diagram: None,
                vertices: None,
            };
        }
        JsonReport {
            solution,
            diagram: Some(ShearMomentDiagram::from_solution(
                solution,
                settings.diagram_samples,
            )),
            vertices: Some(ShearMomentDiagram::vertices(solution)),
        }
    }
}

/// Pretty JSON text, or a `SerializationError` that has already been logged
fn json_text<T: Serialize + ?Sized>(value: &T) -> BeamResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        warn!("could not serialize JSON output: {e}");
        BeamError::SerializationError {
            reason: e.to_string(),
        }
    })
}

fn print_solution(solution: &BeamSolution, settings: &AnalysisSettings, options: &CliOptions) {
    print!("{}", render_report(solution, settings.display_decimals));
    if options.diagram {
        let vertices = ShearMomentDiagram::vertices(solution);
        print!("{}", render_diagram(&vertices, settings.display_decimals));
    }
    if options.json {
        match json_text(&JsonReport::new(solution, settings, options.diagram)) {
            Ok(text) => {
                println!();
                println!("JSON Output:");
                println!("{text}");
            }
            Err(e) => print_error(&e, false),
        }
    }
}

fn print_error(error: &BeamError, json: bool) {
    eprintln!("{}", render_error(error));
    if json {
        if let Ok(text) = json_text(error) {
            eprintln!();
            eprintln!("Error JSON:");
            eprintln!("{text}");
        }
    }
}

/// Prompt for one case and report it. Returns whether it solved.
fn run_interactive(options: &CliOptions) -> BeamResult<bool> {
    println!("=== Simply Supported Beam Analysis ===");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let case = prompt::read_case(&mut input, &mut output)?;

    let settings = AnalysisSettings::default();
    let solution = match solve(&case) {
        Ok(solution) => solution,
        Err(e) => {
            print_error(&e, options.json);
            return Ok(false);
        }
    };
    print_solution(&solution, &settings, options);

    if let Some(path) = &options.save_path {
        let file = append_case(path, case)?;
        println!();
        println!("Saved to {} ({} case(s))", path.display(), file.cases.len());
    }
    Ok(true)
}

/// Solve every case in a file. Returns whether all of them solved.
fn run_case_file(path: &Path, options: &CliOptions) -> BeamResult<bool> {
    let file = load_case_file(path)?;
    info!("solving {} case(s) from {}", file.cases.len(), path.display());

    let mut all_solved = true;
    for (index, (case, result)) in file.cases.iter().zip(file.solve_all()).enumerate() {
        if index > 0 {
            println!();
        }
        let label = if case.label.is_empty() {
            format!("#{}", index + 1)
        } else {
            case.label.clone()
        };
        println!("=== Case {label} ===");

        match result {
            Ok(solution) => print_solution(&solution, &file.settings, options),
            Err(e) => {
                print_error(&e, options.json);
                all_solved = false;
            }
        }
    }
    Ok(all_solved)
}

fn main() -> ExitCode {
    env_logger::init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let outcome = match &options.case_path {
        Some(path) => run_case_file(path, &options),
        None => run_interactive(&options),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            print_error(&e, options.json);
            ExitCode::FAILURE
        }
    }
}
