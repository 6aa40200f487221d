//! Conversion pass tests against a temporary working directory

use std::fs;
use texlight::texlight::config::Loader;
use texlight::texlight::conversion::{convert, ConversionJob, ConvertError};
use texlight::texlight::formats::{LatexFormatter, TokensFormatter};
use texlight::texlight::lexing::RustLexer;

const SECANT: &str = "fn secant(x0: f64, x1: f64) -> f64 {\n    // $x_{n+1}$\n    x1 - x0\n}\n";

#[test]
fn converts_base_name_pair() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("secant_temp.rs"), SECANT).unwrap();

    let report = ConversionJob::default()
        .with_dir(dir.path())
        .run(&RustLexer::default(), &LatexFormatter::default())
        .unwrap();

    assert_eq!(report.input, dir.path().join("secant_temp.rs"));
    assert_eq!(report.output, dir.path().join("secant.tex"));

    let written = fs::read_to_string(&report.output).unwrap();
    assert!(written.starts_with(r"\begin{Verbatim}[commandchars=\\\{\},codes="));
    assert!(written.contains(r"\PY{n+nf}{secant}"));
    assert!(written.contains(r"\PY{c+c1}{// $x_{n+1}$}"));
    assert!(written.ends_with("\\end{Verbatim}\n"));
}

#[test]
fn rerun_overwrites_with_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("secant_temp.rs"), SECANT).unwrap();
    let job = ConversionJob::default().with_dir(dir.path());

    job.run(&RustLexer::default(), &LatexFormatter::default())
        .unwrap();
    let first = fs::read(job.output_path()).unwrap();
    job.run(&RustLexer::default(), &LatexFormatter::default())
        .unwrap();
    let second = fs::read(job.output_path()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_input_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let err = ConversionJob::default()
        .with_dir(dir.path())
        .run(&RustLexer::default(), &LatexFormatter::default())
        .unwrap_err();

    assert!(matches!(err, ConvertError::Read { .. }));
    assert!(err.to_string().contains("secant_temp.rs"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn other_formatters_write_their_own_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("secant_temp.rs"), "let x = 1;").unwrap();

    let report = ConversionJob::default()
        .with_dir(dir.path())
        .with_output(dir.path().join("tokens.json"))
        .run(&RustLexer::default(), &TokensFormatter)
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(report.output).unwrap()).unwrap();
    assert_eq!(json[0]["type"], "Keyword.Declaration");
    assert_eq!(json[0]["value"], "let");
    assert_eq!(json.as_array().unwrap().len(), report.tokens);
}

#[test]
fn convert_from_configuration() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("newton_temp.rs"), "let x = 1;").unwrap();

    let config = Loader::new()
        .set_override("conversion.dir", dir.path().to_string_lossy().to_string())
        .unwrap()
        .set_override("conversion.base", "newton")
        .unwrap()
        .set_override("latex.full", true)
        .unwrap()
        .build()
        .unwrap();

    let report = convert(&config).unwrap();
    assert_eq!(report.output, dir.path().join("newton.tex"));

    let written = fs::read_to_string(report.output).unwrap();
    assert!(written.starts_with("\\documentclass{article}"));
    assert!(written.contains(r"\PY{k+kd}{let}"));
}

#[test]
fn convert_picks_lexer_from_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    fs::write(&input, "let x = 1;").unwrap();

    let config = Loader::new()
        .set_override("conversion.input", input.to_string_lossy().to_string())
        .unwrap()
        .set_override("conversion.output", dir.path().join("notes.tex").to_string_lossy().to_string())
        .unwrap()
        .set_override("conversion.lexer", "auto")
        .unwrap()
        .build()
        .unwrap();

    convert(&config).unwrap();
    let written = fs::read_to_string(dir.path().join("notes.tex")).unwrap();
    assert!(written.contains("]\nlet x = 1;\n\\end{Verbatim}"));
}

#[test]
fn unknown_lexer_is_reported() {
    let config = Loader::new()
        .set_override("conversion.lexer", "cobol")
        .unwrap()
        .build()
        .unwrap();

    let err = convert(&config).unwrap_err();
    assert!(matches!(err, ConvertError::Lexer(_)));
    assert_eq!(err.to_string(), "Lexer 'cobol' not found");
}
