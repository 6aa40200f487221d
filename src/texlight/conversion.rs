//! The conversion pass
//!
//! Reads one source file, highlights it and writes the result next to it. With the defaults
//! this reads `./secant_temp.rs` and writes `./secant.tex`.
//!
//! The pass is all-or-nothing: the input is read and rendered completely before the output
//! file is opened, so a missing or undecodable input never creates or truncates the output.

use crate::texlight::config::{ConversionConfig, TexlightConfig};
use crate::texlight::formats::{FormatError, Formatter, FormatterRegistry};
use crate::texlight::lexing::{Lexer, LexerError, LexerRegistry};
use config::ConfigError;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Lexer name that selects the lexer from the input file name
pub const AUTO_LEXER: &str = "auto";

/// Errors raised by a conversion
#[derive(Debug)]
pub enum ConvertError {
    /// The input could not be read
    Read { path: PathBuf, source: io::Error },
    /// The input is not valid UTF-8
    Encoding { path: PathBuf },
    /// The output could not be written
    Write { path: PathBuf, source: io::Error },
    Lexer(LexerError),
    Format(FormatError),
    Config(ConfigError),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Read { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            ConvertError::Encoding { path } => {
                write!(f, "{} is not valid UTF-8", path.display())
            }
            ConvertError::Write { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
            ConvertError::Lexer(err) => write!(f, "{}", err),
            ConvertError::Format(err) => write!(f, "{}", err),
            ConvertError::Config(err) => write!(f, "Configuration error: {}", err),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Read { source, .. } | ConvertError::Write { source, .. } => Some(source),
            ConvertError::Encoding { .. } => None,
            ConvertError::Lexer(err) => Some(err),
            ConvertError::Format(err) => Some(err),
            ConvertError::Config(err) => Some(err),
        }
    }
}

impl From<LexerError> for ConvertError {
    fn from(err: LexerError) -> Self {
        ConvertError::Lexer(err)
    }
}

impl From<FormatError> for ConvertError {
    fn from(err: FormatError) -> Self {
        ConvertError::Format(err)
    }
}

impl From<ConfigError> for ConvertError {
    fn from(err: ConfigError) -> Self {
        ConvertError::Config(err)
    }
}

/// What a finished conversion did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub tokens: usize,
    pub bytes_written: usize,
}

/// One input file to one output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    dir: PathBuf,
    base: String,
    input_suffix: String,
    source_extension: String,
    output_extension: String,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl ConversionJob {
    /// A job for `<base>_temp.rs` to `<base>.tex` in the working directory
    pub fn new(base: impl Into<String>) -> Self {
        ConversionJob {
            dir: PathBuf::from("."),
            base: base.into(),
            input_suffix: "_temp".to_string(),
            source_extension: "rs".to_string(),
            output_extension: "tex".to_string(),
            input: None,
            output: None,
        }
    }

    pub fn from_config(config: &ConversionConfig) -> Self {
        ConversionJob {
            dir: config.dir.clone(),
            base: config.base.clone(),
            input_suffix: config.input_suffix.clone(),
            source_extension: config.source_extension.clone(),
            output_extension: config.output_extension.clone(),
            input: config.input.clone(),
            output: config.output.clone(),
        }
    }

    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    pub fn with_input_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.input_suffix = suffix.into();
        self
    }

    pub fn with_source_extension(mut self, extension: impl Into<String>) -> Self {
        self.source_extension = extension.into();
        self
    }

    pub fn with_output_extension(mut self, extension: impl Into<String>) -> Self {
        self.output_extension = extension.into();
        self
    }

    /// Read from `path` instead of the path built from the base name
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    /// Write to `path` instead of the path built from the base name
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn input_path(&self) -> PathBuf {
        match &self.input {
            Some(path) => path.clone(),
            None => self.dir.join(format!(
                "{}{}.{}",
                self.base, self.input_suffix, self.source_extension
            )),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => self
                .dir
                .join(format!("{}.{}", self.base, self.output_extension)),
        }
    }

    /// Read, highlight and write
    pub fn run(
        &self,
        lexer: &dyn Lexer,
        formatter: &dyn Formatter,
    ) -> Result<ConversionReport, ConvertError> {
        let input = self.input_path();
        let output = self.output_path();
        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            lexer = lexer.name(),
            format = formatter.name(),
            "converting"
        );

        let source = read_source(&input)?;
        let tokens = lexer.get_tokens(&source);
        let rendered = formatter.format(&tokens)?;

        fs::write(&output, rendered.as_bytes()).map_err(|source| ConvertError::Write {
            path: output.clone(),
            source,
        })?;

        let report = ConversionReport {
            input,
            output,
            tokens: tokens.len(),
            bytes_written: rendered.len(),
        };
        tracing::info!(
            tokens = report.tokens,
            bytes = report.bytes_written,
            "wrote {}",
            report.output.display()
        );
        Ok(report)
    }
}

impl Default for ConversionJob {
    fn default() -> Self {
        Self::new("secant")
    }
}

fn read_source(path: &Path) -> Result<String, ConvertError> {
    let bytes = fs::read(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| ConvertError::Encoding {
        path: path.to_path_buf(),
    })
}

/// Run the conversion a full configuration describes
pub fn convert(config: &TexlightConfig) -> Result<ConversionReport, ConvertError> {
    let job = ConversionJob::from_config(&config.conversion);
    let lexers = LexerRegistry::with_options(config.lexer.clone());
    let formatters = FormatterRegistry::with_latex_options(config.latex.clone())?;

    let lexer = if config.conversion.lexer.eq_ignore_ascii_case(AUTO_LEXER) {
        lexers.for_filename(&job.input_path())?
    } else {
        lexers.get(&config.conversion.lexer)?
    };
    let formatter = formatters.get(&config.conversion.format)?;

    job.run(lexer, formatter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texlight::formats::LatexFormatter;
    use crate::texlight::lexing::RustLexer;

    #[test]
    fn test_default_paths() {
        let job = ConversionJob::default();
        assert_eq!(job.input_path(), Path::new("./secant_temp.rs"));
        assert_eq!(job.output_path(), Path::new("./secant.tex"));
    }

    #[test]
    fn test_builder_paths() {
        let job = ConversionJob::new("newton")
            .with_dir("work")
            .with_input_suffix("")
            .with_source_extension("txt")
            .with_output_extension("ltx");
        assert_eq!(job.input_path(), Path::new("work/newton.txt"));
        assert_eq!(job.output_path(), Path::new("work/newton.ltx"));

        let job = job.with_input("a.rs").with_output("b.tex");
        assert_eq!(job.input_path(), Path::new("a.rs"));
        assert_eq!(job.output_path(), Path::new("b.tex"));
    }

    #[test]
    fn test_run_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("secant_temp.rs"), "let x = 1;\n").unwrap();

        let job = ConversionJob::default().with_dir(dir.path());
        let report = job
            .run(&RustLexer::default(), &LatexFormatter::default())
            .unwrap();

        let written = fs::read_to_string(dir.path().join("secant.tex")).unwrap();
        assert_eq!(report.bytes_written, written.len());
        assert_eq!(report.tokens, 9);
        assert!(written.contains(r"\PY{k+kd}{let}"));
    }

    #[test]
    fn test_missing_input_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let job = ConversionJob::default().with_dir(dir.path());

        let err = job
            .run(&RustLexer::default(), &LatexFormatter::default())
            .unwrap_err();
        assert!(matches!(err, ConvertError::Read { .. }));
        assert!(!dir.path().join("secant.tex").exists());
    }

    #[test]
    fn test_invalid_utf8_keeps_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("secant_temp.rs"), [0x66, 0x6e, 0xff, 0xfe]).unwrap();
        fs::write(dir.path().join("secant.tex"), "previous").unwrap();

        let err = ConversionJob::default()
            .with_dir(dir.path())
            .run(&RustLexer::default(), &LatexFormatter::default())
            .unwrap_err();
        assert!(matches!(err, ConvertError::Encoding { .. }));
        assert_eq!(
            fs::read_to_string(dir.path().join("secant.tex")).unwrap(),
            "previous"
        );
    }

    #[test]
    fn test_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("secant_temp.rs"), "fn main() {}\n").unwrap();

        let err = ConversionJob::default()
            .with_dir(dir.path())
            .with_output(dir.path().join("missing").join("secant.tex"))
            .run(&RustLexer::default(), &LatexFormatter::default())
            .unwrap_err();
        assert!(matches!(err, ConvertError::Write { .. }));
        assert!(err.to_string().starts_with("Failed to write"));
    }
}
