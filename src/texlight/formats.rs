//! Output formats
//!
//! A formatter renders a token stream into some target markup. The main target is LaTeX
//! (`fancyvrb`'s `Verbatim` environment with one macro call per token); a JSON token dump and
//! a pass-through formatter exist mainly for inspecting what the lexer produced.
//!
//! Formatters are selected through the [`FormatterRegistry`].

pub mod latex;
pub mod null;
pub mod registry;
pub mod tokens;

pub use latex::{LatexFormatter, LatexOptions};
pub use null::NullFormatter;
pub use registry::FormatterRegistry;
pub use tokens::TokensFormatter;

use crate::texlight::token::Token;
use std::fmt;

/// Errors raised while selecting, configuring or running a formatter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// No formatter registered under this name or alias
    FormatNotFound(String),
    /// Unknown colour style
    StyleNotFound(String),
    /// A formatter option has an unusable value
    InvalidOption(String),
    /// Rendering the output failed
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{}' not found", name),
            FormatError::StyleNotFound(name) => write!(f, "Style '{}' not found", name),
            FormatError::InvalidOption(msg) => write!(f, "Invalid option: {}", msg),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

/// Trait for token stream formatters
///
/// # Examples
///
/// ```ignore
/// struct Upper;
///
/// impl Formatter for Upper {
///     fn name(&self) -> &str {
///         "upper"
///     }
///
///     fn format(&self, tokens: &[Token]) -> Result<String, FormatError> {
///         Ok(tokens.iter().map(|t| t.value.to_uppercase()).collect())
///     }
/// }
/// ```
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "latex", "tokens")
    fn name(&self) -> &str;

    /// Alternative names the format can be looked up by
    fn aliases(&self) -> &[&'static str] {
        &[]
    }

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Render a token stream
    fn format(&self, tokens: &[Token]) -> Result<String, FormatError>;
}
