//! Lexing
//!
//! A lexer turns source text into a flat, lossless stream of [`Token`]s: concatenating the
//! token values gives back the (preprocessed) input. Lexers never fail; text they cannot
//! classify comes out as [`TokenType::Error`](crate::texlight::token::TokenType::Error).
//!
//! Every lexer runs the same preprocessing before classification (see [`preprocess`]):
//! byte order mark removal, newline normalization, optional newline stripping and tab
//! expansion, and a guaranteed trailing newline.

pub mod registry;
pub mod rust;
pub mod text;

pub use registry::LexerRegistry;
pub use rust::RustLexer;
pub use text::TextLexer;

use crate::texlight::token::Token;
use serde::Deserialize;
use std::fmt;

/// Options shared by all lexers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LexerOptions {
    /// Strip leading and trailing newlines from the input
    pub strip_newlines: bool,
    /// Make sure the input ends with a newline
    pub ensure_newline: bool,
    /// Expand tabs to this many columns; 0 leaves tabs alone
    pub tab_size: usize,
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions {
            strip_newlines: true,
            ensure_newline: true,
            tab_size: 0,
        }
    }
}

/// Errors raised when looking up lexers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// No lexer registered under this name or alias
    LexerNotFound(String),
    /// No lexer claims this file name
    NoLexerForFile(String),
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexerError::LexerNotFound(name) => write!(f, "Lexer '{}' not found", name),
            LexerError::NoLexerForFile(file) => write!(f, "No lexer found for file '{}'", file),
        }
    }
}

impl std::error::Error for LexerError {}

/// Trait for lexer implementations
pub trait Lexer: Send + Sync {
    /// The name of this lexer (e.g., "rust")
    fn name(&self) -> &str;

    /// Alternative names the lexer can be looked up by
    fn aliases(&self) -> &[&'static str] {
        &[]
    }

    /// File name patterns (`*.rs`) this lexer handles
    fn filenames(&self) -> &[&'static str] {
        &[]
    }

    fn options(&self) -> &LexerOptions;

    /// Classify already preprocessed text
    fn get_tokens_unprocessed(&self, text: &str) -> Vec<Token>;

    /// Preprocess and classify source text
    fn get_tokens(&self, text: &str) -> Vec<Token> {
        let text = preprocess(text, self.options());
        self.get_tokens_unprocessed(&text)
    }
}

/// Normalize source text before lexing
pub fn preprocess(text: &str, options: &LexerOptions) -> String {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut text = text.replace("\r\n", "\n").replace('\r', "\n");

    if options.strip_newlines {
        text = text.trim_matches('\n').to_string();
    }
    if options.tab_size > 0 {
        text = expand_tabs(&text, options.tab_size);
    }
    if options.ensure_newline && !text.ends_with('\n') {
        text.push('\n');
    }

    text
}

/// Replace tabs with spaces up to the next multiple of `tab_size` columns
fn expand_tabs(text: &str, tab_size: usize) -> String {
    let mut result = String::with_capacity(text.len());
    let mut column = 0;

    for ch in text.chars() {
        match ch {
            '\t' => {
                let width = tab_size - column % tab_size;
                result.extend(std::iter::repeat(' ').take(width));
                column += width;
            }
            '\n' => {
                result.push(ch);
                column = 0;
            }
            _ => {
                result.push(ch);
                column += 1;
            }
        }
    }

    result
}

/// Concatenate token values back into text
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(|token| token.value.as_str()).collect()
}
