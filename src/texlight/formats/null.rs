//! Pass-through formatter

use super::{FormatError, Formatter};
use crate::texlight::lexing::detokenize;
use crate::texlight::token::Token;

/// Writes the token values back out unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFormatter;

impl Formatter for NullFormatter {
    fn name(&self) -> &str {
        "null"
    }

    fn aliases(&self) -> &[&'static str] {
        &["text"]
    }

    fn description(&self) -> &str {
        "Token values, unformatted"
    }

    fn format(&self, tokens: &[Token]) -> Result<String, FormatError> {
        Ok(detokenize(tokens))
    }
}
