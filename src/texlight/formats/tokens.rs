//! JSON token dump

use super::{FormatError, Formatter};
use crate::texlight::token::Token;

/// Serializes the token stream as a pretty-printed JSON array
#[derive(Debug, Clone, Copy, Default)]
pub struct TokensFormatter;

impl Formatter for TokensFormatter {
    fn name(&self) -> &str {
        "tokens"
    }

    fn aliases(&self) -> &[&'static str] {
        &["json"]
    }

    fn description(&self) -> &str {
        "JSON array of {type, value} tokens"
    }

    fn format(&self, tokens: &[Token]) -> Result<String, FormatError> {
        let mut json = serde_json::to_string_pretty(tokens)
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        json.push('\n');
        Ok(json)
    }
}
