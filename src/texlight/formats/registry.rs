//! Formatter registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formatters.
//! Formatters can be registered and retrieved by name or alias.

use super::{
    FormatError, Formatter, LatexFormatter, LatexOptions, NullFormatter, TokensFormatter,
};
use crate::texlight::token::Token;
use std::collections::HashMap;

/// Registry of formatters
///
/// # Examples
///
/// ```ignore
/// let registry = FormatterRegistry::with_defaults();
/// let latex = registry.get("tex")?;
/// let output = latex.format(&tokens)?;
/// ```
pub struct FormatterRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatterRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name or alias
    pub fn get(&self, name: &str) -> Result<&dyn Formatter, FormatError> {
        let wanted = name.to_ascii_lowercase();
        if let Some(formatter) = self.formatters.get(&wanted) {
            return Ok(formatter.as_ref());
        }
        self.formatters
            .values()
            .find(|formatter| formatter.aliases().iter().any(|alias| *alias == wanted))
            .map(|formatter| formatter.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a formatter exists
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Format a token stream using the specified formatter
    pub fn format(&self, tokens: &[Token], name: &str) -> Result<String, FormatError> {
        self.get(name)?.format(tokens)
    }

    /// Create a registry with the built-in formatters, LaTeX configured by `options`
    pub fn with_latex_options(options: LatexOptions) -> Result<Self, FormatError> {
        let mut registry = Self::new();

        registry.register(LatexFormatter::new(options)?);
        registry.register(TokensFormatter);
        registry.register(NullFormatter);

        Ok(registry)
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(LatexFormatter::default());
        registry.register(TokensFormatter);
        registry.register(NullFormatter);

        registry
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
