//! Lexer registry for lexer discovery and selection
//!
//! Lexers are registered once and can then be retrieved by name, by alias or by the file
//! name of the source they should handle.

use super::{Lexer, LexerError, LexerOptions, RustLexer, TextLexer};
use std::path::Path;

/// Registry of lexers
///
/// # Examples
///
/// ```ignore
/// let registry = LexerRegistry::with_defaults();
/// let lexer = registry.get("rs")?;
/// let tokens = lexer.get_tokens("let x = 1;");
/// ```
pub struct LexerRegistry {
    lexers: Vec<Box<dyn Lexer>>,
}

impl LexerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        LexerRegistry { lexers: Vec::new() }
    }

    /// Register a lexer
    ///
    /// If a lexer with the same name already exists, it will be replaced.
    pub fn register<L: Lexer + 'static>(&mut self, lexer: L) {
        self.lexers.retain(|existing| existing.name() != lexer.name());
        self.lexers.push(Box::new(lexer));
    }

    /// Get a lexer by name or alias
    pub fn get(&self, name: &str) -> Result<&dyn Lexer, LexerError> {
        let wanted = name.to_ascii_lowercase();
        self.lexers
            .iter()
            .find(|lexer| {
                lexer.name() == wanted || lexer.aliases().iter().any(|alias| *alias == wanted)
            })
            .map(|lexer| lexer.as_ref())
            .ok_or_else(|| LexerError::LexerNotFound(name.to_string()))
    }

    /// Check if a lexer exists under this name or alias
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// Find the lexer whose file name patterns match `path`
    pub fn for_filename(&self, path: &Path) -> Result<&dyn Lexer, LexerError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();

        self.lexers
            .iter()
            .find(|lexer| {
                lexer
                    .filenames()
                    .iter()
                    .any(|pattern| matches_pattern(pattern, file_name))
            })
            .map(|lexer| lexer.as_ref())
            .ok_or_else(|| LexerError::NoLexerForFile(path.display().to_string()))
    }

    /// List all available lexer names (sorted)
    pub fn list_lexers(&self) -> Vec<String> {
        let mut names: Vec<_> = self.lexers.iter().map(|l| l.name().to_string()).collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in lexers using the given options
    pub fn with_options(options: LexerOptions) -> Self {
        let mut registry = Self::new();

        registry.register(RustLexer::new(options.clone()));
        registry.register(TextLexer::new(options));

        registry
    }

    /// Create a registry with the built-in lexers
    pub fn with_defaults() -> Self {
        Self::with_options(LexerOptions::default())
    }
}

impl Default for LexerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Match `*.ext`-style patterns, or an exact file name
fn matches_pattern(pattern: &str, file_name: &str) -> bool {
    match pattern.strip_prefix('*') {
        Some(suffix) => file_name.len() > suffix.len() && file_name.ends_with(suffix),
        None => pattern == file_name,
    }
}
