//! LaTeX formatter
//!
//! Renders tokens into a `fancyvrb` `Verbatim` environment where every classified token is
//! wrapped in a `\PY{<style path>}{<text>}` call:
//!
//! ```text
//! \begin{Verbatim}[commandchars=\\\{\},codes={\catcode`\$=3\catcode`\^=7\catcode`\_=8\relax}]
//! \PY{k+kd}{let}\PY{+w}{ }\PY{n}{x}\PY{+w}{ }\PY{o}{=}\PY{+w}{ }\PY{l+m+mi}{1}\PY{p}{;}
//! \end{Verbatim}
//! ```
//!
//! The macros themselves come from [`LatexFormatter::style_defs`], which `full` output embeds
//! in a standalone document. Without `full` the caller's preamble is expected to provide them.

pub mod escape;
pub mod style_defs;

pub use escape::escape_tex;

use super::{FormatError, Formatter};
use crate::texlight::style::Style;
use crate::texlight::token::{Token, TokenType};
use serde::Deserialize;

const MATH_CODES: &str = r"codes={\catcode`\$=3\catcode`\^=7\catcode`\_=8\relax}";

/// Options of the LaTeX formatter
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LatexOptions {
    /// Emit a complete document instead of just the Verbatim block
    pub full: bool,
    /// Colour style used for the style definitions
    pub style: String,
    /// Prefix of every generated macro
    pub commandprefix: String,
    /// Environment wrapping the code
    pub envname: String,
    /// Pass `$...$` in comments through as math
    pub mathescape: bool,
    /// Pass comment text through as raw TeX
    pub texcomments: bool,
    /// Two delimiter characters; comment text between them is passed through as raw TeX
    pub escapeinside: String,
    pub linenos: bool,
    pub linenostart: usize,
    pub linenostep: usize,
    /// Extra options appended to the environment's option list
    pub verboptions: String,
    pub docclass: String,
    pub preamble: String,
    pub title: String,
    pub encoding: String,
}

impl Default for LatexOptions {
    fn default() -> Self {
        LatexOptions {
            full: false,
            style: "default".to_string(),
            commandprefix: "PY".to_string(),
            envname: "Verbatim".to_string(),
            mathescape: true,
            texcomments: false,
            escapeinside: String::new(),
            linenos: false,
            linenostart: 1,
            linenostep: 1,
            verboptions: String::new(),
            docclass: "article".to_string(),
            preamble: String::new(),
            title: String::new(),
            encoding: "utf8".to_string(),
        }
    }
}

/// Formats tokens as LaTeX
#[derive(Debug, Clone)]
pub struct LatexFormatter {
    options: LatexOptions,
    style: Style,
    escape_delimiters: Option<(char, char)>,
}

impl LatexFormatter {
    /// Validate `options` and build a formatter
    pub fn new(options: LatexOptions) -> Result<Self, FormatError> {
        let style = Style::by_name(&options.style)
            .ok_or_else(|| FormatError::StyleNotFound(options.style.clone()))?;

        if options.commandprefix.is_empty()
            || !options.commandprefix.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(FormatError::InvalidOption(format!(
                "commandprefix must be a non-empty run of ASCII letters, got '{}'",
                options.commandprefix
            )));
        }
        if options.envname.is_empty() {
            return Err(FormatError::InvalidOption(
                "envname must not be empty".to_string(),
            ));
        }

        let delimiters: Vec<char> = options.escapeinside.chars().collect();
        let escape_delimiters = match delimiters.as_slice() {
            [] => None,
            [left, right] => Some((*left, *right)),
            _ => {
                return Err(FormatError::InvalidOption(format!(
                    "escapeinside needs exactly two characters, got '{}'",
                    options.escapeinside
                )))
            }
        };

        Ok(LatexFormatter {
            options,
            style,
            escape_delimiters,
        })
    }

    pub fn options(&self) -> &LatexOptions {
        &self.options
    }

    /// The macro definitions the output relies on
    pub fn style_defs(&self) -> String {
        style_defs::style_defs(&self.style, &self.options.commandprefix)
    }

    fn escape_comment(&self, value: &str) -> String {
        let prefix = &self.options.commandprefix;
        if self.options.texcomments {
            escape::escape_tex_comment(value, prefix)
        } else if self.options.mathescape {
            escape::escape_math(value, prefix)
        } else if let Some((left, right)) = self.escape_delimiters {
            escape::escape_inside(value, left, right, prefix)
        } else {
            escape_tex(value, prefix)
        }
    }

    fn escape_value(&self, token: &Token) -> String {
        match token.kind {
            TokenType::Escape => token.value.clone(),
            kind if kind.is_comment() => self.escape_comment(&token.value),
            _ => escape_tex(&token.value, &self.options.commandprefix),
        }
    }

    fn begin_environment(&self) -> String {
        let options = &self.options;
        let mut begin = format!(r"\begin{{{}}}[commandchars=\\\{{\}}", options.envname);

        if options.linenos {
            begin.push_str(",numbers=left");
            if options.linenostart != 0 {
                begin.push_str(&format!(",firstnumber={}", options.linenostart));
            }
            if options.linenostep != 0 {
                begin.push_str(&format!(",stepnumber={}", options.linenostep));
            }
        }
        if options.mathescape || options.texcomments || self.escape_delimiters.is_some() {
            begin.push(',');
            begin.push_str(MATH_CODES);
        }
        if !options.verboptions.is_empty() {
            begin.push(',');
            begin.push_str(&options.verboptions);
        }
        begin.push_str("]\n");

        begin
    }

    /// The Verbatim block alone
    fn format_block(&self, tokens: &[Token]) -> String {
        let prefix = &self.options.commandprefix;
        let mut out = self.begin_environment();

        for token in tokens {
            let value = self.escape_value(token);
            let path = token.kind.style_path();

            if path.is_empty() {
                out.push_str(&value);
                continue;
            }

            let mut lines = value.split('\n').peekable();
            while let Some(line) = lines.next() {
                if !line.is_empty() {
                    out.push_str(&format!(r"\{}{{{}}}{{{}}}", prefix, path, line));
                }
                if lines.peek().is_some() {
                    out.push('\n');
                }
            }
        }

        out.push_str(&format!("\\end{{{}}}\n", self.options.envname));
        out
    }

    fn format_document(&self, block: &str) -> String {
        let options = &self.options;
        let mut doc = String::new();

        doc.push_str(&format!("\\documentclass{{{}}}\n", options.docclass));
        doc.push_str("\\usepackage{fancyvrb}\n");
        doc.push_str("\\usepackage{color}\n");
        doc.push_str(&format!("\\usepackage[{}]{{inputenc}}\n", options.encoding));
        doc.push_str(&options.preamble);
        doc.push_str("\n\n");
        doc.push_str(&self.style_defs());
        doc.push_str("\n\\begin{document}\n\n");
        if !options.title.is_empty() {
            doc.push_str(&format!("\\section*{{{}}}\n\n", options.title));
        }
        doc.push_str(block);
        doc.push_str("\\end{document}\n");

        doc
    }
}

impl Default for LatexFormatter {
    fn default() -> Self {
        LatexFormatter {
            options: LatexOptions::default(),
            style: Style::default(),
            escape_delimiters: None,
        }
    }
}

impl Formatter for LatexFormatter {
    fn name(&self) -> &str {
        "latex"
    }

    fn aliases(&self) -> &[&'static str] {
        &["tex"]
    }

    fn description(&self) -> &str {
        "LaTeX fancyvrb Verbatim environment"
    }

    fn format(&self, tokens: &[Token]) -> Result<String, FormatError> {
        let block = self.format_block(tokens);
        tracing::debug!(
            tokens = tokens.len(),
            bytes = block.len(),
            full = self.options.full,
            "formatted LaTeX"
        );

        if self.options.full {
            Ok(self.format_document(&block))
        } else {
            Ok(block)
        }
    }
}
