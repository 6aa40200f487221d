//! Lex then format in one call

use crate::texlight::formats::{FormatError, Formatter};
use crate::texlight::lexing::Lexer;

/// Tokenize `source` with `lexer` and render the tokens with `formatter`
///
/// # Examples
///
/// ```ignore
/// let output = highlight("let x = 1;", &RustLexer::default(), &LatexFormatter::default())?;
/// assert!(output.contains(r"\PY{k+kd}{let}"));
/// ```
pub fn highlight(
    source: &str,
    lexer: &dyn Lexer,
    formatter: &dyn Formatter,
) -> Result<String, FormatError> {
    let tokens = lexer.get_tokens(source);
    tracing::debug!(
        lexer = lexer.name(),
        formatter = formatter.name(),
        tokens = tokens.len(),
        "highlighting"
    );
    formatter.format(&tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texlight::formats::{LatexFormatter, NullFormatter};
    use crate::texlight::lexing::{RustLexer, TextLexer};

    #[test]
    fn test_highlight_rust_to_latex() {
        let output = highlight("let x = 1;", &RustLexer::default(), &LatexFormatter::default())
            .unwrap();
        assert!(output.starts_with(r"\begin{Verbatim}[commandchars=\\\{\}"));
        assert!(output.contains(
            r"\PY{k+kd}{let}\PY{+w}{ }\PY{n}{x}\PY{+w}{ }\PY{o}{=}\PY{+w}{ }\PY{l+m+mi}{1}\PY{p}{;}"
        ));
        assert!(output.ends_with("\\end{Verbatim}\n"));
    }

    #[test]
    fn test_highlight_plain_text() {
        let output = highlight("no code here", &TextLexer::default(), &LatexFormatter::default())
            .unwrap();
        assert!(output.contains("\nno code here\n\\end{Verbatim}"));
    }

    #[test]
    fn test_highlight_preprocesses() {
        let output = highlight("\r\n\r\nfn f() {}\r\n", &RustLexer::default(), &NullFormatter)
            .unwrap();
        assert_eq!(output, "fn f() {}\n");
    }
}
