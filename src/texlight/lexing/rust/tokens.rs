//! Raw token definitions for Rust source
//!
//! The tokens are defined using the logos derive macro for efficient tokenization. They carry
//! no context: classification into keywords, names, types and so on happens in
//! [`lexer_impl`](super::lexer_impl).
use logos::{Lexer, Logos};
use std::ops::Range;

/// All raw tokens of Rust source
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum RawToken {
    #[regex(r"\s+")]
    Whitespace,

    // Comments. Line comments stop before the newline.
    #[regex(r"//[^\n]*")]
    LineComment,
    #[token("/*", block_comment)]
    BlockComment,

    // Identifiers
    #[regex(r"[a-zA-Z_]\w*")]
    Ident,
    #[regex(r"r#[a-zA-Z_]\w*")]
    RawIdent,
    #[regex(r"'[a-zA-Z_]\w*")]
    Lifetime,

    // Character and string literals
    #[regex(r#"'(\\['"\\nrt]|\\x[0-7][0-9a-fA-F]|\\0|\\u\{[0-9a-fA-F]{1,6}\}|[^\\'\n])'"#)]
    #[regex(r#"b'(\\['"\\nrt]|\\x[0-9a-fA-F]{2}|\\0|[^\\'\n])'"#)]
    Char,
    #[token("'")]
    Quote,
    #[regex(r#"b?""#, string_body)]
    Str,
    #[regex(r##"b?r#*""##, raw_string_body)]
    RawStr,

    // Numbers. Suffixes (`u32`, `f64`) come out as a separate identifier.
    #[regex(r"0b[01_]+")]
    Bin,
    #[regex(r"0o[0-7_]+")]
    Oct,
    #[regex(r"0[xX][0-9a-fA-F_]+")]
    Hex,
    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+\-]?[0-9_]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+\-]?[0-9_]+")]
    Float,
    #[regex(r"[0-9][0-9_]*")]
    Integer,

    // Attributes and macros
    #[regex(r"#!?\[")]
    AttrOpen,
    #[token("#")]
    Hash,
    #[regex(r"\$([a-zA-Z_]\w*|\(,?|\),?|,?)")]
    MacroVar,

    // Operators and punctuation
    #[token("::")]
    PathSep,
    #[token("->")]
    Arrow,
    #[token(":")]
    Colon,
    #[regex(r"\.\.=?")]
    Range,
    #[regex(r"[{}()\[\],.;]")]
    Punct,
    #[regex(r"[+\-*/%&|<>^!~@=?]")]
    Op,
}

/// Consume the rest of a (possibly nested) block comment
fn block_comment(lex: &mut Lexer<RawToken>) -> bool {
    let bytes = lex.remainder().as_bytes();
    let mut depth = 1usize;
    let mut i = 0;

    while i < bytes.len() {
        match (bytes[i], bytes.get(i + 1)) {
            (b'/', Some(b'*')) => {
                depth += 1;
                i += 2;
            }
            (b'*', Some(b'/')) => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    break;
                }
            }
            _ => i += 1,
        }
    }

    lex.bump(i);
    true
}

/// Consume a string body up to and including the closing quote
fn string_body(lex: &mut Lexer<RawToken>) -> bool {
    let bytes = lex.remainder().as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => {
                lex.bump(i + 1);
                return true;
            }
            _ => i += 1,
        }
    }

    // Unterminated: the string runs to the end of the input
    lex.bump(bytes.len());
    true
}

/// Consume a raw string body up to the quote followed by the opening number of hashes
fn raw_string_body(lex: &mut Lexer<RawToken>) -> bool {
    let hashes = lex.slice().matches('#').count();
    let terminator = format!("\"{}", "#".repeat(hashes));
    let remainder = lex.remainder();

    let consumed = match remainder.find(&terminator) {
        Some(pos) => pos + terminator.len(),
        None => remainder.len(),
    };
    lex.bump(consumed);
    true
}

/// Convenience function to tokenize a string and collect all recognized tokens
pub fn tokenize(source: &str) -> Vec<RawToken> {
    RawToken::lexer(source)
        .filter_map(|result| result.ok())
        .collect()
}

/// Tokenize a string keeping spans; unrecognized input comes out as `None`
pub fn tokenize_with_spans(source: &str) -> Vec<(Option<RawToken>, Range<usize>)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push((result.ok(), lexer.span()));
    }

    tokens
}
