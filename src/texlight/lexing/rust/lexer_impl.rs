//! Implementation of the Rust lexer
//!
//! Turns the raw logos tokens into classified [`Token`]s. The classifier is a small state
//! machine: most raw tokens map to one token type directly, a few keywords switch into a
//! state that decides how the next identifier is read.
//!
//! ```text
//!     fn      -> FuncName   next identifier is Name.Function
//!     mod     -> ModName    next identifier is Name.Namespace
//!     struct  -> TypeName   `&`, lifetimes, primitive and prelude types stay,
//!     :  ->                 the first other identifier is Name.Class
//!     break   -> Label      a following lifetime is Name.Label
//! ```
//!
//! Whitespace never leaves a state; anything the state does not expect drops back to `Base`
//! and is classified there.

use super::tokens::{tokenize_with_spans, RawToken};
use super::words;
use crate::texlight::lexing::{Lexer, LexerOptions};
use crate::texlight::token::{Token, TokenType};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static STRING_ESCAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\\['"\\nrt]|\\x[0-7][0-9a-fA-F]|\\0|\\u\{[0-9a-fA-F]{1,6}\}"#)
        .expect("string escape pattern")
});

static BYTE_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\\['"\\nrt]|\\x[0-9a-fA-F]{2}|\\0"#).expect("byte escape pattern"));

/// Lexer for Rust source code
#[derive(Debug, Clone, Default)]
pub struct RustLexer {
    options: LexerOptions,
}

impl RustLexer {
    pub fn new(options: LexerOptions) -> Self {
        RustLexer { options }
    }
}

impl Lexer for RustLexer {
    fn name(&self) -> &str {
        "rust"
    }

    fn aliases(&self) -> &[&'static str] {
        &["rs"]
    }

    fn filenames(&self) -> &[&'static str] {
        &["*.rs"]
    }

    fn options(&self) -> &LexerOptions {
        &self.options
    }

    fn get_tokens_unprocessed(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();

        let shebang = shebang_len(text);
        if shebang > 0 {
            tokens.push(Token::new(TokenType::CommentPreproc, &text[..shebang]));
        }

        tokens.extend(Classifier::new(&text[shebang..]).run());
        tokens
    }
}

/// Length of a leading `#!` interpreter line; `#![` starts an inner attribute instead
fn shebang_len(text: &str) -> usize {
    let Some(rest) = text.strip_prefix("#!") else {
        return 0;
    };
    match rest.chars().next() {
        None | Some('[') | Some('\n') => 0,
        Some(_) => 2 + rest.find('\n').unwrap_or(rest.len()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Base,
    ModName,
    FuncName,
    TypeName,
    Label,
}

struct Classifier<'a> {
    source: &'a str,
    raw: Vec<(Option<RawToken>, Range<usize>)>,
    pos: usize,
    state: State,
    tokens: Vec<Token>,
}

impl<'a> Classifier<'a> {
    fn new(source: &'a str) -> Self {
        Classifier {
            source,
            raw: tokenize_with_spans(source),
            pos: 0,
            state: State::Base,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while let Some((raw, span)) = self.advance() {
            match self.state {
                State::Base => self.base(raw, span),
                State::ModName => self.name_after_keyword(raw, span, TokenType::NameNamespace),
                State::FuncName => self.name_after_keyword(raw, span, TokenType::NameFunction),
                State::TypeName => self.type_name(raw, span),
                State::Label => self.label(raw, span),
            }
        }
        self.tokens
    }

    fn advance(&mut self) -> Option<(Option<RawToken>, Range<usize>)> {
        let next = self.raw.get(self.pos).cloned();
        if next.is_some() {
            self.pos += 1;
        }
        next
    }

    /// The next raw token if it starts exactly at `offset`
    fn peek_adjacent(&self, offset: usize) -> Option<(RawToken, Range<usize>)> {
        match self.raw.get(self.pos) {
            Some((Some(raw), span)) if span.start == offset => Some((*raw, span.clone())),
            _ => None,
        }
    }

    fn push(&mut self, kind: TokenType, range: Range<usize>) {
        if !range.is_empty() {
            self.tokens.push(Token::new(kind, &self.source[range]));
        }
    }

    fn base(&mut self, raw: Option<RawToken>, span: Range<usize>) {
        self.state = State::Base;
        let source = self.source;
        let text = &source[span.clone()];

        let Some(raw) = raw else {
            self.push(TokenType::Error, span);
            return;
        };

        match raw {
            RawToken::Whitespace => self.push(TokenType::Whitespace, span),
            RawToken::LineComment => self.push(line_comment_type(text), span),
            RawToken::BlockComment => self.push(block_comment_type(text), span),
            RawToken::Ident => self.word(span),
            RawToken::RawIdent => self.push(TokenType::Name, span),
            RawToken::Lifetime => self.lifetime(span),
            RawToken::Char => self.push(TokenType::StringChar, span),
            RawToken::Quote => self.push(TokenType::Operator, span),
            RawToken::Str => self.string(span),
            RawToken::RawStr => self.push(TokenType::String, span),
            RawToken::Bin => self.number(TokenType::NumberBin, span),
            RawToken::Oct => self.number(TokenType::NumberOct, span),
            RawToken::Hex => self.number(TokenType::NumberHex, span),
            RawToken::Float => self.number(TokenType::NumberFloat, span),
            RawToken::Integer => self.integer(span),
            RawToken::AttrOpen => self.attribute(span),
            RawToken::Hash => self.push(TokenType::Text, span),
            RawToken::MacroVar => self.push(TokenType::CommentPreproc, span),
            RawToken::PathSep => {
                let continues_path = source[span.end..]
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_alphanumeric() || c == '_');
                self.push(TokenType::Text, span);
                if !continues_path {
                    self.state = State::TypeName;
                }
            }
            RawToken::Arrow | RawToken::Colon => {
                self.push(TokenType::Text, span);
                self.state = State::TypeName;
            }
            RawToken::Range | RawToken::Op => self.push(TokenType::Operator, span),
            RawToken::Punct => self.push(TokenType::Punctuation, span),
        }
    }

    fn word(&mut self, span: Range<usize>) {
        let source = self.source;
        let word = &source[span.clone()];
        match word {
            "mod" => {
                self.push(TokenType::Keyword, span);
                self.state = State::ModName;
            }
            "fn" => {
                self.push(TokenType::Keyword, span);
                self.state = State::FuncName;
            }
            "struct" | "enum" | "type" | "union" => {
                self.push(TokenType::Keyword, span);
                self.state = State::TypeName;
            }
            "break" | "continue" => {
                self.push(TokenType::Keyword, span);
                self.state = State::Label;
            }
            "let" => self.push(TokenType::KeywordDeclaration, span),
            _ => {
                if let Some(kind) = words::classify(word) {
                    self.push(kind, span);
                    return;
                }
                if words::is_builtin_macro(word) {
                    if let Some((RawToken::Op, bang)) = self.peek_adjacent(span.end) {
                        if &source[bang.clone()] == "!" {
                            self.pos += 1;
                            self.push(TokenType::NameFunctionMagic, span.start..bang.end);
                            return;
                        }
                    }
                }
                self.push(TokenType::Name, span);
            }
        }
    }

    fn lifetime(&mut self, span: Range<usize>) {
        let name = &self.source[span.start + 1..span.end];
        let kind = if name == "static" || name == "_" {
            TokenType::NameBuiltin
        } else {
            TokenType::NameAttribute
        };
        self.push(TokenType::Operator, span.start..span.start + 1);
        self.push(kind, span.start + 1..span.end);
    }

    fn number(&mut self, kind: TokenType, span: Range<usize>) {
        let end = span.end;
        self.push(kind, span);
        self.numeric_suffix(end);
    }

    /// Integers followed directly by a single `.` are floats (`1.`), ranges (`1..`) are not
    fn integer(&mut self, span: Range<usize>) {
        if let Some((RawToken::Punct, dot)) = self.peek_adjacent(span.end) {
            if &self.source[dot.clone()] == "." {
                self.pos += 1;
                self.number(TokenType::NumberFloat, span.start..dot.end);
                return;
            }
        }
        self.number(TokenType::NumberInteger, span);
    }

    fn numeric_suffix(&mut self, offset: usize) {
        if let Some((RawToken::Ident, suffix)) = self.peek_adjacent(offset) {
            if words::is_numeric_suffix(&self.source[suffix.clone()]) {
                self.pos += 1;
                self.push(TokenType::Keyword, suffix);
            }
        }
    }

    /// Split a string literal into quotes, plain runs and escape sequences
    fn string(&mut self, span: Range<usize>) {
        let source = self.source;
        let text = &source[span.clone()];
        let (open_len, escapes) = if text.starts_with('b') {
            (2, &*BYTE_ESCAPE)
        } else {
            (1, &*STRING_ESCAPE)
        };
        let closed = text.len() > open_len && text.ends_with('"');
        let body = span.start + open_len..if closed { span.end - 1 } else { span.end };

        self.push(TokenType::String, span.start..body.start);

        let mut cursor = body.start;
        for escape in escapes.find_iter(&source[body.clone()]) {
            let start = body.start + escape.start();
            let end = body.start + escape.end();
            self.push(TokenType::String, cursor..start);
            self.push(TokenType::StringEscape, start..end);
            cursor = end;
        }
        self.push(TokenType::String, cursor..body.end);

        if closed {
            self.push(TokenType::String, body.end..span.end);
        }
    }

    /// `#[...]` and `#![...]`, bracket balanced; strings inside keep their own type
    fn attribute(&mut self, open: Range<usize>) {
        let mut depth = 1usize;
        let mut pending = open.start;
        let mut end = open.end;

        while depth > 0 {
            let Some((raw, span)) = self.advance() else {
                break;
            };
            end = span.end;
            match raw {
                Some(RawToken::Str) => {
                    self.push(TokenType::CommentPreproc, pending..span.start);
                    self.string(span.clone());
                    pending = span.end;
                }
                Some(RawToken::AttrOpen) => depth += 1,
                Some(RawToken::Punct) => match &self.source[span] {
                    "[" => depth += 1,
                    "]" => depth -= 1,
                    _ => {}
                },
                _ => {}
            }
        }

        self.push(TokenType::CommentPreproc, pending..end);
    }

    fn name_after_keyword(&mut self, raw: Option<RawToken>, span: Range<usize>, kind: TokenType) {
        match raw {
            Some(RawToken::Whitespace) => self.push(TokenType::Whitespace, span),
            Some(RawToken::Ident) | Some(RawToken::RawIdent) => {
                self.push(kind, span);
                self.state = State::Base;
            }
            _ => self.base(raw, span),
        }
    }

    fn type_name(&mut self, raw: Option<RawToken>, span: Range<usize>) {
        let source = self.source;
        let text = &source[span.clone()];
        match raw {
            Some(RawToken::Whitespace) => self.push(TokenType::Whitespace, span),
            Some(RawToken::Op) if text == "&" => self.push(TokenType::KeywordPseudo, span),
            Some(RawToken::Lifetime) => self.lifetime(span),
            Some(RawToken::Ident) => match words::classify_in_type(text) {
                Some(kind) => self.push(kind, span),
                None if words::is_reserved_word(text) => self.base(raw, span),
                None => {
                    self.push(TokenType::NameClass, span);
                    self.state = State::Base;
                }
            },
            Some(RawToken::RawIdent) => {
                self.push(TokenType::NameClass, span);
                self.state = State::Base;
            }
            _ => self.base(raw, span),
        }
    }

    fn label(&mut self, raw: Option<RawToken>, span: Range<usize>) {
        match raw {
            Some(RawToken::Whitespace) => self.push(TokenType::Whitespace, span),
            Some(RawToken::Lifetime) => {
                self.push(TokenType::NameLabel, span);
                self.state = State::Base;
            }
            _ => self.base(raw, span),
        }
    }
}

/// `//!` and `///` (but not `////`) are doc comments
fn line_comment_type(text: &str) -> TokenType {
    if text.starts_with("//!") {
        return TokenType::StringDoc;
    }
    match text.strip_prefix("///") {
        Some(rest) if !rest.starts_with('/') => TokenType::StringDoc,
        _ => TokenType::CommentSingle,
    }
}

/// `/*!` and `/**` (but not `/**/` or `/***`) are doc comments
fn block_comment_type(text: &str) -> TokenType {
    if text.starts_with("/*!") {
        return TokenType::StringDoc;
    }
    match text.strip_prefix("/**") {
        Some(rest) if !rest.starts_with('/') && !rest.starts_with('*') && !rest.is_empty() => {
            TokenType::StringDoc
        }
        _ => TokenType::CommentMultiline,
    }
}
