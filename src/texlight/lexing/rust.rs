//! Lexer for Rust source code
//!
//! Lexing happens in two passes:
//!
//! 1. A vanilla logos lexer ([`tokens::RawToken`]) splits the text into raw tokens. Logos is
//!    context free, so at this stage an identifier is just an identifier and a string is one
//!    opaque token. Nested block comments and raw strings need a little scanning and are
//!    handled by logos callbacks.
//! 2. A classification pass ([`lexer_impl::RustLexer`]) walks the raw tokens with a small
//!    amount of context: the identifier after `fn` is a function name, the one after `mod` a
//!    namespace, types follow `struct`, `:` and `->`, a numeric suffix glued to a number is a
//!    keyword, strings get their escape sequences split out, and so on.

pub mod lexer_impl;
pub mod tokens;
pub mod words;

pub use lexer_impl::RustLexer;
pub use tokens::{tokenize, tokenize_with_spans, RawToken};
