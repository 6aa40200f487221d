//! # texlight
//!
//! Syntax highlighting of source files into LaTeX markup.
//!
//! File Layout
//!
//! The pipeline is split the same way every highlighter is: a lexer turns source text into a
//! flat stream of classified tokens, a formatter renders that stream into some target markup,
//! and the conversion pass glues both to the filesystem.
//!
//! src/texlight
//!   ├── token        Token type hierarchy and style paths
//!   ├── lexing       Lexer trait, preprocessing, Rust and plain-text lexers
//!   ├── style        Colour styles for the formatters
//!   ├── formats      Formatter trait, LaTeX / token dump / null formatters
//!   ├── highlight    lexer + formatter in one call
//!   ├── conversion   `<base>_temp.rs` -> `<base>.tex`
//!   └── config       Layered TOML configuration

pub mod texlight;

pub use texlight::highlight::highlight;
