//! Word tables for the Rust lexer

use crate::texlight::token::TokenType;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

pub const KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "const", "crate", "dyn", "else", "extern", "for", "if", "impl",
    "in", "loop", "match", "move", "mut", "pub", "ref", "return", "static", "super", "trait",
    "unsafe", "use", "where", "while",
];

pub const RESERVED: &[&str] = &[
    "abstract", "become", "do", "final", "macro", "override", "priv", "typeof", "try", "unsized",
    "virtual", "yield",
];

pub const CONSTANTS: &[&str] = &["true", "false"];

pub const SELF_NAMES: &[&str] = &["self", "Self"];

pub const PRIMITIVE_TYPES: &[&str] = &[
    "u8", "u16", "u32", "u64", "u128", "i8", "i16", "i32", "i64", "i128", "usize", "isize",
    "f32", "f64", "char", "str", "bool",
];

/// Names brought into scope by the standard prelude
pub const PRELUDE: &[&str] = &[
    "Copy",
    "Send",
    "Sized",
    "Sync",
    "Unpin",
    "Drop",
    "Fn",
    "FnMut",
    "FnOnce",
    "drop",
    "Box",
    "ToOwned",
    "Clone",
    "PartialEq",
    "PartialOrd",
    "Eq",
    "Ord",
    "AsRef",
    "AsMut",
    "Into",
    "From",
    "Default",
    "Iterator",
    "Extend",
    "IntoIterator",
    "DoubleEndedIterator",
    "ExactSizeIterator",
    "Option",
    "Some",
    "None",
    "Result",
    "Ok",
    "Err",
    "String",
    "ToString",
    "Vec",
];

pub const BUILTIN_MACROS: &[&str] = &[
    "asm",
    "assert",
    "assert_eq",
    "assert_ne",
    "cfg",
    "column",
    "compile_error",
    "concat",
    "dbg",
    "debug_assert",
    "debug_assert_eq",
    "debug_assert_ne",
    "env",
    "eprint",
    "eprintln",
    "file",
    "format",
    "format_args",
    "global_asm",
    "include",
    "include_bytes",
    "include_str",
    "is_x86_feature_detected",
    "line",
    "macro_rules",
    "matches",
    "module_path",
    "option_env",
    "panic",
    "print",
    "println",
    "stringify",
    "thread_local",
    "todo",
    "unimplemented",
    "unreachable",
    "vec",
    "write",
    "writeln",
];

/// Keywords that may appear inside a type without ending it (`&mut dyn Trait`)
pub const TYPE_MODIFIERS: &[&str] = &["mut", "dyn", "impl", "const"];

/// Keywords handled by the classifier itself rather than the word table
pub const STATEMENT_KEYWORDS: &[&str] = &[
    "mod", "fn", "struct", "enum", "type", "union", "let", "break", "continue",
];

/// Integer and float suffixes glued to numeric literals
pub const NUMERIC_SUFFIXES: &[&str] = &[
    "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128", "isize",
    "f32", "f64",
];

static WORDS: Lazy<HashMap<&'static str, TokenType>> = Lazy::new(|| {
    let mut words = HashMap::new();
    let groups: [(&[&'static str], TokenType); 6] = [
        (KEYWORDS, TokenType::Keyword),
        (RESERVED, TokenType::KeywordReserved),
        (CONSTANTS, TokenType::KeywordConstant),
        (SELF_NAMES, TokenType::NameBuiltinPseudo),
        (PRIMITIVE_TYPES, TokenType::KeywordType),
        (PRELUDE, TokenType::NameBuiltin),
    ];
    for (group, kind) in groups {
        for word in group {
            words.entry(*word).or_insert(kind);
        }
    }
    words
});

static MACROS: Lazy<HashSet<&'static str>> = Lazy::new(|| BUILTIN_MACROS.iter().copied().collect());

/// Classify a word in ordinary code position
pub fn classify(word: &str) -> Option<TokenType> {
    WORDS.get(word).copied()
}

/// Classify a word in type position; `None` means "a type name"
pub fn classify_in_type(word: &str) -> Option<TokenType> {
    if PRIMITIVE_TYPES.contains(&word) {
        Some(TokenType::KeywordType)
    } else if PRELUDE.contains(&word) {
        Some(TokenType::NameBuiltin)
    } else if TYPE_MODIFIERS.contains(&word) {
        Some(TokenType::Keyword)
    } else {
        None
    }
}

/// Words that can never name a type, so they end a type position
pub fn is_reserved_word(word: &str) -> bool {
    STATEMENT_KEYWORDS.contains(&word)
        || matches!(
            classify(word),
            Some(TokenType::Keyword)
                | Some(TokenType::KeywordReserved)
                | Some(TokenType::KeywordConstant)
                | Some(TokenType::NameBuiltinPseudo)
        )
}

pub fn is_builtin_macro(word: &str) -> bool {
    MACROS.contains(word)
}

pub fn is_numeric_suffix(word: &str) -> bool {
    NUMERIC_SUFFIXES.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("match"), Some(TokenType::Keyword));
        assert_eq!(classify("yield"), Some(TokenType::KeywordReserved));
        assert_eq!(classify("true"), Some(TokenType::KeywordConstant));
        assert_eq!(classify("Self"), Some(TokenType::NameBuiltinPseudo));
        assert_eq!(classify("usize"), Some(TokenType::KeywordType));
        assert_eq!(classify("Vec"), Some(TokenType::NameBuiltin));
        assert_eq!(classify("secant"), None);
    }

    #[test]
    fn test_classify_in_type() {
        assert_eq!(classify_in_type("f64"), Some(TokenType::KeywordType));
        assert_eq!(classify_in_type("Option"), Some(TokenType::NameBuiltin));
        assert_eq!(classify_in_type("dyn"), Some(TokenType::Keyword));
        assert_eq!(classify_in_type("Expression"), None);
        assert!(is_reserved_word("loop"));
        assert!(is_reserved_word("fn"));
        assert!(is_reserved_word("Self"));
        assert!(!is_reserved_word("Expression"));
    }

    #[test]
    fn test_macros_and_suffixes() {
        assert!(is_builtin_macro("println"));
        assert!(!is_builtin_macro("my_macro"));
        assert!(is_numeric_suffix("u32"));
        assert!(!is_numeric_suffix("u33"));
    }
}
