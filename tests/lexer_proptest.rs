//! Property-based tests for the lexers
//!
//! These tests ensure the lexers never panic and never lose input: for any text, the token
//! values concatenate back to the preprocessed text.

use proptest::prelude::*;
use texlight::texlight::formats::{Formatter, LatexFormatter};
use texlight::texlight::lexing::{detokenize, preprocess, Lexer, RustLexer, TextLexer};

const VERBATIM_BEGIN: &str = "\\begin{Verbatim}[";
const VERBATIM_END: &str = "\\end{Verbatim}\n";

/// Property-based tests for the Rust lexer
#[cfg(test)]
mod proptest_tests {
    use super::*;

    /// Fragments that exercise every raw token kind
    fn rust_fragment_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            // Identifiers and keywords
            "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
            Just("fn".to_string()),
            Just("let".to_string()),
            Just("struct".to_string()),
            Just("break".to_string()),
            // Numbers
            "[0-9]{1,4}(\\.[0-9]{0,3})?(u32|f64|e7)?",
            "0[xbo][0-9a-f_]{1,6}",
            // Lifetimes, chars and strings
            "'[a-z]{1,5}'?",
            "b?\"[a-z \\\\n\"]{0,10}\"?",
            "r#*\"[a-z ]{0,6}\"#*",
            // Comments
            "//[!/]?[a-z $^_]{0,10}\n",
            "/\\*[a-z */]{0,10}(\\*/)?",
            // Attributes, macros and operators
            "#!?\\[[a-z(=\"\\])]{0,10}",
            "\\$[a-z(),]{0,4}",
            "(::|->|:|\\.\\.=?|[{}()\\[\\],.;+\\-*/%&|<>^!~@=?#\\\\`])",
            // Whitespace
            "[ \t\r\n]{1,3}",
        ]
    }

    fn rust_source_strategy() -> impl Strategy<Value = String> {
        prop::collection::vec(rust_fragment_strategy(), 0..40).prop_map(|parts| parts.concat())
    }

    proptest! {
        #[test]
        fn test_rust_lexing_is_lossless(input in rust_source_strategy()) {
            let lexer = RustLexer::default();
            let tokens = lexer.get_tokens(&input);
            prop_assert_eq!(detokenize(&tokens), preprocess(&input, lexer.options()));
        }

        #[test]
        fn test_rust_lexing_arbitrary_text(input in any::<String>()) {
            let lexer = RustLexer::default();
            let tokens = lexer.get_tokens(&input);
            prop_assert_eq!(detokenize(&tokens), preprocess(&input, lexer.options()));
        }

        #[test]
        fn test_no_empty_tokens(input in rust_source_strategy()) {
            let tokens = RustLexer::default().get_tokens(&input);
            prop_assert!(tokens.iter().all(|token| !token.value.is_empty()));
        }

        #[test]
        fn test_text_lexer_is_lossless(input in any::<String>()) {
            let lexer = TextLexer::default();
            let tokens = lexer.get_tokens(&input);
            prop_assert_eq!(detokenize(&tokens), preprocess(&input, lexer.options()));
        }

        #[test]
        fn test_latex_output_is_deterministic(input in rust_source_strategy()) {
            let tokens = RustLexer::default().get_tokens(&input);
            let formatter = LatexFormatter::default();
            let first = formatter.format(&tokens).unwrap();
            let second = formatter.format(&tokens).unwrap();
            prop_assert!(first.starts_with(VERBATIM_BEGIN), "missing Verbatim header: {:?}", first);
            prop_assert!(first.ends_with(VERBATIM_END), "missing Verbatim footer: {:?}", first);
            prop_assert_eq!(first, second);
        }
    }
}
