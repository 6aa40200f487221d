//! Plain text lexer: the whole input becomes a single `Text` token

use super::{Lexer, LexerOptions};
use crate::texlight::token::{Token, TokenType};

#[derive(Debug, Clone, Default)]
pub struct TextLexer {
    options: LexerOptions,
}

impl TextLexer {
    pub fn new(options: LexerOptions) -> Self {
        TextLexer { options }
    }
}

impl Lexer for TextLexer {
    fn name(&self) -> &str {
        "text"
    }

    fn aliases(&self) -> &[&'static str] {
        &["txt", "plain"]
    }

    fn filenames(&self) -> &[&'static str] {
        &["*.txt"]
    }

    fn options(&self) -> &LexerOptions {
        &self.options
    }

    fn get_tokens_unprocessed(&self, text: &str) -> Vec<Token> {
        if text.is_empty() {
            return Vec::new();
        }
        vec![Token::new(TokenType::Text, text)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_text_token() {
        let tokens = TextLexer::default().get_tokens("let x = 1;");
        assert_eq!(tokens, vec![Token::new(TokenType::Text, "let x = 1;\n")]);
    }

    #[test]
    fn test_empty_unprocessed() {
        assert!(TextLexer::default().get_tokens_unprocessed("").is_empty());
    }
}
