//! Colour styles
//!
//! A style maps token types to a handful of visual attributes. Definitions use the usual
//! word syntax and are inherited down the token hierarchy: `Keyword` being `bold #008000`
//! makes `Keyword.Declaration` bold and green too, unless it says otherwise.
//!
//! ```text
//!     bold nobold italic noitalic underline nounderline
//!     #rgb #rrggbb        foreground colour
//!     bg:#rrggbb          background colour
//!     border:#rrggbb      border colour
//!     noinherit           start from a blank entry instead of the parent's
//! ```

use crate::texlight::token::TokenType;
use std::collections::HashMap;

/// Resolved visual attributes of one token type. Colours are six hex digits, no `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleEntry {
    pub color: Option<String>,
    pub bgcolor: Option<String>,
    pub border: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl StyleEntry {
    /// Apply a definition on top of the inherited entry
    pub fn apply(&self, definition: &str) -> StyleEntry {
        let mut entry = self.clone();
        for word in definition.split_whitespace() {
            match word {
                "noinherit" => entry = StyleEntry::default(),
                "bold" => entry.bold = true,
                "nobold" => entry.bold = false,
                "italic" => entry.italic = true,
                "noitalic" => entry.italic = false,
                "underline" => entry.underline = true,
                "nounderline" => entry.underline = false,
                _ => {
                    if let Some(color) = word.strip_prefix("bg:") {
                        entry.bgcolor = parse_color(color);
                    } else if let Some(color) = word.strip_prefix("border:") {
                        entry.border = parse_color(color);
                    } else if let Some(color) = parse_color(word) {
                        entry.color = Some(color);
                    } else {
                        tracing::debug!("ignoring unknown style directive '{}'", word);
                    }
                }
            }
        }
        entry
    }

    pub fn is_plain(&self) -> bool {
        *self == StyleEntry::default()
    }
}

/// `#rgb` or `#rrggbb` to six hex digits
fn parse_color(value: &str) -> Option<String> {
    let hex = value.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => Some(hex.chars().flat_map(|c| [c, c]).collect()),
        6 => Some(hex.to_string()),
        _ => None,
    }
}

const DEFAULT_DEFINITIONS: &[(TokenType, &str)] = &[
    (TokenType::Whitespace, "#bbbbbb"),
    (TokenType::Comment, "italic #3D7B7B"),
    (TokenType::CommentPreproc, "noitalic #9C6500"),
    (TokenType::Keyword, "bold #008000"),
    (TokenType::KeywordPseudo, "nobold"),
    (TokenType::KeywordType, "nobold #B00040"),
    (TokenType::Operator, "#666666"),
    (TokenType::NameBuiltin, "#008000"),
    (TokenType::NameFunction, "#0000FF"),
    (TokenType::NameClass, "bold #0000FF"),
    (TokenType::NameNamespace, "bold #0000FF"),
    (TokenType::NameLabel, "#767600"),
    (TokenType::NameAttribute, "#687822"),
    (TokenType::String, "#BA2121"),
    (TokenType::StringDoc, "italic"),
    (TokenType::StringEscape, "bold #AA5D1F"),
    (TokenType::Number, "#666666"),
    (TokenType::Error, "border:#FF0000"),
];

const BW_DEFINITIONS: &[(TokenType, &str)] = &[
    (TokenType::Comment, "italic"),
    (TokenType::CommentPreproc, "noitalic"),
    (TokenType::Keyword, "bold"),
    (TokenType::KeywordPseudo, "nobold"),
    (TokenType::KeywordType, "nobold"),
    (TokenType::NameClass, "bold"),
    (TokenType::NameNamespace, "bold"),
    (TokenType::String, "italic"),
    (TokenType::StringEscape, "bold"),
    (TokenType::Error, "border:#FF0000"),
];

/// A named style with every token type resolved
#[derive(Debug, Clone)]
pub struct Style {
    name: String,
    entries: HashMap<TokenType, StyleEntry>,
}

impl Style {
    /// Names of the built-in styles
    pub const NAMES: &'static [&'static str] = &["default", "bw"];

    /// Resolve a set of definitions through the token hierarchy
    pub fn from_definitions(name: &str, definitions: &[(TokenType, &str)]) -> Self {
        let own: HashMap<TokenType, &str> = definitions.iter().copied().collect();
        let mut entries: HashMap<TokenType, StyleEntry> = HashMap::new();

        // Parents come first in ALL, so their entries are always resolved already
        for kind in TokenType::ALL {
            let inherited = kind
                .parent()
                .and_then(|parent| entries.get(&parent).cloned())
                .unwrap_or_default();
            let entry = match own.get(kind) {
                Some(definition) => inherited.apply(definition),
                None => inherited,
            };
            entries.insert(*kind, entry);
        }

        Style {
            name: name.to_string(),
            entries,
        }
    }

    /// Look up a built-in style
    pub fn by_name(name: &str) -> Option<Style> {
        match name {
            "default" => Some(Self::from_definitions("default", DEFAULT_DEFINITIONS)),
            "bw" => Some(Self::from_definitions("bw", BW_DEFINITIONS)),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn style_for(&self, kind: TokenType) -> StyleEntry {
        self.entries.get(&kind).cloned().unwrap_or_default()
    }

    /// Every token type with its resolved entry, parents first
    pub fn iter(&self) -> impl Iterator<Item = (TokenType, &StyleEntry)> + '_ {
        TokenType::ALL
            .iter()
            .filter_map(|kind| self.entries.get(kind).map(|entry| (*kind, entry)))
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::from_definitions("default", DEFAULT_DEFINITIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#fff"), Some("ffffff".to_string()));
        assert_eq!(parse_color("#008000"), Some("008000".to_string()));
        assert_eq!(parse_color("008000"), None);
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#gggggg"), None);
    }

    #[test]
    fn test_inheritance() {
        let style = Style::default();
        let declaration = style.style_for(TokenType::KeywordDeclaration);
        assert!(declaration.bold);
        assert_eq!(declaration.color.as_deref(), Some("008000"));

        let pseudo = style.style_for(TokenType::KeywordPseudo);
        assert!(!pseudo.bold);
        assert_eq!(pseudo.color.as_deref(), Some("008000"));
    }

    #[test]
    fn test_overrides_down_the_tree() {
        let style = Style::default();
        let single = style.style_for(TokenType::CommentSingle);
        assert!(single.italic);
        assert_eq!(single.color.as_deref(), Some("3D7B7B"));

        let preproc = style.style_for(TokenType::CommentPreproc);
        assert!(!preproc.italic);
        assert_eq!(preproc.color.as_deref(), Some("9C6500"));

        let doc = style.style_for(TokenType::StringDoc);
        assert!(doc.italic);
        assert_eq!(doc.color.as_deref(), Some("BA2121"));

        let magic = style.style_for(TokenType::NameFunctionMagic);
        assert_eq!(magic.color.as_deref(), Some("0000FF"));
    }

    #[test]
    fn test_noinherit() {
        let entry = StyleEntry::default().apply("bold #123456").apply("noinherit italic");
        assert!(!entry.bold);
        assert!(entry.italic);
        assert_eq!(entry.color, None);
    }

    #[test]
    fn test_border_and_background() {
        let entry = StyleEntry::default().apply("bg:#eee border:#FF0000");
        assert_eq!(entry.bgcolor.as_deref(), Some("eeeeee"));
        assert_eq!(entry.border.as_deref(), Some("FF0000"));
        assert!(entry.color.is_none());
    }

    #[test]
    fn test_by_name() {
        assert_eq!(Style::by_name("bw").unwrap().name(), "bw");
        assert!(Style::by_name("solarized").is_none());
        assert!(Style::by_name("bw")
            .unwrap()
            .style_for(TokenType::Text)
            .is_plain());
    }
}
