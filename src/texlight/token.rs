//! Token types produced by the lexers
//!
//! Token types form a small hierarchy (`Keyword.Declaration` is a kind of `Keyword`,
//! `Literal.Number.Integer` a kind of `Literal.Number`, ...). Formatters only ever see the
//! leaf type of a token but style it through its whole ancestry: the LaTeX formatter writes
//! the *style path* of a token, the `+`-joined short names from the root down, and the style
//! sheet defines one macro per short name.
//!
//! ```text
//!     Keyword.Declaration      -> k+kd
//!     Literal.Number.Integer   -> l+m+mi
//!     Whitespace               -> +w      (Text has an empty short name)
//!     Text                     ->         (written unwrapped)
//! ```

use serde::Serialize;
use std::fmt;

/// A classified token: its type and the exact source text it covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenType,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenType, value: impl Into<String>) -> Self {
        Token {
            kind,
            value: value.into(),
        }
    }
}

/// All token types known to the lexers and formatters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenType {
    Text,
    Whitespace,
    Escape,
    Error,

    Keyword,
    KeywordConstant,
    KeywordDeclaration,
    KeywordPseudo,
    KeywordReserved,
    KeywordType,

    Name,
    NameAttribute,
    NameBuiltin,
    NameBuiltinPseudo,
    NameClass,
    NameFunction,
    NameFunctionMagic,
    NameLabel,
    NameNamespace,

    Literal,
    String,
    StringChar,
    StringDoc,
    StringEscape,
    Number,
    NumberBin,
    NumberFloat,
    NumberHex,
    NumberInteger,
    NumberOct,

    Operator,
    Punctuation,

    Comment,
    CommentMultiline,
    CommentPreproc,
    CommentSingle,
}

impl TokenType {
    /// Every token type, parents before children
    pub const ALL: &'static [TokenType] = &[
        TokenType::Text,
        TokenType::Whitespace,
        TokenType::Escape,
        TokenType::Error,
        TokenType::Keyword,
        TokenType::KeywordConstant,
        TokenType::KeywordDeclaration,
        TokenType::KeywordPseudo,
        TokenType::KeywordReserved,
        TokenType::KeywordType,
        TokenType::Name,
        TokenType::NameAttribute,
        TokenType::NameBuiltin,
        TokenType::NameBuiltinPseudo,
        TokenType::NameClass,
        TokenType::NameFunction,
        TokenType::NameFunctionMagic,
        TokenType::NameLabel,
        TokenType::NameNamespace,
        TokenType::Literal,
        TokenType::String,
        TokenType::StringChar,
        TokenType::StringDoc,
        TokenType::StringEscape,
        TokenType::Number,
        TokenType::NumberBin,
        TokenType::NumberFloat,
        TokenType::NumberHex,
        TokenType::NumberInteger,
        TokenType::NumberOct,
        TokenType::Operator,
        TokenType::Punctuation,
        TokenType::Comment,
        TokenType::CommentMultiline,
        TokenType::CommentPreproc,
        TokenType::CommentSingle,
    ];

    /// The direct parent of this type, `None` for top-level types
    pub fn parent(self) -> Option<TokenType> {
        use TokenType::*;
        match self {
            Text | Escape | Error | Keyword | Name | Literal | Operator | Punctuation | Comment => {
                None
            }
            Whitespace => Some(Text),
            KeywordConstant | KeywordDeclaration | KeywordPseudo | KeywordReserved
            | KeywordType => Some(Keyword),
            NameAttribute | NameBuiltin | NameClass | NameFunction | NameLabel | NameNamespace => {
                Some(Name)
            }
            NameBuiltinPseudo => Some(NameBuiltin),
            NameFunctionMagic => Some(NameFunction),
            String | Number => Some(Literal),
            StringChar | StringDoc | StringEscape => Some(String),
            NumberBin | NumberFloat | NumberHex | NumberInteger | NumberOct => Some(Number),
            CommentMultiline | CommentPreproc | CommentSingle => Some(Comment),
        }
    }

    /// Short name used in style sheets
    pub fn short_name(self) -> &'static str {
        use TokenType::*;
        match self {
            Text => "",
            Whitespace => "w",
            Escape => "esc",
            Error => "err",
            Keyword => "k",
            KeywordConstant => "kc",
            KeywordDeclaration => "kd",
            KeywordPseudo => "kp",
            KeywordReserved => "kr",
            KeywordType => "kt",
            Name => "n",
            NameAttribute => "na",
            NameBuiltin => "nb",
            NameBuiltinPseudo => "bp",
            NameClass => "nc",
            NameFunction => "nf",
            NameFunctionMagic => "fm",
            NameLabel => "nl",
            NameNamespace => "nn",
            Literal => "l",
            String => "s",
            StringChar => "sc",
            StringDoc => "sd",
            StringEscape => "se",
            Number => "m",
            NumberBin => "mb",
            NumberFloat => "mf",
            NumberHex => "mh",
            NumberInteger => "mi",
            NumberOct => "mo",
            Operator => "o",
            Punctuation => "p",
            Comment => "c",
            CommentMultiline => "cm",
            CommentPreproc => "cp",
            CommentSingle => "c1",
        }
    }

    /// Dotted name relative to the root (`Keyword.Declaration`)
    pub fn qualified_name(self) -> &'static str {
        use TokenType::*;
        match self {
            Text => "Text",
            Whitespace => "Text.Whitespace",
            Escape => "Escape",
            Error => "Error",
            Keyword => "Keyword",
            KeywordConstant => "Keyword.Constant",
            KeywordDeclaration => "Keyword.Declaration",
            KeywordPseudo => "Keyword.Pseudo",
            KeywordReserved => "Keyword.Reserved",
            KeywordType => "Keyword.Type",
            Name => "Name",
            NameAttribute => "Name.Attribute",
            NameBuiltin => "Name.Builtin",
            NameBuiltinPseudo => "Name.Builtin.Pseudo",
            NameClass => "Name.Class",
            NameFunction => "Name.Function",
            NameFunctionMagic => "Name.Function.Magic",
            NameLabel => "Name.Label",
            NameNamespace => "Name.Namespace",
            Literal => "Literal",
            String => "Literal.String",
            StringChar => "Literal.String.Char",
            StringDoc => "Literal.String.Doc",
            StringEscape => "Literal.String.Escape",
            Number => "Literal.Number",
            NumberBin => "Literal.Number.Bin",
            NumberFloat => "Literal.Number.Float",
            NumberHex => "Literal.Number.Hex",
            NumberInteger => "Literal.Number.Integer",
            NumberOct => "Literal.Number.Oct",
            Operator => "Operator",
            Punctuation => "Punctuation",
            Comment => "Comment",
            CommentMultiline => "Comment.Multiline",
            CommentPreproc => "Comment.Preproc",
            CommentSingle => "Comment.Single",
        }
    }

    /// Ancestry of this type, root first, the type itself last
    pub fn lineage(self) -> Vec<TokenType> {
        let mut chain = vec![self];
        let mut current = self;
        while let Some(parent) = current.parent() {
            chain.push(parent);
            current = parent;
        }
        chain.reverse();
        chain
    }

    /// `+`-joined short names from the root down (`k+kd`, `+w`, or empty for `Text`)
    pub fn style_path(self) -> String {
        self.lineage()
            .into_iter()
            .map(TokenType::short_name)
            .collect::<Vec<_>>()
            .join("+")
    }

    /// Whether `self` is `ancestor` or one of its descendants
    pub fn is_a(self, ancestor: TokenType) -> bool {
        self.lineage().contains(&ancestor)
    }

    pub fn is_comment(self) -> bool {
        self.is_a(TokenType::Comment)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.qualified_name())
    }
}

impl Serialize for TokenType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.qualified_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_paths() {
        assert_eq!(TokenType::KeywordDeclaration.style_path(), "k+kd");
        assert_eq!(TokenType::NumberInteger.style_path(), "l+m+mi");
        assert_eq!(TokenType::NameFunctionMagic.style_path(), "n+nf+fm");
        assert_eq!(TokenType::StringDoc.style_path(), "l+s+sd");
        assert_eq!(TokenType::CommentSingle.style_path(), "c+c1");
        assert_eq!(TokenType::Whitespace.style_path(), "+w");
        assert_eq!(TokenType::Text.style_path(), "");
    }

    #[test]
    fn test_parents_listed_before_children() {
        for (index, kind) in TokenType::ALL.iter().enumerate() {
            if let Some(parent) = kind.parent() {
                let parent_index = TokenType::ALL.iter().position(|t| *t == parent).unwrap();
                assert!(parent_index < index, "{} listed before {}", kind, parent);
            }
        }
    }

    #[test]
    fn test_is_comment() {
        assert!(TokenType::CommentSingle.is_comment());
        assert!(TokenType::CommentPreproc.is_comment());
        assert!(!TokenType::StringDoc.is_comment());
        assert!(!TokenType::Text.is_comment());
    }

    #[test]
    fn test_short_names_unique() {
        let mut names: Vec<_> = TokenType::ALL.iter().map(|t| t.short_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), TokenType::ALL.len());
    }

    #[test]
    fn test_token_serializes_qualified_type() {
        let token = Token::new(TokenType::KeywordDeclaration, "let");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"type":"Keyword.Declaration","value":"let"}"#);
    }
}
