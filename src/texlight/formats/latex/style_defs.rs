//! Style definitions
//!
//! The macro block that makes `\PY{k+kd}{let}` render: `\PY` splits the style path on `+`
//! and applies `\PY@tok@k` then `\PY@tok@kd`, each of which sets some of the bold, italic,
//! underline, colour and box hooks before the text is typeset.

use crate::texlight::style::{Style, StyleEntry};

const PREFIX_MARK: &str = "<CP>";
const STYLES_MARK: &str = "<STYLES>";

const STYLE_TEMPLATE: &str = r#"\makeatletter
\def\<CP>@reset{\let\<CP>@it=\relax \let\<CP>@bf=\relax%
    \let\<CP>@ul=\relax \let\<CP>@tc=\relax%
    \let\<CP>@bc=\relax \let\<CP>@ff=\relax}
\def\<CP>@tok#1{\csname <CP>@tok@#1\endcsname}
\def\<CP>@toks#1+{\ifx\relax#1\empty\else%
    \<CP>@tok{#1}\expandafter\<CP>@toks\fi}
\def\<CP>@do#1{\<CP>@bc{\<CP>@tc{\<CP>@ul{%
    \<CP>@it{\<CP>@bf{\<CP>@ff{#1}}}}}}}
\def\<CP>#1#2{\<CP>@reset\<CP>@toks#1+\relax+\<CP>@do{#2}}

<STYLES>

\def\<CP>Zbs{\char`\\}
\def\<CP>Zus{\char`\_}
\def\<CP>Zob{\char`\{}
\def\<CP>Zcb{\char`\}}
\def\<CP>Zca{\char`\^}
\def\<CP>Zam{\char`\&}
\def\<CP>Zlt{\char`\<}
\def\<CP>Zgt{\char`\>}
\def\<CP>Zsh{\char`\#}
\def\<CP>Zpc{\char`\%}
\def\<CP>Zdl{\char`\$}
\def\<CP>Zhy{\char`\-}
\def\<CP>Zsq{\char`\'}
\def\<CP>Zdq{\char`\"}
\def\<CP>Zti{\char`\~}
\makeatother
"#;

/// `rrggbb` as three comma separated fractions (`0.00,0.50,0.00`)
fn rgb(color: Option<&str>) -> String {
    let hex = match color {
        Some(hex) if hex.len() == 6 => hex,
        _ => return "1,1,1".to_string(),
    };
    (0..3)
        .map(|i| {
            let channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).unwrap_or(0);
            format!("{:.2}", f64::from(channel) / 255.0)
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Body of `\PY@tok@<name>` for one entry, empty when the entry changes nothing
pub fn token_definition(entry: &StyleEntry, prefix: &str) -> String {
    let mut def = String::new();

    if entry.bold {
        def.push_str(&format!(r"\let\{}@bf=\textbf", prefix));
    }
    if entry.italic {
        def.push_str(&format!(r"\let\{}@it=\textit", prefix));
    }
    if entry.underline {
        def.push_str(&format!(r"\let\{}@ul=\underline", prefix));
    }
    if let Some(color) = &entry.color {
        def.push_str(&format!(
            r"\def\{}@tc##1{{\textcolor[rgb]{{{}}}{{##1}}}}",
            prefix,
            rgb(Some(color))
        ));
    }
    if let Some(border) = &entry.border {
        def.push_str(&format!(
            r"\def\{}@bc##1{{{{\setlength{{\fboxsep}}{{\string -\fboxrule}}\fcolorbox[rgb]{{{}}}{{{}}}{{\strut ##1}}}}}}",
            prefix,
            rgb(Some(border)),
            rgb(entry.bgcolor.as_deref())
        ));
    } else if let Some(bgcolor) = &entry.bgcolor {
        def.push_str(&format!(
            r"\def\{}@bc##1{{{{\setlength{{\fboxsep}}{{0pt}}\colorbox[rgb]{{{}}}{{\strut ##1}}}}}}",
            prefix,
            rgb(Some(bgcolor))
        ));
    }

    def
}

/// The full macro block for `style`
pub fn style_defs(style: &Style, prefix: &str) -> String {
    let mut named: Vec<(&str, String)> = style
        .iter()
        .filter(|(_, entry)| !entry.is_plain())
        .map(|(kind, entry)| (kind.short_name(), token_definition(entry, prefix)))
        .filter(|(name, def)| !name.is_empty() && !def.is_empty())
        .collect();
    named.sort_by(|a, b| a.0.cmp(b.0));

    let styles = named
        .iter()
        .map(|(name, def)| format!(r"\@namedef{{{}@tok@{}}}{{{}}}", prefix, name, def))
        .collect::<Vec<_>>()
        .join("\n");

    STYLE_TEMPLATE
        .replace(STYLES_MARK, &styles)
        .replace(PREFIX_MARK, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texlight::token::TokenType;

    #[test]
    fn test_rgb() {
        assert_eq!(rgb(Some("008000")), "0.00,0.50,0.00");
        assert_eq!(rgb(Some("FFFFFF")), "1.00,1.00,1.00");
        assert_eq!(rgb(None), "1,1,1");
    }

    #[test]
    fn test_keyword_definition() {
        let style = Style::default();
        let def = token_definition(&style.style_for(TokenType::Keyword), "PY");
        assert_eq!(
            def,
            r"\let\PY@bf=\textbf\def\PY@tc##1{\textcolor[rgb]{0.00,0.50,0.00}{##1}}"
        );
    }

    #[test]
    fn test_error_border() {
        let style = Style::default();
        let def = token_definition(&style.style_for(TokenType::Error), "PY");
        assert_eq!(
            def,
            r"\def\PY@bc##1{{\setlength{\fboxsep}{\string -\fboxrule}\fcolorbox[rgb]{1.00,0.00,0.00}{1,1,1}{\strut ##1}}}"
        );
    }

    #[test]
    fn test_background_only() {
        let entry = StyleEntry::default().apply("bg:#ffffff");
        assert_eq!(
            token_definition(&entry, "PY"),
            r"\def\PY@bc##1{{\setlength{\fboxsep}{0pt}\colorbox[rgb]{1.00,1.00,1.00}{\strut ##1}}}"
        );
    }

    #[test]
    fn test_style_defs_block() {
        let defs = style_defs(&Style::default(), "PY");
        assert!(defs.starts_with("\\makeatletter\n"));
        assert!(defs.ends_with("\\makeatother\n"));
        assert!(defs.contains(r"\@namedef{PY@tok@kd}{\let\PY@bf=\textbf"));
        assert!(defs.contains(r"\def\PYZus{\char`\_}"));
        assert!(!defs.contains("<CP>"));
        assert!(!defs.contains("PY@tok@}"));

        let k = defs.find(r"\@namedef{PY@tok@k}").unwrap();
        let kd = defs.find(r"\@namedef{PY@tok@kd}").unwrap();
        assert!(k < kd);
    }

    #[test]
    fn test_style_defs_prefix() {
        let defs = style_defs(&Style::default(), "SEC");
        assert!(defs.contains(r"\def\SEC#1#2{\SEC@reset"));
        assert!(!defs.contains(r"\PY"));
    }
}
