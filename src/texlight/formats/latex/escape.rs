//! TeX escaping
//!
//! Characters with a special meaning inside a `commandchars=\\\{\}` Verbatim environment are
//! replaced by macro calls (`\PYZbs{}` for a backslash) that the style definitions map back
//! to the literal character.

/// Macro name suffix for each special character
fn replacement(ch: char) -> Option<&'static str> {
    Some(match ch {
        '\\' => "Zbs",
        '{' => "Zob",
        '}' => "Zcb",
        '^' => "Zca",
        '_' => "Zus",
        '&' => "Zam",
        '<' => "Zlt",
        '>' => "Zgt",
        '#' => "Zsh",
        '%' => "Zpc",
        '$' => "Zdl",
        '-' => "Zhy",
        '\'' => "Zsq",
        '"' => "Zdq",
        '~' => "Zti",
        _ => return None,
    })
}

/// Escape `text` for verbatim output, using `prefix` as the command prefix
pub fn escape_tex(text: &str, prefix: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match replacement(ch) {
            Some(suffix) => {
                result.push('\\');
                result.push_str(prefix);
                result.push_str(suffix);
                result.push_str("{}");
            }
            None => result.push(ch),
        }
    }
    result
}

/// Escape a comment containing `$...$` math, passing the math through untouched
///
/// An unmatched trailing `$` is escaped like any other character so it cannot open a math
/// group that never closes.
pub fn escape_math(text: &str, prefix: &str) -> String {
    let parts: Vec<&str> = text.split('$').collect();
    let balanced = parts.len() % 2 == 1;
    let mut result = String::with_capacity(text.len());

    for (index, part) in parts.iter().enumerate() {
        let in_math = index % 2 == 1;
        let unmatched = !balanced && index == parts.len() - 1;
        if index > 0 {
            if unmatched {
                result.push_str(&escape_tex("$", prefix));
            } else {
                result.push('$');
            }
        }
        if in_math && !unmatched {
            result.push_str(part);
        } else {
            result.push_str(&escape_tex(part, prefix));
        }
    }

    result
}

/// Escape a comment, passing the text between `left` and `right` through untouched
pub fn escape_inside(text: &str, left: char, right: char, prefix: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(left) {
        let after_left = &rest[start + left.len_utf8()..];
        match after_left.find(right) {
            Some(end) => {
                result.push_str(&escape_tex(&rest[..start], prefix));
                result.push_str(&after_left[..end]);
                rest = &after_left[end + right.len_utf8()..];
            }
            None => break,
        }
    }
    result.push_str(&escape_tex(rest, prefix));

    result
}

/// Escape the leading run of the comment's first character; the rest is raw TeX
pub fn escape_tex_comment(text: &str, prefix: &str) -> String {
    let first = match text.chars().next() {
        Some(first) => first,
        None => return String::new(),
    };
    let lead: usize = text
        .chars()
        .take_while(|ch| *ch == first)
        .map(char::len_utf8)
        .sum();

    let mut result = escape_tex(&text[..lead], prefix);
    result.push_str(&text[lead..]);
    result
}
