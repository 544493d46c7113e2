//! Identifier character classes shared by keyword substitution and the possessive stage.

/// Returns `true` for CJK ideographs (unified, extensions A through H, compatibility) and `〇`.
pub fn is_ideograph(c: char) -> bool {
    matches!(
        c,
        '\u{4E00}'..='\u{9FFF}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{20000}'..='\u{323AF}'
            | '\u{3007}'
    )
}

/// Returns `true` for characters that can be part of an identifier-like run:
/// ideographs, ASCII letters, ASCII digits and `_`.
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || is_ideograph(c)
}

/// Returns `true` if a keyword occupying `text[start..end]` stands alone: neither neighbour is an
/// identifier character. Missing neighbours (text edges) count as boundaries.
pub fn is_standalone(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_ident_char) && !after.is_some_and(is_ident_char)
}
