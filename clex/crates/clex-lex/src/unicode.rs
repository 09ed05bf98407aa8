//! Character classification for the scanner.
//!
//! Classes are defined by Unicode general category: letters are `L*`,
//! digits are `Nd`. Whitespace is the space/line/paragraph separators minus
//! the no-break spaces, plus the ASCII control whitespace and the
//! information separators `U+001C..=U+001F`. The single-character symbol
//! set is a constant table.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Every character that forms a one-character symbol token.
pub const SYMBOLS: [char; 18] = [
    '[', ']', '{', '}', '(', ')', ';', ',', '=', '+', '-', '*', '/', '<', '>', '!', '&', '|',
];

/// Separators that do not count as whitespace.
const NO_BREAK_SPACES: [char; 3] = ['\u{00A0}', '\u{2007}', '\u{202F}'];

/// Returns true for whitespace.
///
/// # Example
///
/// ```
/// use clex_lex::unicode::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\u{2003}'));
/// assert!(is_whitespace('\u{001C}'));
/// assert!(!is_whitespace('\u{00A0}'));
/// assert!(!is_whitespace('\u{0085}'));
/// ```
pub fn is_whitespace(c: char) -> bool {
    match c {
        '\t'..='\r' | '\u{001C}'..='\u{001F}' => true,
        _ => {
            matches!(
                get_general_category(c),
                GeneralCategory::SpaceSeparator
                    | GeneralCategory::LineSeparator
                    | GeneralCategory::ParagraphSeparator
            ) && !NO_BREAK_SPACES.contains(&c)
        },
    }
}

/// Returns true if `c` is a member of [`SYMBOLS`].
///
/// # Example
///
/// ```
/// use clex_lex::unicode::is_symbol;
///
/// assert!(is_symbol(';'));
/// assert!(is_symbol('|'));
/// assert!(!is_symbol('@'));
/// assert!(!is_symbol('%'));
/// ```
#[inline]
pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(&c)
}

/// Returns true if `c` is a letter (any `L*` category).
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Checks if a character can start a word (keyword or identifier).
///
/// # Example
///
/// ```
/// use clex_lex::unicode::is_word_start;
///
/// assert!(is_word_start('a'));
/// assert!(is_word_start('_'));
/// assert!(is_word_start('é'));
/// assert!(!is_word_start('1'));
/// assert!(!is_word_start('+'));
/// assert!(!is_word_start('Ⅻ'));
/// ```
#[inline]
pub fn is_word_start(c: char) -> bool {
    is_letter(c) || c == '_'
}

/// Checks if a character can continue a word.
///
/// # Example
///
/// ```
/// use clex_lex::unicode::is_word_continue;
///
/// assert!(is_word_continue('a'));
/// assert!(is_word_continue('_'));
/// assert!(is_word_continue('7'));
/// assert!(!is_word_continue('²'));
/// assert!(!is_word_continue('-'));
/// assert!(!is_word_continue(' '));
/// ```
#[inline]
pub fn is_word_continue(c: char) -> bool {
    is_letter(c) || is_digit(c) || c == '_'
}

/// Checks if a character is a decimal digit (`Nd`).
#[inline]
pub fn is_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}
