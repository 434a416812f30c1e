//! Text normalization and sentence splitting
//!
//! Everything downstream of [`clean_text`] works on ASCII only: letters,
//! digits, single spaces and the punctuation `. , ! ?`. Sentence pieces are
//! borrowed slices of the cleaned text, so splitting never allocates per piece.

/// Characters that end a sentence. A run of them counts as one boundary.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Punctuation kept by [`clean_text`] besides letters, digits and whitespace.
const KEPT_PUNCTUATION: [char; 4] = ['.', ',', '!', '?'];

/// ASCII whitespace, including vertical tab (`\x0B`).
#[inline]
fn is_ascii_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

#[inline]
fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_ascii_space(c) || KEPT_PUNCTUATION.contains(&c)
}

/// Returns `true` if `c` ends a sentence.
#[inline]
pub fn is_terminator(c: char) -> bool {
    SENTENCE_TERMINATORS.contains(&c)
}

/// Whitespace for the blank check.
///
/// ASCII controls `\t` through `\r` and the separators `\x1C` through `\x1F`,
/// plus the Unicode space, line and paragraph separators except the
/// non-breaking ones (U+00A0, U+2007, U+202F). U+0085 is not whitespace here.
#[inline]
fn is_blank_space(c: char) -> bool {
    matches!(
        c,
        '\t'..='\r'
            | '\u{1C}'..='\u{1F}'
            | ' '
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Returns `true` for empty or whitespace-only input.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_blank_space)
}

/// Normalize raw document text.
///
/// Drops every character other than ASCII letters, ASCII digits, ASCII
/// whitespace and `. , ! ?`, then collapses whitespace runs to a single space
/// and trims both ends. Idempotent.
pub fn clean_text(text: &str) -> String {
    let filtered: String = text.chars().filter(|&c| is_kept(c)).collect();
    filtered
        .split(is_ascii_space)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split cleaned text into sentence pieces on runs of `.`, `!` and `?`.
///
/// Pieces are returned untrimmed and in document order; a piece's position in
/// the returned vector is its original index. A terminator run at the very
/// start yields a leading empty piece, while empty pieces at the end are
/// dropped. Text without any terminator is returned as a single piece, even
/// when empty.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut in_run = false;
    let mut matched = false;

    for (i, c) in text.char_indices() {
        if is_terminator(c) {
            if !in_run {
                pieces.push(&text[start..i]);
                in_run = true;
                matched = true;
            }
        } else if in_run {
            start = i;
            in_run = false;
        }
    }

    if !matched {
        return vec![text];
    }

    if in_run {
        start = text.len();
    }
    pieces.push(&text[start..]);

    while pieces.last().is_some_and(|p| p.is_empty()) {
        pieces.pop();
    }
    pieces
}

/// Reduce a word to its token form: ASCII letters only, lowercased.
pub fn normalize_token(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Tokens of `text` in order, one per whitespace-delimited word.
///
/// Words with no letters produce empty tokens; callers filter by length.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace().map(normalize_token)
}
