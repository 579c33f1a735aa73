//! Canonical text form used for all matching.
//!
//! Normalization never fails: markup is stripped, common entities decoded,
//! typographic punctuation folded to ASCII, then the text is lowercased and
//! whitespace collapsed. Characters that matter to skill names (`+ # . / $ , - '`)
//! survive untouched.

use std::fmt;

const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&ndash;", "-"),
    ("&mdash;", "-"),
    ("&bull;", "*"),
    // last, so "&amp;lt;" decodes to the literal "&lt;"
    ("&amp;", "&"),
];

/// Lowercase, whitespace-collapsed posting text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.0.split(' ').filter(|w| !w.is_empty()).count()
    }

    /// True when `term` (already lowercase) occurs without alphanumerics on either side.
    pub fn contains_term(&self, term: &str) -> bool {
        contains_term(&self.0, term)
    }

    pub fn contains_any_term(&self, terms: &[&str]) -> bool {
        terms.iter().any(|t| self.contains_term(t))
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn normalize_text(raw: &str) -> NormalizedText {
    let stripped = strip_tags(raw);
    let decoded = decode_entities(&stripped);
    let folded: String = decoded.chars().map(fold_char).collect();
    let lowered = folded.to_lowercase();
    NormalizedText(collapse_whitespace(&lowered))
}

/// Boundary-aware substring test over arbitrary lowercase text.
pub fn contains_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    haystack
        .match_indices(term)
        .any(|(start, m)| at_word_boundary(haystack, start, start + m.len()))
}

/// True when `haystack[start..end]` is not flanked by alphanumeric characters.
pub fn at_word_boundary(haystack: &str, start: usize, end: usize) -> bool {
    let before = haystack[..start].chars().next_back();
    let after = haystack[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replaces tag-shaped runs (`<p>`, `</div>`, `<!-- -->`) with a space.
/// A `<` not followed by a letter, `/` or `!` is kept as text.
fn strip_tags(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if c != '<' {
            out.push(c);
            continue;
        }
        let opens_tag = chars
            .peek()
            .is_some_and(|&(_, next)| next.is_ascii_alphabetic() || next == '/' || next == '!');
        match raw[idx..].find('>') {
            Some(close) if opens_tag => {
                let resume_at = idx + close + 1;
                while chars.peek().is_some_and(|&(i, _)| i < resume_at) {
                    chars.next();
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }
    out
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, plain)| acc.replace(entity, plain))
}

fn fold_char(c: char) -> char {
    match c {
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => '\'',
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => '"',
        '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
        '\u{2022}' | '\u{2023}' | '\u{25CF}' | '\u{25AA}' | '\u{25E6}' | '\u{00B7}' => '*',
        '\u{00A0}' | '\u{2007}' | '\u{202F}' => ' ',
        other => other,
    }
}
