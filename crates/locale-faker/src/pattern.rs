//! Template expansion.
//!
//! Templates are plain strings in which a handful of placeholder characters
//! are replaced by random characters and everything else is copied through
//! unchanged, so `"(###) ###-####"` keeps its punctuation in place.

use rand::Rng;

/// Placeholder replaced by a random ASCII digit.
pub const DIGIT_PLACEHOLDER: char = '#';

/// Placeholder replaced by a random ASCII uppercase letter.
pub const LETTER_PLACEHOLDER: char = '?';

/// Which placeholder characters a template expansion recognises.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Placeholders {
    /// Only `#` is a placeholder.
    #[default]
    Digits,
    /// Only `?` is a placeholder.
    Letters,
    /// Both `#` and `?` are placeholders.
    Both,
}

impl Placeholders {
    const fn digits(self) -> bool {
        matches!(self, Self::Digits | Self::Both)
    }

    const fn letters(self) -> bool {
        matches!(self, Self::Letters | Self::Both)
    }
}

/// Replaces every `#` in `template` with a uniformly random digit.
///
/// # Examples
///
/// ```
/// use locale_faker::{expand, seeded_rng};
///
/// let mut rng = seeded_rng(7);
/// let number = expand("###-###-####", &mut rng);
///
/// assert_eq!(number.len(), 12);
/// assert_eq!(number.chars().nth(3), Some('-'));
/// assert!(number.chars().filter(|c| *c != '-').all(|c| c.is_ascii_digit()));
/// ```
pub fn expand<R>(template: &str, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    expand_with(template, Placeholders::Digits, rng)
}

/// Replaces every `?` in `template` with a uniformly random uppercase letter.
pub fn expand_letters<R>(template: &str, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    expand_with(template, Placeholders::Letters, rng)
}

/// Replaces `#` with digits and `?` with uppercase letters in one pass.
pub fn bothify<R>(template: &str, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    expand_with(template, Placeholders::Both, rng)
}

/// Expands `template` using the given placeholder set.
///
/// Each placeholder is drawn independently; non-placeholder characters are
/// appended unchanged, so the output has exactly as many characters as the
/// template.
pub fn expand_with<R>(template: &str, placeholders: Placeholders, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    template
        .chars()
        .map(|c| match c {
            DIGIT_PLACEHOLDER if placeholders.digits() => char::from(rng.random_range(b'0'..=b'9')),
            LETTER_PLACEHOLDER if placeholders.letters() => {
                char::from(rng.random_range(b'A'..=b'Z'))
            }
            other => other,
        })
        .collect()
}

/// Renders `template` as an unanchored regular expression.
///
/// Literal characters are escaped and placeholders become character classes,
/// so the result matches exactly the strings [`expand_with`] can produce.
///
/// # Examples
///
/// ```
/// use locale_faker::{Placeholders, to_regex};
///
/// assert_eq!(to_regex("Apt. ###", Placeholders::Digits), r"Apt\. [0-9][0-9][0-9]");
/// assert_eq!(to_regex("(?#)", Placeholders::Both), r"\([A-Z][0-9]\)");
/// ```
#[must_use]
pub fn to_regex(template: &str, placeholders: Placeholders) -> String {
    let mut pattern = String::with_capacity(template.len().saturating_mul(2));
    for c in template.chars() {
        match c {
            DIGIT_PLACEHOLDER if placeholders.digits() => pattern.push_str("[0-9]"),
            LETTER_PLACEHOLDER if placeholders.letters() => pattern.push_str("[A-Z]"),
            other => {
                if is_regex_meta(other) {
                    pattern.push('\\');
                }
                pattern.push(other);
            }
        }
    }
    pattern
}

const fn is_regex_meta(c: char) -> bool {
    matches!(
        c,
        '\\' | '.'
            | '+'
            | '*'
            | '?'
            | '('
            | ')'
            | '|'
            | '['
            | ']'
            | '{'
            | '}'
            | '^'
            | '$'
            | '#'
            | '&'
            | '-'
            | '~'
    )
}
