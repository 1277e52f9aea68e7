//! Short-style natural language lists.

use super::locale::Locale;

#[derive(Clone, Copy)]
enum ListType {
    Conjunction,
    Disjunction,
}

/// Join `items` as "a, b and c" in the short style of `locale`.
///
/// Locales without rules join with a bare `,`.
///
/// # Examples
/// ```
/// use client::formatting::{Locale, list_short_conjunction};
///
/// assert_eq!(list_short_conjunction(&["a", "b", "c"], Locale::English), "a, b, & c");
/// assert_eq!(list_short_conjunction(&["a", "b"], Locale::French), "a et b");
/// assert_eq!(list_short_conjunction(&["a", "b"], Locale::Unsupported), "a,b");
/// ```
#[must_use]
pub fn list_short_conjunction<S: AsRef<str>>(items: &[S], locale: Locale) -> String {
    format_list(items, locale, ListType::Conjunction)
}

/// Join `items` as "a, b or c" in the short style of `locale`.
///
/// Locales without rules join with a bare `,`.
#[must_use]
pub fn list_short_disjunction<S: AsRef<str>>(items: &[S], locale: Locale) -> String {
    format_list(items, locale, ListType::Disjunction)
}

fn format_list<S: AsRef<str>>(items: &[S], locale: Locale, list_type: ListType) -> String {
    let Some(word) = final_word(locale, list_type) else {
        return items.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
    };

    match items {
        [] => String::new(),
        [only] => only.as_ref().to_owned(),
        [first, second] => format!("{} {word} {}", first.as_ref(), second.as_ref()),
        [head @ .., last] => {
            let joined = head.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
            // English keeps the serial comma before the final word.
            let separator = if locale == Locale::English { ", " } else { " " };
            format!("{joined}{separator}{word} {}", last.as_ref())
        }
    }
}

const fn final_word(locale: Locale, list_type: ListType) -> Option<&'static str> {
    let word = match (locale, list_type) {
        (Locale::English, ListType::Conjunction) => "&",
        (Locale::English, ListType::Disjunction) => "or",
        (Locale::French, ListType::Conjunction) => "et",
        (Locale::French | Locale::Portuguese, ListType::Disjunction) => "ou",
        (Locale::German, ListType::Conjunction) => "und",
        (Locale::German, ListType::Disjunction) => "oder",
        (Locale::Spanish, ListType::Conjunction) => "y",
        (Locale::Spanish | Locale::Italian, ListType::Disjunction) => "o",
        (Locale::Italian | Locale::Portuguese, ListType::Conjunction) => "e",
        (Locale::Dutch, ListType::Conjunction) => "en",
        (Locale::Dutch, ListType::Disjunction) => "of",
        (Locale::Unsupported, _) => return None,
    };
    Some(word)
}
