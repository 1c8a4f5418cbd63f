//! Helpers over scripture citation strings as stored in the reading table.
//!
//! A citation looks like `"Isa 2:1-5"`, may offer interchangeable readings
//! separated by `" or "` (`"Ps 80 or 80:1-7v"`), and may mark optional verses
//! with parentheses (`"Zech 14:(1-2)3-9"`). Only the alternatives are handled
//! here; verse syntax is left to whoever fetches the text.

const OR: &str = " or ";

/// Splits a citation into its alternatives, in stored order.
///
/// An alternative that gives only chapter and verses takes the book of the
/// first one.
///
/// # Example
///
/// ```
/// use lekcionaro::citation;
///
/// assert_eq!(vec!["Ps 80", "Ps 80:1-7v"], citation::alternatives("Ps 80 or 80:1-7v"));
/// assert_eq!(vec!["Rom 13:8-14"], citation::alternatives("Rom 13:8-14"));
/// ```
pub fn alternatives(citation: &str) -> Vec<String> {
    let mut parts = citation.split(OR).map(str::trim);
    let Some(first) = parts.next() else {
        return Vec::new();
    };
    let book = book_of(first);
    std::iter::once(first.to_owned())
        .chain(parts.map(|alt| match book {
            Some(book) if book_of(alt).is_none() => format!("{book} {alt}"),
            _ => alt.to_owned(),
        }))
        .collect()
}

/// The first alternative, which is what gets read unless asked otherwise.
pub fn first_option(citation: &str) -> String {
    option(citation, 0)
}

/// The alternative at `index`, or the first one if there are fewer.
pub fn option(citation: &str, index: usize) -> String {
    let mut alts = alternatives(citation);
    if index < alts.len() {
        alts.swap_remove(index)
    } else {
        alts.into_iter().next().unwrap_or_default()
    }
}

/// Whether the citation points into the Psalter.
pub fn is_psalm(citation: &str) -> bool {
    let head = citation.trim_start();
    head.starts_with("Ps ") || head.starts_with("Psalm ") || head.starts_with("Pss ")
}

// Everything before the chapter-and-verse token, e.g. `1 Cor` in `1 Cor 1:1-9`.
fn book_of(citation: &str) -> Option<&str> {
    let (book, _) = citation.trim().rsplit_once(' ')?;
    Some(book.trim_end())
}
