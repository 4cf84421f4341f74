//! Name-based taxonomy classifier.
//!
//! Folder and file names coming out of the upstream store are matched against
//! an ordered keyword table; the first keyword found as a substring of the
//! normalized name decides the category. Classification depends only on the
//! table and the input string, never on where the name sits in the tree.

use crate::models::Category;

/// Ordered keyword table. Earlier entries win when several keywords appear in
/// the same name ("red carpet music mix" is red-carpet).
const KEYWORDS: &[(&str, Category)] = &[
    ("red carpet", Category::RedCarpet),
    ("arrivals", Category::RedCarpet),
    ("honoree", Category::Honorees),
    ("award", Category::Honorees),
    ("music", Category::Music),
    ("performance", Category::Music),
    ("band", Category::Music),
    ("reception", Category::Reception),
    ("dinner", Category::Reception),
];

/// Lowercase the name and flatten `-`/`_` runs into single spaces so
/// "Red-Carpet", "red_carpet" and "RED CARPET" all normalize identically.
fn normalize(name: &str) -> String {
    let lowered = name.to_lowercase();
    let spaced: String = lowered
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Map a folder or file name to a category. Names matching no keyword fall
/// back to [`Category::Reception`].
pub fn classify(name: &str) -> Category {
    let normalized = normalize(name);
    KEYWORDS
        .iter()
        .find(|(keyword, _)| normalized.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Reception)
}
