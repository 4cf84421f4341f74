//! Domain models for the event gallery.

use serde::{Deserialize, Serialize};

/// Closed taxonomy the aggregator sorts assets into.
///
/// Every asset carries exactly one of these; the `all` filter value used by
/// the browser lives in [`CategoryFilter`] and is never attached to an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    RedCarpet,
    Honorees,
    Music,
    Reception,
}

impl Category {
    /// Wire representation (kebab-case), also used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::RedCarpet => "red-carpet",
            Category::Honorees => "honorees",
            Category::Music => "music",
            Category::Reception => "reception",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Client-side filter over the gallery: a single category or everything.
///
/// `All` exists only for filtering and is never serialized into an [`Asset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

/// One media item discovered in the upstream folder tree.
///
/// `id` is the upstream-assigned identifier and is stable across repeated
/// aggregations as long as the upstream item is not deleted or moved.
/// `source_ref` stays server-side; the browser only ever sees the proxy URL
/// built from `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    #[serde(skip_serializing)]
    #[serde(default)]
    pub source_ref: String,
    pub name: String,
    pub alt: String,
    pub category: Category,
    pub mime_type: String,
}

/// Derive human-readable alt text from an upstream file name: strip the
/// extension, turn separators into spaces, drop digits, collapse whitespace.
pub fn alt_text(file_name: &str) -> String {
    let stem = match file_name.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => file_name,
    };
    let cleaned: String = stem
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .filter(|c| !c.is_ascii_digit())
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
