//! Slug normalization and the ordered, deduplicated [`SlugSet`].

use serde::{Serialize, Serializer};
use std::collections::HashSet;

/// Turn a raw slug from the API into a site path.
///
/// Surrounding whitespace is trimmed, an empty result becomes the root path
/// `"/"`, and anything else gains a leading `/` if it lacks one.
///
/// ```rust
/// use slugs_core::normalize_slug;
///
/// assert_eq!(normalize_slug("  "), "/");
/// assert_eq!(normalize_slug(" about "), "/about");
/// assert_eq!(normalize_slug("/about"), "/about");
/// ```
pub fn normalize_slug(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Normalized slugs in order of first occurrence, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl SlugSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `raw` and append it unless it is already present.
    ///
    /// Returns `true` if the slug was new.
    pub fn insert_raw(&mut self, raw: &str) -> bool {
        let slug = normalize_slug(raw);
        if self.seen.contains(&slug) {
            return false;
        }
        self.seen.insert(slug.clone());
        self.items.push(slug);
        true
    }

    /// Number of distinct slugs.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no slug has been collected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate slugs in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    /// Slugs in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Consume the set, keeping insertion order.
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl<S: AsRef<str>> FromIterator<S> for SlugSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for SlugSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for raw in iter {
            self.insert_raw(raw.as_ref());
        }
    }
}

impl IntoIterator for SlugSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a SlugSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl From<SlugSet> for Vec<String> {
    fn from(set: SlugSet) -> Self {
        set.into_vec()
    }
}

// Serialized as a plain JSON array of paths.
impl Serialize for SlugSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}
