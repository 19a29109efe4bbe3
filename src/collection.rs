// SPDX-License-Identifier: MPL-2.0
//! Photo collection types and wire-payload normalization.
//!
//! The photo API answers either with a bare array of image URLs or with an
//! object that carries the URLs inside one array-valued field. Both shapes
//! are decoded into an explicit [`PhotoPayload`] variant at the boundary and
//! then normalized into an ordered [`PhotoCollection`].

use serde::Deserialize;
use serde_json::Value;

/// Wire payload of the event photo endpoint.
///
/// Decoding tries the bare-array shape first, then falls back to a keyed
/// object. Anything else lands in `Other` and normalizes to an empty
/// collection rather than an error.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PhotoPayload {
    /// Bare ordered array of locators.
    Listing(Vec<Value>),
    /// Keyed object whose values include one array-valued field of locators.
    Keyed(serde_json::Map<String, Value>),
    /// Any other shape (null, number, string, ...).
    Other(Value),
}

impl PhotoPayload {
    /// Extracts the locator sequence in source arrival order.
    ///
    /// For the keyed shape, the first array-valued field wins (object fields
    /// keep their wire order). Non-string elements inside the array are
    /// skipped.
    fn into_locators(self) -> Vec<String> {
        let items = match self {
            PhotoPayload::Listing(items) => items,
            PhotoPayload::Keyed(map) => map
                .into_iter()
                .map(|(_, value)| value)
                .find_map(|value| match value {
                    Value::Array(items) => Some(items),
                    _ => None,
                })
                .unwrap_or_default(),
            PhotoPayload::Other(_) => Vec::new(),
        };

        items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(url) => Some(url),
                _ => None,
            })
            .collect()
    }
}

/// Ordered, de-duplicated set of image locators for one event.
///
/// Built once per load cycle and replaced wholesale on reload; the display
/// order is the reverse of the wire order so the newest appended photos come
/// first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhotoCollection {
    locators: Vec<String>,
}

impl PhotoCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes a decoded payload into a collection.
    ///
    /// The extracted sequence is reversed, then de-duplicated keeping the
    /// first occurrence in display order.
    pub fn from_payload(payload: PhotoPayload) -> Self {
        let mut locators = payload.into_locators();
        locators.reverse();

        let mut seen = std::collections::HashSet::new();
        locators.retain(|url| seen.insert(url.clone()));

        Self { locators }
    }

    /// Returns the locator at the given display index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.locators.get(index).map(String::as_str)
    }

    /// Returns the number of locators in the collection.
    pub fn len(&self) -> usize {
        self.locators.len()
    }

    /// Checks if the collection holds no locators.
    pub fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }

    /// Iterates over the locators in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.locators.iter().map(String::as_str)
    }
}

/// Presentation state of the gallery, derived from the loading flag and the
/// collection contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// The initial fetch has not completed yet.
    Loading,
    /// The fetch completed and produced at least one photo.
    Loaded,
    /// The fetch completed with zero photos (including the failure path).
    Empty,
}

impl LoadState {
    /// Derives the state from the loading flag and collection presence.
    pub fn derive(is_loading: bool, collection: &PhotoCollection) -> Self {
        if is_loading {
            LoadState::Loading
        } else if collection.is_empty() {
            LoadState::Empty
        } else {
            LoadState::Loaded
        }
    }
}
