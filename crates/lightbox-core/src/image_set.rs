//! Ordered image references captured from the gallery at load time

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Opaque reference to an image resource, usually its URL
///
/// The value is used as-is; no validation or normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Immutable, cheaply clonable list of images in thumbnail display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet {
    images: Arc<[ImageRef]>,
}

impl ImageSet {
    pub fn new<I, R>(images: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<ImageRef>,
    {
        Self {
            images: images.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.images.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.images.iter()
    }
}

impl Default for ImageSet {
    fn default() -> Self {
        Self::new(std::iter::empty::<ImageRef>())
    }
}

impl<R: Into<ImageRef>> FromIterator<R> for ImageSet {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Self::new(iter)
    }
}
