#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

#[cfg(feature = "std")]
pub(crate) type KeySet<K> = HashSet<K>;
#[cfg(not(feature = "std"))]
pub(crate) type KeySet<K> = BTreeSet<K>;

/// Identity requirements for slide keys.
///
/// With `std` keys must be `Hash + Eq`; without it they must be `Ord`.
#[cfg(feature = "std")]
pub trait SlideKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> SlideKey for K {}

#[cfg(not(feature = "std"))]
pub trait SlideKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> SlideKey for K {}

/// One unit of carousel content.
///
/// The engine never looks at the payload; it only needs a key that is unique within one
/// collection for as long as the carousel is mounted.
pub trait Slide {
    type Key: SlideKey;

    fn key(&self) -> Self::Key;
}

/// Wraps an arbitrary payload with an explicit key.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyed<K, T> {
    pub key: K,
    pub value: T,
}

impl<K, T> Keyed<K, T> {
    pub fn new(key: K, value: T) -> Self {
        Self { key, value }
    }
}

impl<K: SlideKey, T> Slide for Keyed<K, T> {
    type Key = K;

    fn key(&self) -> K {
        self.key.clone()
    }
}

/// Returns the first key that appears more than once, if any.
pub(crate) fn first_duplicate_key<S: Slide>(slides: &[S]) -> Option<S::Key> {
    let mut seen = KeySet::<S::Key>::new();
    for slide in slides {
        let key = slide.key();
        if seen.contains(&key) {
            return Some(key);
        }
        seen.insert(key);
    }
    None
}
