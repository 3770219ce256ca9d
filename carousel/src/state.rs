use crate::Layout;

/// A lightweight, serializable snapshot of a carousel's position.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`, so hosts can keep
/// the current page across re-mounts or sessions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub index: usize,
    pub page_count: usize,
    pub layout: Layout,
}
