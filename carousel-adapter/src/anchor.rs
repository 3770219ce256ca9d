use core::fmt;

use carousel::{Carousel, Slide};

/// Remembers which slide was in view so a data refresh does not jump to unrelated content.
///
/// Typical use cases:
/// - a listing feed refetches and prepends fresh ads while the user looks at page 3
/// - favorites are reordered and the current card should stay on screen
#[derive(Clone, PartialEq, Eq)]
pub struct SlideAnchor<K> {
    pub key: K,
}

impl<K: fmt::Debug> fmt::Debug for SlideAnchor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideAnchor").field("key", &self.key).finish()
    }
}

/// Captures an anchor for the first visible slide (by key).
///
/// Returns `None` if the carousel has no slides.
pub fn capture_anchor<S: Slide>(c: &Carousel<S>) -> Option<SlideAnchor<S::Key>> {
    let visible = c.visible_range();
    if visible.is_empty() {
        return None;
    }
    let slide = c.slides().get(visible.start_index)?;
    Some(SlideAnchor { key: slide.key() })
}

/// Moves the cursor to the page that now holds the anchored slide.
///
/// Returns `true` when the anchored key still exists. The move counts as a navigation, so it
/// restarts the autoplay interval from `now_ms`.
pub fn apply_anchor<S: Slide>(
    c: &mut Carousel<S>,
    anchor: &SlideAnchor<S::Key>,
    now_ms: u64,
) -> bool {
    let Some(position) = c.position_of_key(&anchor.key) else {
        return false;
    };
    let Some(page) = c.page_of_slide(position) else {
        return false;
    };
    c.go_to(page, now_ms);
    true
}
