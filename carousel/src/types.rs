/// The active paging layout, resolved from a [`crate::BreakpointTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Number of slides visible at once (and therefore per page).
    pub items_per_view: usize,
    /// Pages moved by one `next`/`previous` step.
    pub advance_step: usize,
}

impl Layout {
    pub const SINGLE: Self = Self {
        items_per_view: 1,
        advance_step: 1,
    };

    pub fn new(items_per_view: usize, advance_step: usize) -> Self {
        Self {
            items_per_view,
            advance_step,
        }
    }

    /// Number of cursor positions for `slide_count` slides: `ceil(slide_count / items_per_view)`.
    pub fn page_count(&self, slide_count: usize) -> usize {
        slide_count.div_ceil(self.items_per_view.max(1))
    }

    pub(crate) fn sanitized(self) -> Self {
        Self {
            items_per_view: self.items_per_view.max(1),
            advance_step: self.advance_step.max(1),
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::SINGLE
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavDirection {
    Next,
    Previous,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Boundary {
    Start,
    End,
}

/// Why the cursor moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChangeReason {
    Next,
    Previous,
    GoTo,
    Autoplay,
    Drag,
    /// The layout changed and the cursor had to be clamped.
    Relayout,
    /// The slide collection was replaced and the cursor had to be clamped.
    SlidesChanged,
    Restore,
}

/// A half-open range of slide indexes shown by one page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRange {
    pub page: usize,
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl PageRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, slide_index: usize) -> bool {
        slide_index >= self.start_index && slide_index < self.end_index
    }
}

/// A 1-based "x / y" position, for counters next to the dots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Counter {
    pub current: usize,
    pub total: usize,
}

impl core::fmt::Display for Counter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} / {}", self.current, self.total)
    }
}
