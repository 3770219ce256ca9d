use alloc::vec::Vec;

use crate::Layout;

/// One row of a [`BreakpointTable`]: applies when the viewport is at least `min_width` wide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    pub min_width: u32,
    pub items_per_view: usize,
    /// Pages per step; `None` means 1.
    #[cfg_attr(feature = "serde", serde(default))]
    pub advance_step: Option<usize>,
}

impl Breakpoint {
    pub fn new(min_width: u32, items_per_view: usize) -> Self {
        Self {
            min_width,
            items_per_view,
            advance_step: None,
        }
    }

    pub fn with_advance_step(mut self, advance_step: usize) -> Self {
        self.advance_step = Some(advance_step);
        self
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.items_per_view, self.advance_step.unwrap_or(1))
    }
}

/// Maps viewport widths to the active [`Layout`].
///
/// Resolution is most-specific-match: among the breakpoints whose `min_width` is not greater
/// than the width, the largest `min_width` wins (the later entry on ties). When none match,
/// the table's default applies.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakpointTable {
    #[cfg_attr(feature = "serde", serde(default))]
    pub default: Layout,
    #[cfg_attr(feature = "serde", serde(default))]
    pub breakpoints: Vec<Breakpoint>,
}

impl BreakpointTable {
    /// A table with no breakpoints: every width resolves to `default`.
    pub fn new(default: Layout) -> Self {
        Self {
            default,
            breakpoints: Vec::new(),
        }
    }

    pub fn single() -> Self {
        Self::new(Layout::SINGLE)
    }

    pub fn with_breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.breakpoints.push(breakpoint);
        self
    }

    pub fn push(&mut self, breakpoint: Breakpoint) {
        self.breakpoints.push(breakpoint);
    }

    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    pub fn resolve(&self, width: u32) -> Layout {
        let mut best: Option<&Breakpoint> = None;
        for bp in &self.breakpoints {
            if bp.min_width > width {
                continue;
            }
            if best.is_none_or(|b| bp.min_width >= b.min_width) {
                best = Some(bp);
            }
        }
        best.map_or(self.default, Breakpoint::layout)
    }

    /// Thresholds at which `resolve` may change its answer, ascending and deduplicated.
    pub fn thresholds(&self) -> Vec<u32> {
        let mut out: Vec<u32> = self.breakpoints.iter().map(|b| b.min_width).collect();
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Whether moving from `from` to `to` crosses a registered threshold.
    pub fn crosses_threshold(&self, from: u32, to: u32) -> bool {
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        self.breakpoints
            .iter()
            .any(|b| b.min_width > lo && b.min_width <= hi)
    }

    pub(crate) fn sanitized(mut self) -> Self {
        self.default = self.default.sanitized();
        for bp in &mut self.breakpoints {
            bp.items_per_view = bp.items_per_view.max(1);
            bp.advance_step = bp.advance_step.map(|s| s.max(1));
        }
        self
    }
}

impl Default for BreakpointTable {
    fn default() -> Self {
        Self::single()
    }
}
