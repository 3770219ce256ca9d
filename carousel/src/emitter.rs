use alloc::vec::Vec;

use crate::{Boundary, ChangeReason, Layout};

/// Notifications delivered to `on_change`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarouselEvent {
    IndexChanged {
        from: usize,
        to: usize,
        reason: ChangeReason,
    },
    /// A clamp-mode carousel landed on its first or last page.
    BoundaryReached(Boundary),
    LayoutChanged {
        layout: Layout,
        page_count: usize,
    },
}

/// Buffers events raised while a batch is open.
///
/// Outside a batch, [`EventQueue::push`] hands the event straight back so the caller can
/// deliver it immediately.
#[derive(Clone, Debug, Default)]
pub(crate) struct EventQueue {
    depth: usize,
    pending: Vec<CarouselEvent>,
}

impl EventQueue {
    pub(crate) fn push(&mut self, event: CarouselEvent) -> Option<CarouselEvent> {
        if self.depth > 0 {
            self.pending.push(event);
            return None;
        }
        Some(event)
    }

    pub(crate) fn open(&mut self) {
        self.depth = self.depth.saturating_add(1);
    }

    /// Closes one batch level. Returns the buffered events once the outermost level closes.
    pub(crate) fn close(&mut self) -> Vec<CarouselEvent> {
        debug_assert!(self.depth > 0, "EventQueue: close without open");
        self.depth = self.depth.saturating_sub(1);
        if self.depth == 0 {
            core::mem::take(&mut self.pending)
        } else {
            Vec::new()
        }
    }

    pub(crate) fn clear(&mut self) {
        self.pending.clear();
    }
}
