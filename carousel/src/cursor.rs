/// The page cursor and its endpoint policy.
///
/// Invariant: `index < page_count` whenever `page_count > 0`, and `index == 0` otherwise.
/// Every mutator returns whether the index actually changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    page_count: usize,
    looping: bool,
}

impl Cursor {
    pub fn new(page_count: usize, looping: bool) -> Self {
        Self {
            index: 0,
            page_count,
            looping,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn last_index(&self) -> usize {
        self.page_count.saturating_sub(1)
    }

    pub fn is_at_start(&self) -> bool {
        self.index == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.index == self.last_index()
    }

    /// Whether `previous(step)` would move the cursor.
    pub fn can_scroll_prev(&self, step: usize) -> bool {
        if self.page_count <= 1 {
            return false;
        }
        if self.looping {
            self.wraps_by(step)
        } else {
            !self.is_at_start()
        }
    }

    /// Whether `next(step)` would move the cursor.
    pub fn can_scroll_next(&self, step: usize) -> bool {
        if self.page_count <= 1 {
            return false;
        }
        if self.looping {
            self.wraps_by(step)
        } else {
            !self.is_at_end()
        }
    }

    // A looping step that is a multiple of the page count lands back on the same page.
    fn wraps_by(&self, step: usize) -> bool {
        step.max(1) % self.page_count != 0
    }

    /// Advances by `step` pages, wrapping or clamping per the endpoint policy.
    pub fn next(&mut self, step: usize) -> bool {
        if self.page_count <= 1 {
            return false;
        }
        let step = step.max(1);
        let target = if self.looping {
            (self.index + step % self.page_count) % self.page_count
        } else {
            self.index.saturating_add(step).min(self.last_index())
        };
        self.replace(target)
    }

    /// Retreats by `step` pages, wrapping or clamping per the endpoint policy.
    pub fn previous(&mut self, step: usize) -> bool {
        if self.page_count <= 1 {
            return false;
        }
        let step = step.max(1);
        let target = if self.looping {
            (self.index + self.page_count - step % self.page_count) % self.page_count
        } else {
            self.index.saturating_sub(step)
        };
        self.replace(target)
    }

    /// Jumps to `index`. Out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.page_count {
            return false;
        }
        self.replace(index)
    }

    /// Jumps to `index`, clamping it into range instead of rejecting it.
    pub fn go_to_clamped(&mut self, index: usize) -> bool {
        let target = index.min(self.last_index());
        self.replace(target)
    }

    /// Changes the number of pages, clamping the index to the new last page.
    pub fn set_page_count(&mut self, page_count: usize) -> bool {
        self.page_count = page_count;
        let target = self.index.min(self.last_index());
        self.replace(target)
    }

    fn replace(&mut self, index: usize) -> bool {
        if self.index == index {
            return false;
        }
        self.index = index;
        true
    }
}
