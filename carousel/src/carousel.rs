use alloc::vec::Vec;

use crate::autoplay::{Autoplay, MIN_AUTOPLAY_INTERVAL_MS, PauseReason};
use crate::cursor::Cursor;
use crate::emitter::EventQueue;
use crate::key::first_duplicate_key;
use crate::{
    Boundary, BreakpointTable, CarouselEvent, CarouselOptions, CarouselState, ChangeReason,
    Counter, DragOutcome, DragSession, Layout, NavDirection, OptionsError, PageRange, Slide,
};

/// Where a carousel is in its mount lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lifecycle {
    /// Built but not mounted: navigation works, autoplay is not armed yet.
    Created,
    Mounted,
    /// Torn down. Every mutating call is a no-op from here on.
    Unmounted,
}

/// A headless carousel engine.
///
/// This type is UI-agnostic:
/// - It owns the slide collection but never inspects payloads, only [`Slide::key`].
/// - It does not own a platform timer. Time flows in through `now_ms` arguments, and the
///   autoplay deadline is exposed so the host can poll [`Carousel::tick`] or arm a timer.
/// - Every mutation updates state and delivers `on_change` events before returning.
///
/// For debounced resizing, slide-transition tweens and anchoring across data refreshes, see
/// the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel<S> {
    options: CarouselOptions<S>,
    slides: Vec<S>,
    layout: Layout,
    cursor: Cursor,
    viewport_width: u32,
    autoplay: Autoplay,
    drag: Option<DragSession>,
    hovered: bool,
    lifecycle: Lifecycle,
    events: EventQueue,
}

impl<S: Slide> Carousel<S> {
    /// Creates a carousel, replacing invalid options with safe values.
    ///
    /// Autoplay is armed by [`Carousel::mount`], not here.
    pub fn new(slides: Vec<S>, mut options: CarouselOptions<S>) -> Self {
        options.sanitize();
        check_unique_keys(&slides);

        let layout = options.breakpoints.resolve(0);
        let mut cursor = Cursor::new(layout.page_count(slides.len()), options.looping);
        cursor.go_to_clamped(options.initial_index);
        let autoplay = Autoplay::new(options.autoplay_interval_ms);

        cdebug!(
            slides = slides.len(),
            page_count = cursor.page_count(),
            looping = options.looping,
            autoplay = options.autoplay,
            "Carousel::new"
        );

        Self {
            options,
            slides,
            layout,
            cursor,
            viewport_width: 0,
            autoplay,
            drag: None,
            hovered: false,
            lifecycle: Lifecycle::Created,
            events: EventQueue::default(),
        }
    }

    /// Like [`Carousel::new`], but rejects invalid options instead of sanitizing them.
    pub fn try_new(slides: Vec<S>, options: CarouselOptions<S>) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self::new(slides, options))
    }

    pub fn options(&self) -> &CarouselOptions<S> {
        &self.options
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    fn is_alive(&self) -> bool {
        self.lifecycle != Lifecycle::Unmounted
    }

    /// Mounts the carousel and arms autoplay (if enabled) a full interval after `now_ms`.
    ///
    /// Only the first call has an effect; an unmounted carousel cannot be mounted again.
    pub fn mount(&mut self, now_ms: u64) {
        if self.lifecycle != Lifecycle::Created {
            return;
        }
        self.lifecycle = Lifecycle::Mounted;
        if self.options.autoplay {
            self.autoplay.start(self.options.autoplay_interval_ms, now_ms);
        }
        ctrace!(now_ms, deadline = ?self.autoplay.next_deadline(), "Carousel::mount");
    }

    /// Tears the carousel down: cancels autoplay and any drag, and turns later calls into no-ops.
    pub fn unmount(&mut self) {
        if self.lifecycle == Lifecycle::Unmounted {
            return;
        }
        self.lifecycle = Lifecycle::Unmounted;
        self.autoplay.stop();
        self.drag = None;
        self.events.clear();
        cdebug!("Carousel::unmount");
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// The current page (a slide index when one slide is shown per view).
    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    /// Number of distinct cursor positions.
    pub fn page_count(&self) -> usize {
        self.cursor.page_count()
    }

    pub fn looping(&self) -> bool {
        self.cursor.looping()
    }

    pub fn can_scroll_prev(&self) -> bool {
        self.cursor.can_scroll_prev(self.layout.advance_step)
    }

    pub fn can_scroll_next(&self) -> bool {
        self.cursor.can_scroll_next(self.layout.advance_step)
    }

    pub fn show_dots(&self) -> bool {
        self.options.show_dots
    }

    pub fn show_navigation(&self) -> bool {
        self.options.show_navigation
    }

    /// Slide indexes shown by `page`, or `None` when `page` is out of range.
    pub fn page_range(&self, page: usize) -> Option<PageRange> {
        if page >= self.cursor.page_count() {
            return None;
        }
        let per_view = self.layout.items_per_view;
        let start_index = page.saturating_mul(per_view);
        let end_index = start_index.saturating_add(per_view).min(self.slides.len());
        Some(PageRange {
            page,
            start_index,
            end_index,
        })
    }

    /// Slide indexes of the current page. Empty when there are no slides.
    pub fn visible_range(&self) -> PageRange {
        self.page_range(self.cursor.index()).unwrap_or(PageRange {
            page: 0,
            start_index: 0,
            end_index: 0,
        })
    }

    pub fn visible_slides(&self) -> &[S] {
        let r = self.visible_range();
        &self.slides[r.start_index..r.end_index]
    }

    /// Calls `f` once per page, in order. Useful for rendering dot indicators.
    pub fn for_each_page(&self, mut f: impl FnMut(PageRange)) {
        for page in 0..self.cursor.page_count() {
            if let Some(r) = self.page_range(page) {
                f(r);
            }
        }
    }

    /// The 1-based position for "x / y" counters; `0 / 0` when empty.
    pub fn counter(&self) -> Counter {
        let total = self.cursor.page_count();
        Counter {
            current: if total == 0 { 0 } else { self.cursor.index() + 1 },
            total,
        }
    }

    /// The page that shows `slide_index`.
    pub fn page_of_slide(&self, slide_index: usize) -> Option<usize> {
        if slide_index >= self.slides.len() {
            return None;
        }
        Some(slide_index / self.layout.items_per_view)
    }

    /// The slide index currently holding `key`.
    pub fn position_of_key(&self, key: &S::Key) -> Option<usize> {
        self.slides.iter().position(|s| s.key() == *key)
    }

    pub fn autoplay(&self) -> &Autoplay {
        &self.autoplay
    }

    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    /// When the next automatic advance is due, for hosts that arm a real timer.
    pub fn next_autoplay_deadline(&self) -> Option<u64> {
        self.autoplay.next_deadline()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn drag_session(&self) -> Option<DragSession> {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The live drag delta in pixels (0 when not dragging), for visual tracking only.
    pub fn drag_offset(&self) -> f32 {
        self.drag.map_or(0.0, |s| s.delta())
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            index: self.cursor.index(),
            page_count: self.cursor.page_count(),
            layout: self.layout,
        }
    }

    /// Restores a position captured by [`Carousel::state`].
    ///
    /// If the snapshot was taken under a different layout, the first slide of the saved page
    /// decides the target page. Out-of-range targets are clamped.
    pub fn restore_state(&mut self, state: CarouselState, now_ms: u64) -> bool {
        if !self.is_alive() {
            return false;
        }
        let first_slide = state
            .index
            .saturating_mul(state.layout.items_per_view.max(1));
        let target = first_slide / self.layout.items_per_view;
        let from = self.cursor.index();
        if !self.cursor.go_to_clamped(target) {
            return false;
        }
        self.autoplay.reset(now_ms);
        self.emit_move(from, ChangeReason::Restore);
        true
    }

    fn deliver(&self, event: CarouselEvent) {
        if let Some(cb) = &self.options.on_change {
            cb(self, event);
        }
    }

    fn emit(&mut self, event: CarouselEvent) {
        if let Some(event) = self.events.push(event) {
            self.deliver(event);
        }
    }

    fn emit_move(&mut self, from: usize, reason: ChangeReason) {
        let to = self.cursor.index();
        ctrace!(from, to, ?reason, "Carousel: index changed");
        self.emit(CarouselEvent::IndexChanged { from, to, reason });
        if self.cursor.looping() || self.cursor.page_count() <= 1 {
            return;
        }
        if self.cursor.is_at_start() {
            self.emit(CarouselEvent::BoundaryReached(Boundary::Start));
        } else if self.cursor.is_at_end() {
            self.emit(CarouselEvent::BoundaryReached(Boundary::End));
        }
    }

    /// Batches multiple updates; events raised inside `f` are delivered in order when the
    /// outermost batch ends.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        self.events.open();
        f(self);
        for event in self.events.close() {
            self.deliver(event);
        }
    }

    fn navigate(&mut self, direction: NavDirection, reason: ChangeReason, now_ms: u64) -> bool {
        if !self.is_alive() {
            return false;
        }
        let from = self.cursor.index();
        let step = self.layout.advance_step;
        let moved = match direction {
            NavDirection::Next => self.cursor.next(step),
            NavDirection::Previous => self.cursor.previous(step),
        };
        if !moved {
            return false;
        }
        if reason != ChangeReason::Autoplay {
            self.autoplay.reset(now_ms);
        }
        self.emit_move(from, reason);
        true
    }

    /// Moves one step forward. Returns whether the cursor moved.
    ///
    /// A move restarts the autoplay interval from `now_ms`.
    pub fn next(&mut self, now_ms: u64) -> bool {
        self.navigate(NavDirection::Next, ChangeReason::Next, now_ms)
    }

    /// Moves one step back. Returns whether the cursor moved.
    pub fn previous(&mut self, now_ms: u64) -> bool {
        self.navigate(NavDirection::Previous, ChangeReason::Previous, now_ms)
    }

    /// Jumps to `index`. Out-of-range indexes are ignored.
    pub fn go_to(&mut self, index: usize, now_ms: u64) -> bool {
        if !self.is_alive() {
            return false;
        }
        let from = self.cursor.index();
        if !self.cursor.go_to(index) {
            return false;
        }
        self.autoplay.reset(now_ms);
        self.emit_move(from, ChangeReason::GoTo);
        true
    }

    /// Jumps to the page showing `slide_index`.
    pub fn go_to_slide(&mut self, slide_index: usize, now_ms: u64) -> bool {
        match self.page_of_slide(slide_index) {
            Some(page) => self.go_to(page, now_ms),
            None => false,
        }
    }

    /// Advances the autoplay timer. Returns whether an automatic advance moved the cursor.
    ///
    /// Does nothing before [`Carousel::mount`] or after [`Carousel::unmount`].
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.lifecycle != Lifecycle::Mounted {
            return false;
        }
        if !self.autoplay.poll(now_ms) {
            return false;
        }
        ctrace!(now_ms, index = self.cursor.index(), "Carousel::tick");
        if !self.cursor.looping() && self.cursor.is_at_end() {
            if !self.options.autoplay_rewind || self.cursor.page_count() <= 1 {
                return false;
            }
            let from = self.cursor.index();
            self.cursor.go_to(0);
            self.emit_move(from, ChangeReason::Autoplay);
            return true;
        }
        self.navigate(NavDirection::Next, ChangeReason::Autoplay, now_ms)
    }

    /// Applies a new viewport width. Returns whether the active layout changed.
    ///
    /// A layout change recomputes the page count and clamps the cursor to the new last page.
    /// A clamp that moves the cursor restarts the autoplay interval from `now_ms`.
    pub fn on_viewport_change(&mut self, width: u32, now_ms: u64) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.viewport_width = width;
        let layout = self.options.breakpoints.resolve(width);
        self.apply_layout(layout, now_ms)
    }

    fn apply_layout(&mut self, layout: Layout, now_ms: u64) -> bool {
        if layout == self.layout {
            return false;
        }
        cdebug!(
            items_per_view = layout.items_per_view,
            advance_step = layout.advance_step,
            width = self.viewport_width,
            "Carousel: layout changed"
        );
        self.layout = layout;
        self.repaginate(ChangeReason::Relayout, true, now_ms);
        true
    }

    fn repaginate(&mut self, reason: ChangeReason, layout_changed: bool, now_ms: u64) {
        let from = self.cursor.index();
        let page_count = self.layout.page_count(self.slides.len());
        let count_changed = page_count != self.cursor.page_count();
        let moved = self.cursor.set_page_count(page_count);
        if layout_changed || count_changed {
            self.emit(CarouselEvent::LayoutChanged {
                layout: self.layout,
                page_count,
            });
        }
        if moved {
            self.autoplay.reset(now_ms);
            self.emit_move(from, reason);
        }
    }

    /// Replaces the slide collection, clamping the cursor if the collection shrank.
    pub fn set_slides(&mut self, slides: Vec<S>, now_ms: u64) {
        if !self.is_alive() {
            return;
        }
        check_unique_keys(&slides);
        self.slides = slides;
        self.repaginate(ChangeReason::SlidesChanged, false, now_ms);
    }

    pub fn set_looping(&mut self, looping: bool) {
        if !self.is_alive() {
            return;
        }
        self.options.looping = looping;
        self.cursor.set_looping(looping);
    }

    pub fn set_breakpoints(&mut self, breakpoints: BreakpointTable, now_ms: u64) {
        if !self.is_alive() {
            return;
        }
        self.options.breakpoints = breakpoints.sanitized();
        let layout = self.options.breakpoints.resolve(self.viewport_width);
        self.apply_layout(layout, now_ms);
    }

    /// Turns autoplay on or off. Turning it off cancels the pending deadline.
    pub fn set_autoplay(&mut self, enabled: bool, now_ms: u64) {
        if !self.is_alive() {
            return;
        }
        self.options.autoplay = enabled;
        if !self.is_mounted() {
            return;
        }
        if enabled {
            self.autoplay.start(self.options.autoplay_interval_ms, now_ms);
        } else {
            self.autoplay.stop();
        }
    }

    /// Changes the autoplay period; a running timer restarts with it.
    pub fn set_autoplay_interval(&mut self, interval_ms: u64, now_ms: u64) {
        if !self.is_alive() {
            return;
        }
        if interval_ms < MIN_AUTOPLAY_INTERVAL_MS {
            cwarn!(
                interval_ms,
                min_ms = MIN_AUTOPLAY_INTERVAL_MS,
                "Carousel: autoplay interval raised to minimum"
            );
        }
        let interval_ms = interval_ms.max(MIN_AUTOPLAY_INTERVAL_MS);
        self.options.autoplay_interval_ms = interval_ms;
        self.autoplay.set_interval(interval_ms);
        if self.autoplay.is_enabled() {
            self.autoplay.reset(now_ms);
        }
    }

    /// Replaces the options, applying only what changed.
    pub fn set_options(&mut self, mut options: CarouselOptions<S>, now_ms: u64) {
        if !self.is_alive() {
            return;
        }
        options.sanitize();
        let prev = core::mem::replace(&mut self.options, options);

        if prev.looping != self.options.looping {
            self.cursor.set_looping(self.options.looping);
        }
        if prev.pause_on_hover && !self.options.pause_on_hover {
            self.autoplay.resume(PauseReason::Hover, now_ms);
        } else if !prev.pause_on_hover && self.options.pause_on_hover && self.hovered {
            self.autoplay.pause(PauseReason::Hover);
        }
        if self.is_mounted() {
            if !self.options.autoplay {
                self.autoplay.stop();
            } else if !prev.autoplay
                || prev.autoplay_interval_ms != self.options.autoplay_interval_ms
            {
                self.autoplay.start(self.options.autoplay_interval_ms, now_ms);
            }
        } else {
            self.autoplay.set_interval(self.options.autoplay_interval_ms);
        }
        if prev.breakpoints != self.options.breakpoints {
            let layout = self.options.breakpoints.resolve(self.viewport_width);
            self.apply_layout(layout, now_ms);
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, now_ms: u64, f: impl FnOnce(&mut CarouselOptions<S>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next, now_ms);
    }

    /// Suspends autoplay on behalf of the host (e.g. the page lost visibility).
    pub fn pause_autoplay(&mut self) {
        if !self.is_alive() {
            return;
        }
        self.autoplay.pause(PauseReason::Host);
    }

    pub fn resume_autoplay(&mut self, now_ms: u64) {
        if !self.is_alive() {
            return;
        }
        self.autoplay.resume(PauseReason::Host, now_ms);
    }

    pub fn on_pointer_enter(&mut self) {
        if !self.is_alive() {
            return;
        }
        self.hovered = true;
        if self.options.pause_on_hover {
            self.autoplay.pause(PauseReason::Hover);
        }
    }

    pub fn on_pointer_leave(&mut self, now_ms: u64) {
        if !self.is_alive() {
            return;
        }
        self.hovered = false;
        self.autoplay.resume(PauseReason::Hover, now_ms);
    }

    /// Opens a drag session at `origin_x` and suspends autoplay until the drag ends.
    ///
    /// Starting again while a session is open restarts it from the new origin.
    pub fn on_drag_start(&mut self, origin_x: f32) {
        if !self.is_alive() {
            return;
        }
        ctrace!(origin_x, "Carousel::on_drag_start");
        self.drag = Some(DragSession::new(origin_x));
        self.autoplay.pause(PauseReason::Drag);
    }

    /// Tracks the pointer. Never moves the cursor.
    pub fn on_drag_move(&mut self, current_x: f32) {
        if let Some(session) = &mut self.drag {
            session.update(current_x);
        }
    }

    /// Closes the drag session and commits it if it travelled at least the commit threshold.
    ///
    /// Autoplay resumes with a fresh interval either way. The returned outcome is the gesture's
    /// decision; at a clamp boundary the cursor may still stay where it is.
    pub fn on_drag_end(&mut self, current_x: f32, now_ms: u64) -> DragOutcome {
        let Some(mut session) = self.drag.take() else {
            return DragOutcome::Discard;
        };
        session.update(current_x);
        let threshold = self.options.commit_threshold.resolve(self.viewport_width);
        let outcome = DragOutcome::decide(session.delta(), threshold);
        ctrace!(delta = session.delta(), threshold, ?outcome, "Carousel::on_drag_end");

        self.autoplay.resume(PauseReason::Drag, now_ms);
        match outcome {
            DragOutcome::Next => {
                self.navigate(NavDirection::Next, ChangeReason::Drag, now_ms);
            }
            DragOutcome::Previous => {
                self.navigate(NavDirection::Previous, ChangeReason::Drag, now_ms);
            }
            DragOutcome::Discard => {}
        }
        outcome
    }

    /// Drops the drag session without navigating (e.g. `pointercancel`).
    pub fn on_drag_cancel(&mut self, now_ms: u64) {
        if self.drag.take().is_some() {
            self.autoplay.resume(PauseReason::Drag, now_ms);
        }
    }
}

fn check_unique_keys<S: Slide>(slides: &[S]) {
    let duplicate = first_duplicate_key(slides);
    if duplicate.is_some() {
        cwarn!(slides = slides.len(), "Carousel: duplicate slide keys");
    }
    debug_assert!(duplicate.is_none(), "Carousel: slide keys must be unique");
}
