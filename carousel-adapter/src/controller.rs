use alloc::vec::Vec;

use carousel::{Carousel, CarouselOptions, DragOutcome, Slide};

use crate::{Easing, SlideAnchor, Tween, apply_anchor, capture_anchor};

/// Default slide-transition duration.
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// A framework-neutral controller that wraps a [`carousel::Carousel`] and provides common
/// adapter workflows (debounced resizing, animated slide transitions, anchored refreshes).
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_width` when the container resizes
/// - `next` / `previous` / `go_to` and the `on_drag_*` methods on user input
/// - `tick(now_ms)` each frame/timer tick (autoplay, debounced resize, transitions)
///
/// The track offset is `page * viewport_width` pixels; a renderer translates the slide strip
/// by `-track_offset(now_ms)`.
#[derive(Clone, Debug)]
pub struct Controller<S> {
    c: Carousel<S>,
    tween: Option<Tween>,
    transition_ms: u64,
    easing: Easing,
    resize_debounce_ms: u64,
    pending_width: Option<(u32, u64)>,
}

impl<S: Slide> Controller<S> {
    pub fn new(slides: Vec<S>, options: CarouselOptions<S>) -> Self {
        Self::from_carousel(Carousel::new(slides, options))
    }

    pub fn from_carousel(c: Carousel<S>) -> Self {
        Self {
            c,
            tween: None,
            transition_ms: DEFAULT_TRANSITION_MS,
            easing: Easing::default(),
            resize_debounce_ms: 0,
            pending_width: None,
        }
    }

    /// Sets the slide-transition duration and easing. A zero duration snaps instantly.
    pub fn with_transition(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.transition_ms = duration_ms;
        self.easing = easing;
        self
    }

    /// Delays viewport changes until the width has been stable for `delay_ms`.
    pub fn with_resize_debounce_ms(mut self, delay_ms: u64) -> Self {
        self.resize_debounce_ms = delay_ms;
        self
    }

    pub fn carousel(&self) -> &Carousel<S> {
        &self.c
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<S> {
        &mut self.c
    }

    pub fn into_carousel(self) -> Carousel<S> {
        self.c
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    pub fn has_pending_resize(&self) -> bool {
        self.pending_width.is_some()
    }

    pub fn mount(&mut self, now_ms: u64) {
        self.c.mount(now_ms);
    }

    /// Unmounts the carousel and drops any transition or pending resize.
    pub fn unmount(&mut self) {
        self.c.unmount();
        self.tween = None;
        self.pending_width = None;
    }

    /// Track offset at rest on `page`.
    pub fn page_offset(&self, page: usize) -> f32 {
        page as f32 * self.c.viewport_width() as f32
    }

    /// The offset a renderer should show at `now_ms`, including a live drag.
    pub fn track_offset(&self, now_ms: u64) -> f32 {
        match self.tween {
            Some(tween) => tween.sample(now_ms),
            None => self.page_offset(self.c.index()) - self.c.drag_offset(),
        }
    }

    fn animate_from(&mut self, from: f32, now_ms: u64) {
        let to = self.page_offset(self.c.index());
        if self.transition_ms == 0 || from == to {
            self.tween = None;
            return;
        }
        match &mut self.tween {
            Some(tween) => tween.retarget(now_ms, to, self.transition_ms),
            None => {
                self.tween = Some(Tween::new(from, to, now_ms, self.transition_ms, self.easing));
            }
        }
    }

    /// Call this when the container width changes.
    ///
    /// With a debounce configured, the width is applied by a later `tick` once it has been
    /// stable long enough; otherwise it is applied immediately. Returns whether the layout
    /// changed right away.
    pub fn on_viewport_width(&mut self, width: u32, now_ms: u64) -> bool {
        if self.resize_debounce_ms == 0 {
            return self.apply_width(width, now_ms);
        }
        self.pending_width = Some((width, now_ms));
        false
    }

    fn apply_width(&mut self, width: u32, now_ms: u64) -> bool {
        self.pending_width = None;
        // Offsets are in pixels, so any in-flight transition is stale after a resize.
        self.tween = None;
        self.c.on_viewport_change(width, now_ms)
    }

    /// Advances the controller.
    ///
    /// - Applies a debounced viewport width once it has settled.
    /// - Runs autoplay, animating to the new page when it advances.
    /// - If a transition is active, returns the sampled track offset.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        if let Some((width, at)) = self.pending_width {
            if now_ms.saturating_sub(at) >= self.resize_debounce_ms {
                self.apply_width(width, now_ms);
            }
        }

        let visual = self.track_offset(now_ms);
        if self.c.tick(now_ms) {
            self.animate_from(visual, now_ms);
        }

        let tween = self.tween?;
        let off = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
        }
        Some(off)
    }

    pub fn next(&mut self, now_ms: u64) -> bool {
        let visual = self.track_offset(now_ms);
        let moved = self.c.next(now_ms);
        if moved {
            self.animate_from(visual, now_ms);
        }
        moved
    }

    pub fn previous(&mut self, now_ms: u64) -> bool {
        let visual = self.track_offset(now_ms);
        let moved = self.c.previous(now_ms);
        if moved {
            self.animate_from(visual, now_ms);
        }
        moved
    }

    pub fn go_to(&mut self, index: usize, now_ms: u64) -> bool {
        let visual = self.track_offset(now_ms);
        let moved = self.c.go_to(index, now_ms);
        if moved {
            self.animate_from(visual, now_ms);
        }
        moved
    }

    /// Starts a drag. Any running transition stops where it is shown now.
    pub fn on_drag_start(&mut self, origin_x: f32) {
        self.tween = None;
        self.c.on_drag_start(origin_x);
    }

    pub fn on_drag_move(&mut self, current_x: f32) {
        self.c.on_drag_move(current_x);
    }

    /// Ends a drag and animates from the release position to the resulting page.
    pub fn on_drag_end(&mut self, current_x: f32, now_ms: u64) -> DragOutcome {
        self.c.on_drag_move(current_x);
        let released = self.track_offset(now_ms);
        let outcome = self.c.on_drag_end(current_x, now_ms);
        self.animate_from(released, now_ms);
        outcome
    }

    /// Cancels a drag and springs back to the current page.
    pub fn on_drag_cancel(&mut self, now_ms: u64) {
        let released = self.track_offset(now_ms);
        self.c.on_drag_cancel(now_ms);
        self.animate_from(released, now_ms);
    }

    pub fn capture_anchor(&self) -> Option<SlideAnchor<S::Key>> {
        capture_anchor(&self.c)
    }

    /// Replaces the slides while keeping the first visible slide in view when it survives.
    ///
    /// Returns `true` when the anchor was found in the new collection. Events raised by the
    /// replacement are delivered together once it completes.
    pub fn replace_slides(&mut self, slides: Vec<S>, now_ms: u64) -> bool {
        let anchor = self.capture_anchor();
        self.tween = None;
        let mut anchored = false;
        self.c.batch_update(|c| {
            c.set_slides(slides, now_ms);
            if let Some(anchor) = &anchor {
                anchored = apply_anchor(c, anchor, now_ms);
            }
        });
        cdebug!(
            slides = self.c.slide_count(),
            anchored,
            index = self.c.index(),
            "Controller::replace_slides"
        );
        anchored
    }
}
