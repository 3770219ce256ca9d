use alloc::sync::Arc;

use crate::autoplay::{DEFAULT_AUTOPLAY_INTERVAL_MS, MIN_AUTOPLAY_INTERVAL_MS};
use crate::carousel::Carousel;
use crate::{BreakpointTable, CarouselEvent, CommitThreshold, OptionsError};

/// A callback fired synchronously for every [`CarouselEvent`].
///
/// The carousel is passed in its post-mutation state, so `index()`, `can_scroll_prev()` and
/// `can_scroll_next()` already reflect the change.
pub type OnChangeCallback<S> = Arc<dyn Fn(&Carousel<S>, CarouselEvent) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: the callback lives in an `Arc`, so hosts can tweak a field and hand the
/// options back via `Carousel::set_options`.
pub struct CarouselOptions<S> {
    /// Advance automatically every `autoplay_interval_ms`.
    pub autoplay: bool,
    pub autoplay_interval_ms: u64,
    /// In clamp mode, let autoplay jump back to the first page after the last one.
    pub autoplay_rewind: bool,
    /// Suspend autoplay while the pointer hovers the carousel.
    pub pause_on_hover: bool,

    /// Wrap around at the ends instead of stopping.
    pub looping: bool,

    /// Host rendering flag, never read by the engine.
    pub show_dots: bool,
    /// Host rendering flag, never read by the engine.
    pub show_navigation: bool,

    pub breakpoints: BreakpointTable,
    pub commit_threshold: CommitThreshold,

    /// Page shown on mount; clamped into range.
    pub initial_index: usize,

    pub on_change: Option<OnChangeCallback<S>>,
}

impl<S> Clone for CarouselOptions<S> {
    fn clone(&self) -> Self {
        Self {
            autoplay: self.autoplay,
            autoplay_interval_ms: self.autoplay_interval_ms,
            autoplay_rewind: self.autoplay_rewind,
            pause_on_hover: self.pause_on_hover,
            looping: self.looping,
            show_dots: self.show_dots,
            show_navigation: self.show_navigation,
            breakpoints: self.breakpoints.clone(),
            commit_threshold: self.commit_threshold,
            initial_index: self.initial_index,
            on_change: self.on_change.clone(),
        }
    }
}

impl<S> CarouselOptions<S> {
    /// Creates options with autoplay on, clamp endpoints and a single slide per view.
    ///
    /// The drag threshold has no sensible universal default, so it is required here.
    pub fn new(commit_threshold: CommitThreshold) -> Self {
        Self {
            autoplay: true,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            autoplay_rewind: false,
            pause_on_hover: false,
            looping: false,
            show_dots: true,
            show_navigation: true,
            breakpoints: BreakpointTable::single(),
            commit_threshold,
            initial_index: 0,
            on_change: None,
        }
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_autoplay_interval_ms(mut self, interval_ms: u64) -> Self {
        self.autoplay_interval_ms = interval_ms;
        self
    }

    pub fn with_autoplay_rewind(mut self, rewind: bool) -> Self {
        self.autoplay_rewind = rewind;
        self
    }

    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_show_dots(mut self, show_dots: bool) -> Self {
        self.show_dots = show_dots;
        self
    }

    pub fn with_show_navigation(mut self, show_navigation: bool) -> Self {
        self.show_navigation = show_navigation;
        self
    }

    pub fn with_breakpoints(mut self, breakpoints: BreakpointTable) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn with_commit_threshold(mut self, commit_threshold: CommitThreshold) -> Self {
        self.commit_threshold = commit_threshold;
        self
    }

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel<S>, CarouselEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    /// Reports the first misconfiguration, if any.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.autoplay_interval_ms < MIN_AUTOPLAY_INTERVAL_MS {
            return Err(OptionsError::AutoplayIntervalTooShort {
                interval_ms: self.autoplay_interval_ms,
                min_ms: MIN_AUTOPLAY_INTERVAL_MS,
            });
        }
        let default = self.breakpoints.default;
        if default.items_per_view == 0 {
            return Err(OptionsError::ZeroItemsPerView { min_width: None });
        }
        if default.advance_step == 0 {
            return Err(OptionsError::ZeroAdvanceStep { min_width: None });
        }
        for bp in &self.breakpoints.breakpoints {
            if bp.items_per_view == 0 {
                return Err(OptionsError::ZeroItemsPerView {
                    min_width: Some(bp.min_width),
                });
            }
            if bp.advance_step == Some(0) {
                return Err(OptionsError::ZeroAdvanceStep {
                    min_width: Some(bp.min_width),
                });
            }
        }
        if !self.commit_threshold.is_valid() {
            return Err(OptionsError::InvalidCommitThreshold {
                threshold: self.commit_threshold,
            });
        }
        Ok(())
    }

    /// Replaces every invalid value with the nearest safe one.
    pub(crate) fn sanitize(&mut self) {
        if let Err(_err) = self.validate() {
            cwarn!(error = %_err, "CarouselOptions: sanitizing invalid configuration");
        }
        self.autoplay_interval_ms = self.autoplay_interval_ms.max(MIN_AUTOPLAY_INTERVAL_MS);
        self.breakpoints = core::mem::take(&mut self.breakpoints).sanitized();
        self.commit_threshold = self.commit_threshold.sanitized();
    }
}

impl<S> core::fmt::Debug for CarouselOptions<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("autoplay", &self.autoplay)
            .field("autoplay_interval_ms", &self.autoplay_interval_ms)
            .field("autoplay_rewind", &self.autoplay_rewind)
            .field("pause_on_hover", &self.pause_on_hover)
            .field("looping", &self.looping)
            .field("show_dots", &self.show_dots)
            .field("show_navigation", &self.show_navigation)
            .field("breakpoints", &self.breakpoints)
            .field("commit_threshold", &self.commit_threshold)
            .field("initial_index", &self.initial_index)
            .finish_non_exhaustive()
    }
}
