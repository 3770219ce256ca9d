//! A headless carousel engine.
//!
//! For adapter-level utilities (debounced resizing, slide-transition tweens, anchoring across
//! data refreshes), see the `carousel-adapter` crate.
//!
//! This crate focuses on the control logic behind slideshows: a page cursor with loop or
//! clamp endpoints, autoplay that restarts on every manual navigation, breakpoint-driven
//! items-per-view paging, and drag gestures that commit past a threshold.
//!
//! It is UI-agnostic. A TUI/GUI/web layer is expected to provide:
//! - the slide collection (anything implementing [`Slide`])
//! - viewport width changes
//! - pointer events and a millisecond clock (`now_ms`)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod breakpoints;
mod carousel;
mod cursor;
mod drag;
mod emitter;
mod error;
mod key;
mod options;
mod state;
mod types;


pub use autoplay::{
    Autoplay, DEFAULT_AUTOPLAY_INTERVAL_MS, MIN_AUTOPLAY_INTERVAL_MS, PauseReason, PauseReasons,
};
pub use breakpoints::{Breakpoint, BreakpointTable};
pub use carousel::{Carousel, Lifecycle};
pub use cursor::Cursor;
pub use drag::{CommitThreshold, DragOutcome, DragSession};
pub use emitter::CarouselEvent;
pub use error::OptionsError;
pub use key::{Keyed, Slide, SlideKey};
pub use options::{CarouselOptions, OnChangeCallback};
pub use state::CarouselState;
pub use types::{Boundary, ChangeReason, Counter, Layout, NavDirection, PageRange};
