//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the paging, timing and gesture state.
//! This crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A [`Controller`] with debounced resizing and animated slide transitions
//! - Key-based anchoring, so a data refresh keeps the current slide in view
//! - Tween/easing helpers (optional; adapter-driven)
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod tween;

#[cfg(test)]
mod tests;

pub use anchor::{SlideAnchor, apply_anchor, capture_anchor};
pub use controller::{Controller, DEFAULT_TRANSITION_MS};
pub use tween::{Easing, Tween};
