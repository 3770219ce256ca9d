use crate::CommitThreshold;

/// A misconfiguration detected by [`crate::CarouselOptions::validate`].
///
/// Navigation itself never fails; only configuration is checked, so a bad value is caught when
/// the carousel is built instead of surfacing as a runaway timer or a division by zero.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum OptionsError {
    #[error("autoplay interval {interval_ms}ms is below the {min_ms}ms minimum")]
    AutoplayIntervalTooShort { interval_ms: u64, min_ms: u64 },

    #[error("items_per_view must be at least 1 (breakpoint min_width={min_width:?})")]
    ZeroItemsPerView { min_width: Option<u32> },

    #[error("advance_step must be at least 1 (breakpoint min_width={min_width:?})")]
    ZeroAdvanceStep { min_width: Option<u32> },

    #[error("commit threshold {threshold:?} must be finite and non-negative")]
    InvalidCommitThreshold { threshold: CommitThreshold },
}
