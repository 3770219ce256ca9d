/// Smallest accepted autoplay period.
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 100;

/// Default autoplay period.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5_000;

/// Reasons the autoplay timer can be suspended. The timer runs only when none is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PauseReasons {
    pub drag: bool,
    pub hover: bool,
    pub host: bool,
}

impl PauseReasons {
    pub fn any(&self) -> bool {
        self.drag || self.hover || self.host
    }

    pub fn contains(&self, reason: PauseReason) -> bool {
        match reason {
            PauseReason::Drag => self.drag,
            PauseReason::Hover => self.hover,
            PauseReason::Host => self.host,
        }
    }

    fn set(&mut self, reason: PauseReason, value: bool) {
        match reason {
            PauseReason::Drag => self.drag = value,
            PauseReason::Hover => self.hover = value,
            PauseReason::Host => self.host = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PauseReason {
    Drag,
    Hover,
    Host,
}

/// A host-clocked repeating timer.
///
/// The timer holds a deadline instead of a platform handle. Adapters either poll it every
/// frame via [`Autoplay::poll`] or arm a real timer for [`Autoplay::next_deadline`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Autoplay {
    enabled: bool,
    interval_ms: u64,
    paused: PauseReasons,
    next_deadline: Option<u64>,
}

impl Autoplay {
    /// A stopped timer with the given period.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            enabled: false,
            interval_ms: interval_ms.max(MIN_AUTOPLAY_INTERVAL_MS),
            paused: PauseReasons::default(),
            next_deadline: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enabled, not paused, and armed.
    pub fn is_running(&self) -> bool {
        self.next_deadline.is_some()
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn paused(&self) -> PauseReasons {
        self.paused
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.next_deadline
    }

    /// Changes the period without touching the current deadline.
    pub fn set_interval(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms.max(MIN_AUTOPLAY_INTERVAL_MS);
    }

    /// Starts (or restarts) the timer with a new period.
    pub fn start(&mut self, interval_ms: u64, now_ms: u64) {
        self.enabled = true;
        self.interval_ms = interval_ms.max(MIN_AUTOPLAY_INTERVAL_MS);
        self.reset(now_ms);
    }

    pub fn stop(&mut self) {
        self.enabled = false;
        self.next_deadline = None;
    }

    pub fn pause(&mut self, reason: PauseReason) {
        self.paused.set(reason, true);
        self.next_deadline = None;
    }

    /// Clears `reason`; when it was the last one, the interval restarts from `now_ms`.
    ///
    /// Resuming a reason that is not set leaves the schedule alone.
    pub fn resume(&mut self, reason: PauseReason, now_ms: u64) {
        if !self.paused.contains(reason) {
            return;
        }
        self.paused.set(reason, false);
        self.reset(now_ms);
    }

    /// Restarts the interval so the next tick is a full period after `now_ms`.
    pub fn reset(&mut self, now_ms: u64) {
        self.next_deadline = if self.enabled && !self.paused.any() {
            Some(now_ms.saturating_add(self.interval_ms))
        } else {
            None
        };
    }

    /// Returns `true` when a deadline has been reached, and schedules the next one.
    ///
    /// At most one tick is reported per call; a host that polls more than one period late
    /// gets a single tick and a deadline a full period after `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(deadline) = self.next_deadline else {
            return false;
        };
        if now_ms < deadline {
            return false;
        }
        let mut next = deadline.saturating_add(self.interval_ms);
        if next <= now_ms {
            next = now_ms.saturating_add(self.interval_ms);
        }
        self.next_deadline = Some(next);
        true
    }
}

impl Default for Autoplay {
    fn default() -> Self {
        Self::new(DEFAULT_AUTOPLAY_INTERVAL_MS)
    }
}
