/// Minimum drag distance that counts as an intentional swipe.
///
/// There is no universally right value: a 50px threshold is generous on a phone-width card and
/// tiny on a full-bleed hero banner, so every carousel states its own.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommitThreshold {
    /// A fixed distance in logical pixels.
    Pixels(f32),
    /// A fraction of the container width (`0.25` = a quarter of the viewport).
    Fraction(f32),
}

impl CommitThreshold {
    /// The threshold in pixels for a container of `container_width` pixels.
    pub fn resolve(&self, container_width: u32) -> f32 {
        match *self {
            Self::Pixels(px) => px,
            Self::Fraction(f) => f * container_width as f32,
        }
    }

    pub fn is_valid(&self) -> bool {
        let v = match *self {
            Self::Pixels(v) | Self::Fraction(v) => v,
        };
        v.is_finite() && v >= 0.0
    }

    pub(crate) fn sanitized(self) -> Self {
        if self.is_valid() {
            self
        } else {
            Self::Pixels(0.0)
        }
    }
}

/// What a finished drag does to the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragOutcome {
    Discard,
    Next,
    Previous,
}

impl DragOutcome {
    /// Dragging right (`delta > 0`) reveals the previous page, dragging left the next one.
    pub fn decide(delta: f32, threshold: f32) -> Self {
        if !delta.is_finite() || delta.abs() < threshold {
            return Self::Discard;
        }
        if delta > 0.0 {
            Self::Previous
        } else if delta < 0.0 {
            Self::Next
        } else {
            Self::Discard
        }
    }
}

/// Pointer state between a drag start and its end.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragSession {
    pub origin_x: f32,
    pub current_x: f32,
}

impl DragSession {
    pub fn new(origin_x: f32) -> Self {
        Self {
            origin_x,
            current_x: origin_x,
        }
    }

    pub fn update(&mut self, current_x: f32) {
        self.current_x = current_x;
    }

    pub fn delta(&self) -> f32 {
        self.current_x - self.origin_x
    }
}
