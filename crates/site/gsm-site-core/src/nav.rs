//! Navigation bar "scrolled" state.

/// Class the navigation bar carries once the page is scrolled past the threshold.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Strictly greater than: an offset equal to the threshold is still "at the top".
#[inline]
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Result of feeding one scroll event to [`ScrollState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavUpdate {
    pub scrolled: bool,
    /// False when the event left the bar in the state it was already in.
    pub changed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollState {
    threshold: f64,
    offset: f64,
    scrolled: bool,
}

impl ScrollState {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            offset: 0.0,
            scrolled: false,
        }
    }

    pub fn update(&mut self, offset: f64) -> NavUpdate {
        let scrolled = is_scrolled(offset, self.threshold);
        let changed = scrolled != self.scrolled;
        self.offset = offset;
        self.scrolled = scrolled;
        NavUpdate { scrolled, changed }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}
