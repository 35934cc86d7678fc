use crate::error::OverlapError;

/// A local working-hours window, half-open `[start, end)` in whole hours.
///
/// The default is 09:00–17:00. Construction validates
/// `0 <= start < end <= 24`; a `WorkWindow` that exists is always
/// well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkWindow {
    start: u32,
    end: u32,
}

impl WorkWindow {
    pub fn new(start: u32, end: u32) -> Result<Self, OverlapError> {
        if start >= end || end > 24 {
            return Err(OverlapError::InvalidWorkWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// First working hour (inclusive).
    pub fn start(self) -> u32 {
        self.start
    }

    /// End of the window (exclusive).
    pub fn end(self) -> u32 {
        self.end
    }

    /// True if `hour` falls inside the window.
    pub fn contains(self, hour: u32) -> bool {
        self.start <= hour && hour < self.end
    }

    /// Re-check the window invariant.
    ///
    /// The constructor already enforces it; the engine still re-validates at
    /// the call boundary so a malformed window can never slip into a result.
    pub(crate) fn check(self) -> Result<(), OverlapError> {
        if self.start >= self.end || self.end > 24 {
            return Err(OverlapError::InvalidWorkWindow { start: self.start, end: self.end });
        }
        Ok(())
    }
}

impl Default for WorkWindow {
    fn default() -> Self {
        Self { start: 9, end: 17 }
    }
}
