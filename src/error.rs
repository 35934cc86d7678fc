use thiserror::Error;

/// Errors produced by the overlap engine.
///
/// Both variants are caller errors: the inputs were malformed, nothing was
/// partially computed, and retrying with the same inputs will fail again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverlapError {
    /// The identifier did not resolve against the IANA timezone database.
    #[error("unrecognized timezone identifier '{0}'")]
    InvalidTimezone(String),

    /// The working-hours window was malformed.
    #[error("invalid work window {start}..{end} (expected 0 <= start < end <= 24)")]
    InvalidWorkWindow { start: u32, end: u32 },
}
