//! The overlap engine.
//!
//! Computing a result is a short, fully synchronous pipeline:
//!
//! ```text
//! identifiers ── resolve_zone ──┐        (convert.rs)
//!                               │
//!                               v
//!                 classify_row(zone_a, zone_b)   (classify.rs)
//!                 classify_row(zone_b, zone_a)
//!                               │
//!                               v
//!                         OverlapResult
//! ```
//!
//! The two rows are computed as two *independent* passes, one per zone. This
//! is deliberate: timezone offsets are not guaranteed to be a whole number of
//! hours (Kolkata, Chatham, …) and are not symmetric across DST boundaries,
//! so the reverse mapping is always re-derived by an explicit conversion
//! rather than inverted arithmetically.
//!
//! ## Responsibilities by module
//!
//! - `convert.rs`: identifier resolution against chrono-tz, and the
//!   single-hour local-time → instant → other-zone conversion (with the
//!   floor-to-civil-hour truncation for sub-hour offset zones).
//! - `classify.rs`: the 24-slot per-zone classification pass.
//!
//! The public entry points wrapping these live in `src/api.rs`.

#[path = "engine/classify.rs"]
mod classify;
#[path = "engine/convert.rs"]
mod convert;

pub use classify::classify_row;
pub use convert::resolve_zone;
