mod api;
pub mod catalog;
mod engine;
mod error;
mod window;

pub use api::{
    Context, HourClassification, OverlapResult, ZoneRow, compute_overlap, compute_overlap_today,
};
pub use error::OverlapError;
pub use window::WorkWindow;
