//! Activity report pipeline over the `strava_client` crate: date-window
//! resolution, run/workout classification, derived display fields, console
//! Markdown and the persisted aggregate JSON.

pub mod error;
pub mod format;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod window;

pub use error::{ReportError, ReportResult};
pub use pipeline::{RunOutcome, run_report};
pub use window::ReportWindow;
