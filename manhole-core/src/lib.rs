//! Interaction logic for the manhole defect report form.
//!
//! - `location`: Location Acquirer over a [`location::Positioning`] capability
//! - `photo`: Photo Intake validation and preview encoding
//! - `form`: the [`form::ReportForm`] state record and its submission gate
//! - `report`: the emitted record and submission sinks
//! - `fake`: deterministic capabilities for tests and local development
//!
//! Nothing here touches the browser; the Dioxus crate supplies the real
//! platform adapters.

pub mod browser;
pub mod config;
pub mod coordinate;
pub mod dates;
pub mod error;
pub mod fake;
pub mod form;
pub mod issue;
pub mod location;
pub mod photo;
pub mod report;

pub use coordinate::{Coordinate, Fix};
pub use error::{FormError, LocationError, PhotoError, SubmissionError};
pub use form::{ReportForm, SubmissionState};
pub use issue::IssueCategory;
pub use report::{LogSink, Report, ReportSink};
