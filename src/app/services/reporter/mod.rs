//! Report building and rendering
//!
//! Turns parsed records and their [`CatalogSummary`] into a [`Report`] and
//! renders it as human-readable text or JSON. Numbers use Rust's default
//! formatting with a decimal point; no locale formatting is applied.
//!
//! [`CatalogSummary`]: crate::app::services::aggregator::CatalogSummary

pub mod render;
pub mod report;

pub use render::{ReportFormat, render, render_human, render_json};
pub use report::{ProductLine, Report};
