//! # BambooHR Directory Client
//!
//! This crate provides a client for the BambooHR REST API together with the
//! engine that turns the flat employee directory into a rendered org chart:
//! record filtering, supervisor/report hierarchy reconstruction, and
//! deterministic text rendering.

pub mod client;
pub mod errors;
pub mod filter;
pub mod orgchart;
pub mod render;
pub mod types;

pub use client::Client;
pub use errors::BhrError;
pub use filter::{name_matcher, DirectoryFilter, Filters};
pub use orgchart::{OrgChart, OrgNode};
pub use render::{render_employee, render_org_chart};
pub use types::{Directory, Employee, Field, IndividualEmployee};

use tracing::debug;

/// Builds the org chart for the given records and renders it in one step.
///
/// The department and title patterns follow [`Filters`] semantics: compiled
/// case-insensitively, with an empty department pattern disabling all
/// filtering. An invalid pattern fails here, before any record is touched.
pub fn build_and_render_directory(
    records: &[Employee],
    department_pattern: &str,
    title_pattern: &str,
) -> Result<String, BhrError> {
    let filter = Filters {
        department: department_pattern.to_string(),
        title: title_pattern.to_string(),
    }
    .compile()?;
    let chart = OrgChart::build(records, &filter);
    debug!(
        "Org chart holds {} of {} directory records",
        chart.len(),
        records.len()
    );
    render_org_chart(&chart)
}

/// Finds the first record whose display name matches the query, in directory
/// order.
///
/// The query follows the [`name_matcher`] rules (case-insensitive, spaces
/// widen to `.*`); the empty query matches the first record outright. When
/// several records match, later ones are silently ignored.
pub fn find_by_name<'a>(
    records: &'a [Employee],
    query: &str,
) -> Result<Option<&'a Employee>, BhrError> {
    let matcher = name_matcher(query)?;
    Ok(records
        .iter()
        .find(|employee| matcher.is_match(&employee.display_name)))
}
