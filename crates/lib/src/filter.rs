//! # Record Filtering
//!
//! This module provides the predicates that narrow the directory listing:
//! department/title filters for the org chart and the wildcard name matcher
//! used by single-employee lookups. All patterns compile up front so that a
//! malformed pattern is reported before any API call is made.

use crate::{errors::BhrError, types::Employee};
use regex::{Regex, RegexBuilder};

/// Raw department and title patterns as supplied on the command line.
#[derive(Clone, Debug, Default)]
pub struct Filters {
    pub department: String,
    pub title: String,
}

impl Filters {
    /// Compiles both patterns case-insensitively into a [`DirectoryFilter`].
    ///
    /// Both patterns are validated here even though an empty department
    /// pattern later disables title filtering, so a malformed title pattern
    /// still fails fast.
    pub fn compile(&self) -> Result<DirectoryFilter, BhrError> {
        let department = if self.department.is_empty() {
            None
        } else {
            Some(case_insensitive(&self.department)?)
        };
        let title = case_insensitive(&self.title)?;
        Ok(DirectoryFilter { department, title })
    }
}

/// A compiled predicate over directory records.
///
/// An empty department pattern disables all filtering: the title pattern is
/// only consulted when a department pattern is present.
#[derive(Clone, Debug)]
pub struct DirectoryFilter {
    department: Option<Regex>,
    title: Regex,
}

impl DirectoryFilter {
    /// Returns true if the record passes the active filters.
    pub fn matches(&self, employee: &Employee) -> bool {
        match &self.department {
            None => true,
            Some(department) => {
                department.is_match(&employee.department)
                    && self.title.is_match(&employee.job_title)
            }
        }
    }
}

/// Compiles a display-name query into a case-insensitive regex, widening each
/// space to `.*` so that `"ann lee"` matches `"Ann Marie Lee"`. The empty
/// query matches every name.
pub fn name_matcher(query: &str) -> Result<Regex, BhrError> {
    case_insensitive(&query.replace(' ', ".*"))
}

fn case_insensitive(pattern: &str) -> Result<Regex, BhrError> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}
