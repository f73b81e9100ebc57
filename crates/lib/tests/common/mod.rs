#![allow(dead_code)]
//! # Common Test Utilities
//!
//! This module provides shared helpers for the integration tests: one-time
//! tracing setup and builders for directory records and filters.

use bhr::{DirectoryFilter, Employee, Filters};
use std::sync::Once;

#[cfg(test)]
static INIT: Once = Once::new();

/// Initializes the tracing subscriber for tests.
#[cfg(test)]
pub fn setup_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt::init();
    });
}

/// Builds a directory record with the fields the org chart logic reads.
pub fn employee(name: &str, department: &str, title: &str, supervisor: &str) -> Employee {
    Employee {
        display_name: name.to_string(),
        department: department.to_string(),
        job_title: title.to_string(),
        supervisor: supervisor.to_string(),
        ..Default::default()
    }
}

/// Compiles the no-op filter that admits every record.
pub fn unfiltered() -> DirectoryFilter {
    Filters::default()
        .compile()
        .expect("empty patterns always compile")
}
