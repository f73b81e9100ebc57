//! Renders an org chart for a small, fixed directory. Pass a department
//! pattern (and optionally a title pattern) to see the filters at work:
//!
//! ```sh
//! cargo run -p bhr --example orgchart -- engineering
//! ```

use bhr::{build_and_render_directory, Employee};
use std::env;

fn record(name: &str, department: &str, title: &str, supervisor: &str) -> Employee {
    Employee {
        display_name: name.to_string(),
        department: department.to_string(),
        job_title: title.to_string(),
        supervisor: supervisor.to_string(),
        ..Default::default()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // --- Command-line argument parsing ---
    let args: Vec<String> = env::args().collect();
    let department = args.get(1).cloned().unwrap_or_default();
    let title = args.get(2).cloned().unwrap_or_default();

    let records = vec![
        record("Grace Chen", "Executive", "CEO", ""),
        record("Ann Lee", "Engineering", "VP Engineering", "Grace Chen"),
        record("Bob Park", "Engineering", "Software Engineer", "Ann Lee"),
        record("Eve Sato", "Engineering", "Software Engineer", "Ann Lee"),
        record("Dan Ross", "Sales", "Account Executive", "Grace Chen"),
    ];

    let chart = build_and_render_directory(&records, &department, &title)?;
    println!("{chart}");

    Ok(())
}
