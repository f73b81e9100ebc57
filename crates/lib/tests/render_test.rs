//! # Rendering Tests
//!
//! Golden-output tests for the org chart tree and the single-employee
//! detail block.

mod common;

use bhr::{render_employee, render_org_chart, BhrError, IndividualEmployee, OrgChart};
use common::{employee, setup_tracing, unfiltered};

#[test]
fn test_render_groups_reports_under_a_single_department_header() {
    // --- 1. Arrange ---
    setup_tracing();
    let records = vec![
        employee("A", "Engineering", "SWE", ""),
        employee("B", "Engineering", "SWE", "A"),
    ];
    let chart = OrgChart::build(&records, &unfiltered());

    // --- 2. Act ---
    let output = render_org_chart(&chart).unwrap();

    // --- 3. Assert ---
    assert_eq!(output, "\n[ Engineering ]\nA (SWE)\n  B (SWE)\n");
}

#[test]
fn test_department_header_is_threaded_across_subtrees() {
    // --- 1. Arrange ---
    // The running department follows traversal order, so a change deep in
    // one subtree forces a fresh header for the next root.
    setup_tracing();
    let records = vec![
        employee("A", "Engineering", "SWE", ""),
        employee("B", "Sales", "Rep", "A"),
        employee("C", "Engineering", "Boss", ""),
    ];
    let chart = OrgChart::build(&records, &unfiltered());

    // --- 2. Act ---
    let output = render_org_chart(&chart).unwrap();

    // --- 3. Assert ---
    assert_eq!(
        output,
        "\n[ Engineering ]\nA (SWE)\n\n  [ Sales ]\n  B (Rep)\n\n[ Engineering ]\nC (Boss)\n"
    );
}

#[test]
fn test_consecutive_same_department_nodes_share_one_header() {
    // --- 1. Arrange ---
    setup_tracing();
    let records = vec![
        employee("A", "Engineering", "SWE", ""),
        employee("B", "Engineering", "SWE", "A"),
        employee("C", "Engineering", "Manager", ""),
    ];
    let chart = OrgChart::build(&records, &unfiltered());

    // --- 2. Act ---
    let output = render_org_chart(&chart).unwrap();

    // --- 3. Assert ---
    // C follows B in traversal order and shares its department, so no
    // second header is emitted even though they sit in different subtrees.
    assert_eq!(output, "\n[ Engineering ]\nA (SWE)\n  B (SWE)\nC (Manager)\n");
}

#[test]
fn test_indentation_follows_hierarchy_depth() {
    // --- 1. Arrange ---
    setup_tracing();
    let records = vec![
        employee("A", "Engineering", "CTO", ""),
        employee("B", "Engineering", "VP", "A"),
        employee("C", "Engineering", "SWE", "B"),
    ];
    let chart = OrgChart::build(&records, &unfiltered());

    // --- 2. Act ---
    let output = render_org_chart(&chart).unwrap();

    // --- 3. Assert ---
    assert_eq!(output, "\n[ Engineering ]\nA (CTO)\n  B (VP)\n    C (SWE)\n");
}

#[test]
fn test_rendering_is_idempotent() {
    // --- 1. Arrange ---
    setup_tracing();
    let records = vec![
        employee("A", "Engineering", "SWE", ""),
        employee("B", "Sales", "Rep", "A"),
    ];
    let chart = OrgChart::build(&records, &unfiltered());

    // --- 2. Act ---
    let first = render_org_chart(&chart).unwrap();
    let second = render_org_chart(&chart).unwrap();

    // --- 3. Assert ---
    assert_eq!(first, second);
}

#[test]
fn test_empty_chart_renders_to_an_empty_string() {
    // --- 1. Arrange ---
    setup_tracing();
    let chart = OrgChart::build(&[], &unfiltered());

    // --- 2. Act ---
    let output = render_org_chart(&chart).unwrap();

    // --- 3. Assert ---
    assert_eq!(output, "");
}

#[test]
fn test_supervisor_cycle_is_reported_not_looped() {
    // --- 1. Arrange ---
    // A and B supervise each other, so neither is reachable from a root.
    setup_tracing();
    let records = vec![
        employee("R", "Engineering", "CTO", ""),
        employee("A", "Engineering", "SWE", "B"),
        employee("B", "Engineering", "SWE", "A"),
    ];
    let chart = OrgChart::build(&records, &unfiltered());

    // --- 2. Act ---
    let result = render_org_chart(&chart);

    // --- 3. Assert ---
    match result {
        Err(BhrError::SupervisorCycle(names)) => {
            assert_eq!(names, vec!["A".to_string(), "B".to_string()]);
        }
        other => panic!("Expected SupervisorCycle, but got {other:?}"),
    }
}

#[test]
fn test_self_supervision_is_reported_as_a_cycle() {
    // --- 1. Arrange ---
    setup_tracing();
    let records = vec![employee("A", "Engineering", "SWE", "A")];
    let chart = OrgChart::build(&records, &unfiltered());

    // --- 2. Act ---
    let result = render_org_chart(&chart);

    // --- 3. Assert ---
    assert!(matches!(result, Err(BhrError::SupervisorCycle(_))));
}

#[test]
fn test_employee_block_aligns_labels_and_appends_title() {
    // --- 1. Arrange ---
    setup_tracing();
    let record = IndividualEmployee {
        id: "123".to_string(),
        display_name: "Ann Lee".to_string(),
        job_title: "Engineer".to_string(),
        work_email: "ann@example.com".to_string(),
        department: "Engineering".to_string(),
        ..Default::default()
    };

    // --- 2. Act ---
    let output = render_employee(&record);

    // --- 3. Assert ---
    let expected = "ID:            123\n\
                    Name:          Ann Lee (Engineer)\n\
                    Email:         ann@example.com\n\
                    Department:    Engineering\n";
    assert_eq!(output, expected);
}

#[test]
fn test_employee_block_omits_empty_fields() {
    // --- 1. Arrange ---
    setup_tracing();
    let record = IndividualEmployee {
        id: "7".to_string(),
        display_name: "Bob Park".to_string(),
        ..Default::default()
    };

    // --- 2. Act ---
    let output = render_employee(&record);

    // --- 3. Assert ---
    // No job title, so no parenthesized suffix on the name line either.
    assert_eq!(output, "ID:            7\nName:          Bob Park\n");
}

#[test]
fn test_employee_block_field_order_is_fixed() {
    // --- 1. Arrange ---
    setup_tracing();
    let record = IndividualEmployee {
        id: "9".to_string(),
        display_name: "Dan Ross".to_string(),
        work_phone: "+49 30 1234".to_string(),
        supervisor: "Grace Chen".to_string(),
        hire_date: "2021-03-01".to_string(),
        location: "Berlin".to_string(),
        ..Default::default()
    };

    // --- 2. Act ---
    let output = render_employee(&record);

    // --- 3. Assert ---
    let expected = "ID:            9\n\
                    Name:          Dan Ross\n\
                    Phone:         +49 30 1234\n\
                    Supervisor:    Grace Chen\n\
                    Hire date:     2021-03-01\n\
                    Location:      Berlin\n";
    assert_eq!(output, expected);
}
