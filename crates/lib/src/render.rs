//! # Text Rendering
//!
//! Renders the reconstructed org chart as an indented, department-grouped
//! tree, and a single employee as a labeled detail block. Output is
//! accumulated into one `String` and returned; nothing here prints.

use crate::{errors::BhrError, orgchart::OrgChart, types::IndividualEmployee};

/// Indentation added per hierarchy level.
const INDENT: &str = "  ";

/// Width of the label column in the single-employee block.
const LABEL_WIDTH: usize = 15;

/// Mutable state threaded through the org-chart traversal.
///
/// `current_department` is a single running value carried across the whole
/// traversal, so a department change deep inside one subtree is visible to
/// the next sibling subtree. `visited` records which arena slots have been
/// emitted.
struct RenderState {
    out: String,
    current_department: String,
    visited: Vec<bool>,
}

/// Renders the org chart as an indented tree, one employee per line, grouped
/// under bracketed department headers.
///
/// Traversal is depth-first and pre-order: roots in directory order, then
/// each node's reports in directory order, indented one level deeper. A
/// department header is emitted whenever a node's department differs from the
/// previously rendered node's, at the node's own indent level; consecutive
/// same-department nodes never repeat the header, even across subtrees.
///
/// Nodes whose supervisor chain loops back on itself are unreachable from
/// any root; rather than dropping them silently, rendering fails with
/// [`BhrError::SupervisorCycle`] naming them.
pub fn render_org_chart(chart: &OrgChart) -> Result<String, BhrError> {
    let mut state = RenderState {
        out: String::new(),
        current_department: String::new(),
        visited: vec![false; chart.len()],
    };

    for root in chart.roots() {
        render_node(chart, root, 0, &mut state);
    }

    let unreached: Vec<String> = state
        .visited
        .iter()
        .enumerate()
        .filter(|(_, visited)| !**visited)
        .map(|(index, _)| chart.node(index).employee.display_name.clone())
        .collect();
    if !unreached.is_empty() {
        return Err(BhrError::SupervisorCycle(unreached));
    }

    Ok(state.out)
}

fn render_node(chart: &OrgChart, index: usize, level: usize, state: &mut RenderState) {
    if state.visited[index] {
        return;
    }
    state.visited[index] = true;

    let employee = &chart.node(index).employee;
    render_department(level, &employee.department, state);
    push_indent(&mut state.out, level);
    state
        .out
        .push_str(&format!("{} ({})\n", employee.display_name, employee.job_title));

    for &child in &chart.node(index).children {
        render_node(chart, child, level + 1, state);
    }
}

/// Emits a blank line and an indented `[ department ]` header when the
/// department changes relative to the previously rendered node, and updates
/// the running department.
fn render_department(level: usize, department: &str, state: &mut RenderState) {
    if department != state.current_department {
        state.out.push('\n');
        push_indent(&mut state.out, level);
        state.out.push_str(&format!("[ {department} ]\n"));
        state.current_department = department.to_string();
    }
}

fn push_indent(out: &mut String, level: usize) {
    out.push_str(&INDENT.repeat(level));
}

/// Renders the labeled detail block for one employee.
///
/// The field set and order are fixed; empty fields are omitted entirely.
/// Labels are left-justified in a fixed-width column, so values line up.
pub fn render_employee(employee: &IndividualEmployee) -> String {
    let mut out = String::new();

    push_field(&mut out, "ID:", &employee.id);
    if !employee.display_name.is_empty() {
        out.push_str(&format!(
            "{:<width$}{}",
            "Name:",
            employee.display_name,
            width = LABEL_WIDTH
        ));
        if !employee.job_title.is_empty() {
            out.push_str(&format!(" ({})", employee.job_title));
        }
        out.push('\n');
    }
    push_field(&mut out, "Email:", &employee.work_email);
    push_field(&mut out, "Phone:", &employee.work_phone);
    push_field(&mut out, "Department:", &employee.department);
    push_field(&mut out, "Supervisor:", &employee.supervisor);
    push_field(&mut out, "Hire date:", &employee.hire_date);
    push_field(&mut out, "Location:", &employee.location);

    out
}

fn push_field(out: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        out.push_str(&format!("{label:<width$}{value}\n", width = LABEL_WIDTH));
    }
}
