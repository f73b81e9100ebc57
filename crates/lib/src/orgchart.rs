//! # Org Chart Reconstruction
//!
//! The BambooHR directory is a flat list; the only hierarchy information is
//! each record's free-text `supervisor` reference. This module rebuilds the
//! supervisor/report forest from that list. Nodes live in a flat arena and
//! refer to each other by index.

use crate::{filter::DirectoryFilter, types::Employee};
use std::collections::HashMap;

/// One employee in the reconstructed hierarchy.
///
/// `parent` and `children` are indices into the owning [`OrgChart`] arena.
/// `parent` is assigned at most once during the build and never changes
/// afterwards; `children` keeps the order in which reports appeared in the
/// directory.
#[derive(Clone, Debug)]
pub struct OrgNode {
    pub employee: Employee,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
}

/// The supervisor/report forest over the filtered directory, plus a
/// display-name index into it. Rebuilt per query, never persisted.
#[derive(Clone, Debug)]
pub struct OrgChart {
    nodes: Vec<OrgNode>,
    index: HashMap<String, usize>,
}

impl OrgChart {
    /// Rebuilds the forest from a flat record list in two passes.
    ///
    /// Pass 1 admits every record the filter accepts into the arena, in
    /// input order, and indexes it by display name. If two admitted records
    /// share a display name, the later one silently overwrites the earlier
    /// index entry. Last write wins, a known sharp edge of the name-keyed
    /// directory.
    ///
    /// Pass 2 resolves each node's supervisor reference against that index
    /// and links supervisor to report. A node whose supervisor is empty,
    /// unknown, or filtered out keeps no parent and becomes a root; the CEO
    /// is the normal case of this, so an unresolved supervisor is never
    /// reported as an error.
    pub fn build(records: &[Employee], filter: &DirectoryFilter) -> Self {
        let mut nodes: Vec<OrgNode> = Vec::new();
        let mut index = HashMap::new();

        for record in records.iter().filter(|record| filter.matches(record)) {
            index.insert(record.display_name.clone(), nodes.len());
            nodes.push(OrgNode {
                employee: record.clone(),
                parent: None,
                children: Vec::new(),
            });
        }

        for child in 0..nodes.len() {
            if nodes[child].employee.supervisor.is_empty() {
                continue;
            }
            let supervisor = index.get(nodes[child].employee.supervisor.as_str()).copied();
            if let Some(supervisor) = supervisor {
                nodes[supervisor].children.push(child);
                nodes[child].parent = Some(supervisor);
            }
        }

        Self { nodes, index }
    }

    /// Number of records admitted by the filter.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes, in original directory order.
    pub fn nodes(&self) -> &[OrgNode] {
        &self.nodes
    }

    /// The node at an arena index.
    pub fn node(&self, index: usize) -> &OrgNode {
        &self.nodes[index]
    }

    /// Arena index for a display name, if that name was admitted.
    pub fn index_of(&self, display_name: &str) -> Option<usize> {
        self.index.get(display_name).copied()
    }

    /// Indices of the root nodes (no resolved supervisor), in original
    /// directory order. Roots are recomputed on each call rather than stored.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(index, _)| index)
    }

    /// Size of the subtree rooted at `index`: the employee plus every direct
    /// and indirect report. The visited set guards against malformed
    /// supervisor cycles in the input.
    pub fn subtree_size(&self, index: usize) -> usize {
        let mut visited = vec![false; self.nodes.len()];
        let mut stack = vec![index];
        let mut count = 0;
        while let Some(current) = stack.pop() {
            if visited[current] {
                continue;
            }
            visited[current] = true;
            count += 1;
            stack.extend(&self.nodes[current].children);
        }
        count
    }
}
