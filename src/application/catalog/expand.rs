use std::collections::HashSet;

use uuid::Uuid;

use crate::domain::{find_node, CategoryNode};

use super::flatten::FlatRow;

/// Per-node visual expansion state.
///
/// The one piece of deliberately mutable state in the core: explicitly owned,
/// passed a forest and a projection rather than reaching into ambient state,
/// so it is unit-testable without a rendering surface. Fresh state shows only
/// top-level categories (roots visible, everything at depth > 0 hidden).
#[derive(Debug, Default, Clone)]
pub struct ExpandController {
    expanded: HashSet<Uuid>,
}

impl ExpandController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: Uuid) -> bool {
        self.expanded.contains(&id)
    }

    /// Flips the expansion state of `id`.
    ///
    /// Collapsing additionally forces every descendant out of the expanded
    /// set, so a later re-expansion starts from the canonical closed state
    /// instead of remembering a stale open sub-branch. Ids absent from the
    /// forest, and leaves, are ignored: only nodes with children ever enter
    /// the expanded set, so it cannot accumulate stale ids across rebuilds.
    pub fn toggle(&mut self, forest: &[CategoryNode], id: Uuid) {
        if self.expanded.remove(&id) {
            if let Some(node) = find_node(forest, id) {
                for descendant in node.descendant_ids() {
                    self.expanded.remove(&descendant);
                }
            }
        } else if find_node(forest, id).is_some_and(|node| !node.children.is_empty()) {
            self.expanded.insert(id);
        }
    }

    /// Expands every node that has children, in one pass.
    pub fn expand_all(&mut self, forest: &[CategoryNode]) {
        fn collect(nodes: &[CategoryNode], out: &mut HashSet<Uuid>) {
            for node in nodes {
                if !node.children.is_empty() {
                    out.insert(node.id);
                }
                collect(&node.children, out);
            }
        }

        let mut expanded = HashSet::new();
        collect(forest, &mut expanded);
        self.expanded = expanded;
    }

    pub fn collapse_all(&mut self) {
        self.expanded.clear();
    }

    /// Projected rows currently visible: a row shows iff every ancestor on
    /// its path is expanded. Expanding a grandparent therefore does not
    /// auto-reveal grandchildren whose own parent is still collapsed.
    pub fn visible_rows<'r, 'a>(&self, rows: &'r [FlatRow<'a>]) -> Vec<&'r FlatRow<'a>> {
        let mut visible = Vec::new();
        // expanded_path[d] = the row at depth d on the current path is expanded.
        let mut expanded_path: Vec<bool> = Vec::new();

        for row in rows {
            expanded_path.truncate(row.depth);

            if expanded_path.iter().all(|open| *open) {
                visible.push(row);
            }

            expanded_path.push(self.is_expanded(row.node.id));
        }

        visible
    }
}
