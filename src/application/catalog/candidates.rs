use std::collections::HashSet;

use uuid::Uuid;

use crate::domain::{find_node, CategoryNode};

/// One legal parent choice for a node being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentCandidate {
    pub id: Uuid,
    pub name: String,
    /// The node's current parent, injected even though it is no longer
    /// eligible on its own (e.g. it lost its parent-type flag), so the
    /// existing relationship stays visible and re-selectable.
    pub current_ineligible: bool,
}

/// Computes the ordered set of nodes eligible as the new parent of `editing`
/// (`None` for node creation), guaranteeing acyclicity.
///
/// Only the node itself and its strict descendants are forbidden; ancestors
/// remain selectable, which is what allows "move up the tree" edits.
/// Activation state never affects candidacy. This never errors: a missing
/// current parent simply degrades to no injection.
pub fn parent_candidates(forest: &[CategoryNode], editing: Option<Uuid>) -> Vec<ParentCandidate> {
    let mut forbidden: HashSet<Uuid> = HashSet::new();
    let mut current_parent: Option<Uuid> = None;

    if let Some(editing_id) = editing {
        forbidden.insert(editing_id);
        if let Some(edited) = find_node(forest, editing_id) {
            // Descendant membership is computed by walking down from the
            // edited node, never by chasing parent links upward.
            forbidden.extend(edited.descendant_ids());
            current_parent = edited.parent_id;
        }
    }

    let mut candidates = Vec::new();
    collect_eligible(forest, &forbidden, &mut candidates);

    if let Some(parent_id) = current_parent {
        let already_present = candidates.iter().any(|c| c.id == parent_id);
        if !already_present {
            if let Some(parent) = find_node(forest, parent_id) {
                candidates.push(ParentCandidate {
                    id: parent.id,
                    name: parent.name.clone(),
                    current_ineligible: true,
                });
            }
            // Parent id not present in the forest at all: degrade silently,
            // an empty or partial candidate list is a representable state.
        }
    }

    candidates
}

fn collect_eligible(
    nodes: &[CategoryNode],
    forbidden: &HashSet<Uuid>,
    out: &mut Vec<ParentCandidate>,
) {
    for node in nodes {
        if node.is_parent_type && !forbidden.contains(&node.id) {
            out.push(ParentCandidate {
                id: node.id,
                name: node.name.clone(),
                current_ineligible: false,
            });
        }
        collect_eligible(&node.children, forbidden, out);
    }
}
