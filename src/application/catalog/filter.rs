use crate::domain::{CategoryNode, Forest};

/// Composable category predicate: a case-insensitive substring match on the
/// name and an exact match on the active flag, AND-composed when both are
/// set. Both unset is the identity predicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryFilter {
    pub name_contains: Option<String>,
    pub is_active: Option<bool>,
}

impl CategoryFilter {
    /// Identity predicate: matches every node.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn name(term: impl Into<String>) -> Self {
        Self {
            name_contains: Some(term.into()),
            is_active: None,
        }
    }

    pub fn active(is_active: bool) -> Self {
        Self {
            name_contains: None,
            is_active: Some(is_active),
        }
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn is_identity(&self) -> bool {
        self.name_contains.is_none() && self.is_active.is_none()
    }

    /// Whether a single node matches this predicate on its own merits.
    pub fn matches(&self, node: &CategoryNode) -> bool {
        let name_ok = match &self.name_contains {
            Some(term) => node
                .name
                .to_lowercase()
                .contains(&term.to_lowercase()),
            None => true,
        };

        let active_ok = match self.is_active {
            Some(wanted) => node.is_active == wanted,
            None => true,
        };

        name_ok && active_ok
    }
}

/// Prunes a forest to nodes that match the predicate or have a matching
/// descendant, preserving ancestor paths. Computed bottom-up; the source
/// forest is never touched, the result shares no mutable state with it.
///
/// A node retained only for a matching descendant is a structural
/// pass-through: its own flags are carried over unchanged.
pub fn filter(forest: &[CategoryNode], predicate: &CategoryFilter) -> Forest {
    forest
        .iter()
        .filter_map(|node| filter_node(node, predicate))
        .collect()
}

fn filter_node(node: &CategoryNode, predicate: &CategoryFilter) -> Option<CategoryNode> {
    // Children first, then the decision for the node itself.
    let children: Vec<CategoryNode> = node
        .children
        .iter()
        .filter_map(|child| filter_node(child, predicate))
        .collect();

    if children.is_empty() && !predicate.matches(node) {
        return None;
    }

    Some(CategoryNode {
        id: node.id,
        name: node.name.clone(),
        parent_id: node.parent_id,
        is_parent_type: node.is_parent_type,
        is_active: node.is_active,
        created_at: node.created_at,
        children,
    })
}
