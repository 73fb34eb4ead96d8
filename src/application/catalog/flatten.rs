use crate::domain::CategoryNode;

/// One row of the pre-order projection of a forest.
///
/// `ancestor_prefix[i]` records whether the ancestor at depth `i` was a last
/// sibling, which is what a renderer needs to choose continuation vs.
/// terminal tree connectors. Purely presentational.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRow<'a> {
    pub node: &'a CategoryNode,
    pub depth: usize,
    pub is_last_sibling: bool,
    pub ancestor_prefix: Vec<bool>,
}

/// Depth-first linearization of a forest, children in stored order.
///
/// This projection is the single source of truth for row order; visibility
/// toggling operates on index ranges within it.
pub fn flatten(forest: &[CategoryNode]) -> Vec<FlatRow<'_>> {
    let mut rows = Vec::new();
    visit_level(forest, 0, &[], &mut rows);
    rows
}

fn visit_level<'a>(
    siblings: &'a [CategoryNode],
    depth: usize,
    prefix: &[bool],
    rows: &mut Vec<FlatRow<'a>>,
) {
    let last_index = siblings.len().saturating_sub(1);

    for (index, node) in siblings.iter().enumerate() {
        let is_last_sibling = index == last_index;

        rows.push(FlatRow {
            node,
            depth,
            is_last_sibling,
            ancestor_prefix: prefix.to_vec(),
        });

        if !node.children.is_empty() {
            let mut child_prefix = prefix.to_vec();
            child_prefix.push(is_last_sibling);
            visit_level(&node.children, depth + 1, &child_prefix, rows);
        }
    }
}
