use serde::Serialize;

use crate::domain::CategoryNode;

/// Summary counters over the unfiltered forest. Recomputed after every
/// rebuild and never from a filtered view, so displayed totals stay stable
/// while a user is searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub total: usize,
    pub active: usize,
    pub parent_type: usize,
}

impl CategoryStats {
    pub fn from_forest(forest: &[CategoryNode]) -> Self {
        let mut stats = Self::default();
        count(forest, &mut stats);
        stats
    }

    pub fn inactive(&self) -> usize {
        self.total - self.active
    }

    pub fn child_type(&self) -> usize {
        self.total - self.parent_type
    }
}

fn count(nodes: &[CategoryNode], stats: &mut CategoryStats) {
    for node in nodes {
        stats.total += 1;
        if node.is_active {
            stats.active += 1;
        }
        if node.is_parent_type {
            stats.parent_type += 1;
        }
        count(&node.children, stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn node(is_parent_type: bool, is_active: bool, children: Vec<CategoryNode>) -> CategoryNode {
        CategoryNode {
            id: Uuid::new_v4(),
            name: "Category".to_string(),
            parent_id: None,
            is_parent_type,
            is_active,
            created_at: None,
            children,
        }
    }

    #[test]
    fn counts_cover_the_whole_forest() {
        let forest = vec![
            node(
                true,
                true,
                vec![node(false, true, vec![]), node(true, false, vec![node(false, false, vec![])])],
            ),
            node(false, true, vec![]),
        ];

        let stats = CategoryStats::from_forest(&forest);

        assert_eq!(stats.total, 5);
        assert_eq!(stats.active, 3);
        assert_eq!(stats.parent_type, 2);
    }

    #[test]
    fn derived_counters_balance_totals() {
        let forest = vec![node(
            true,
            true,
            vec![node(false, false, vec![]), node(true, true, vec![])],
        )];

        let stats = CategoryStats::from_forest(&forest);

        assert_eq!(stats.total, stats.active + stats.inactive());
        assert_eq!(stats.total, stats.parent_type + stats.child_type());
    }

    #[test]
    fn empty_forest_yields_zeroes() {
        let stats = CategoryStats::from_forest(&[]);
        assert_eq!(stats, CategoryStats::default());
        assert_eq!(stats.inactive(), 0);
        assert_eq!(stats.child_type(), 0);
    }
}
