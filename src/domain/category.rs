use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A validated category as held by the client after a successful tree build.
///
/// `children` carries the server-provided display order; the client never
/// reorders siblings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
    pub is_parent_type: bool,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub children: Vec<CategoryNode>,
}

/// Ordered sequence of root categories (`parent_id = None`).
pub type Forest = Vec<CategoryNode>;

impl CategoryNode {
    /// Pre-order id walk of this node's strict descendants.
    pub fn descendant_ids(&self) -> Vec<Uuid> {
        fn walk(node: &CategoryNode, out: &mut Vec<Uuid>) {
            for child in &node.children {
                out.push(child.id);
                walk(child, out);
            }
        }

        let mut ids = Vec::new();
        walk(self, &mut ids);
        ids
    }
}

/// Locate a node anywhere in the forest by id.
pub fn find_node(forest: &[CategoryNode], id: Uuid) -> Option<&CategoryNode> {
    for node in forest {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, parent_id: Option<Uuid>) -> CategoryNode {
        CategoryNode {
            id: Uuid::new_v4(),
            name: name.to_string(),
            parent_id,
            is_parent_type: false,
            is_active: true,
            created_at: Some(Utc::now()),
            children: Vec::new(),
        }
    }

    #[test]
    fn category_serialization_roundtrip_with_children() {
        let parent_id = Uuid::new_v4();
        let original = CategoryNode {
            id: parent_id,
            name: "Audio".to_string(),
            parent_id: None,
            is_parent_type: true,
            is_active: true,
            created_at: Some(Utc::now()),
            children: vec![leaf("Microphones", Some(parent_id))],
        };

        let serialized = serde_json::to_string(&original).unwrap();
        let deserialized: CategoryNode = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, original);
        assert_eq!(deserialized.children[0].parent_id, Some(parent_id));
    }

    #[test]
    fn category_deserialization_defaults_children_to_empty() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Lighting",
            "parent_id": null,
            "is_parent_type": true,
            "is_active": false,
            "created_at": "2024-01-01T00:00:00Z"
        }"#;

        let node: CategoryNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.name, "Lighting");
        assert!(node.children.is_empty());
        assert!(!node.is_active);
    }

    #[test]
    fn descendant_ids_walks_strict_descendants_only() {
        let root_id = Uuid::new_v4();
        let child = leaf("Cables", Some(root_id));
        let child_id = child.id;
        let root = CategoryNode {
            id: root_id,
            name: "Accessories".to_string(),
            parent_id: None,
            is_parent_type: true,
            is_active: true,
            created_at: None,
            children: vec![child],
        };

        let ids = root.descendant_ids();
        assert_eq!(ids, vec![child_id]);
        assert!(!ids.contains(&root_id));
    }

    #[test]
    fn find_node_reaches_nested_nodes() {
        let grandchild = leaf("Lavalier", None);
        let grandchild_id = grandchild.id;
        let mut child = leaf("Microphones", None);
        child.children.push(grandchild);
        let root = CategoryNode {
            id: Uuid::new_v4(),
            name: "Audio".to_string(),
            parent_id: None,
            is_parent_type: true,
            is_active: true,
            created_at: None,
            children: vec![child],
        };

        let forest = vec![root];
        assert_eq!(
            find_node(&forest, grandchild_id).map(|n| n.name.as_str()),
            Some("Lavalier")
        );
        assert!(find_node(&forest, Uuid::new_v4()).is_none());
    }
}
