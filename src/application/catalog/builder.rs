use std::collections::HashSet;

use tracing::warn;
use uuid::Uuid;

use crate::domain::{CategoryNode, Forest};
use crate::error::{AppError, AppResult, PayloadIssue};
use crate::infrastructure::catalog_api::CategoryPayload;

/// Turns a fetched nested payload into a validated forest.
///
/// Fails when any node is missing `id` or `name`, when an id appears twice,
/// or when a declared `parent_id` contradicts the node's position in the
/// nesting (orphan reference). All problems are collected in one pass and
/// reported together; nothing is silently re-rooted.
pub fn build(payload: &[CategoryPayload]) -> AppResult<Forest> {
    let mut seen_ids = HashSet::new();
    let mut issues = Vec::new();

    let forest = build_level(payload, None, "", &mut seen_ids, &mut issues);

    if !issues.is_empty() {
        for issue in &issues {
            warn!(
                path = %issue.path,
                detail = %issue.detail,
                "dropping malformed category payload node"
            );
        }
        return Err(AppError::malformed_payload(
            "category payload failed validation",
            issues,
        ));
    }

    Ok(forest)
}

/// Validates a single payload subtree outside of forest context (detail
/// reads). The root keeps its declared `parent_id`; nested entries must
/// still reference their enclosing node.
pub fn build_detached(entry: &CategoryPayload) -> AppResult<CategoryNode> {
    let mut seen_ids = HashSet::new();
    let mut issues = Vec::new();

    let mut nodes = build_level(
        std::slice::from_ref(entry),
        entry.parent_id,
        "",
        &mut seen_ids,
        &mut issues,
    );

    if !issues.is_empty() {
        return Err(AppError::malformed_payload(
            "category payload failed validation",
            issues,
        ));
    }

    // build_level only drops entries when it records an issue.
    nodes
        .pop()
        .ok_or_else(|| AppError::malformed_payload("category payload was empty", Vec::new()))
}

/// Validates the flat, unnested category list used for container-candidate
/// contexts. Entries keep their declared `parent_id`; no structural checks
/// beyond id/name presence and id uniqueness apply.
pub fn build_flat(entries: &[CategoryPayload]) -> AppResult<Vec<CategoryNode>> {
    let mut seen_ids = HashSet::new();
    let mut issues = Vec::new();
    let mut nodes = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let path = format!("[{index}]");

        let (Some(id), Some(name)) = (entry.id, entry.name.clone()) else {
            issues.push(PayloadIssue {
                id: entry.id,
                path,
                detail: if entry.id.is_none() {
                    "missing id".to_string()
                } else {
                    "missing name".to_string()
                },
            });
            continue;
        };

        if !seen_ids.insert(id) {
            issues.push(PayloadIssue {
                id: Some(id),
                path,
                detail: "duplicate id".to_string(),
            });
            continue;
        }

        nodes.push(CategoryNode {
            id,
            name,
            parent_id: entry.parent_id,
            is_parent_type: entry.is_parent_type,
            is_active: entry.is_active,
            created_at: entry.created_at,
            children: Vec::new(),
        });
    }

    if !issues.is_empty() {
        return Err(AppError::malformed_payload(
            "category list failed validation",
            issues,
        ));
    }

    Ok(nodes)
}

fn build_level(
    entries: &[CategoryPayload],
    enclosing: Option<Uuid>,
    path_prefix: &str,
    seen_ids: &mut HashSet<Uuid>,
    issues: &mut Vec<PayloadIssue>,
) -> Vec<CategoryNode> {
    let mut nodes = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let path = format!("{path_prefix}[{index}]");

        let Some(id) = entry.id else {
            issues.push(PayloadIssue {
                id: None,
                path,
                detail: "missing id".to_string(),
            });
            continue;
        };

        let Some(name) = entry.name.clone() else {
            issues.push(PayloadIssue {
                id: Some(id),
                path,
                detail: "missing name".to_string(),
            });
            continue;
        };

        if !seen_ids.insert(id) {
            issues.push(PayloadIssue {
                id: Some(id),
                path,
                detail: "duplicate id".to_string(),
            });
            continue;
        }

        // A nested entry must name its enclosing node as parent; a top-level
        // entry must be a root. Anything else is an orphan reference.
        if entry.parent_id != enclosing {
            issues.push(PayloadIssue {
                id: Some(id),
                path,
                detail: match enclosing {
                    Some(parent) => format!(
                        "declared parent {:?} does not match enclosing node {parent}",
                        entry.parent_id
                    ),
                    None => format!(
                        "top-level node declares parent {:?}",
                        entry.parent_id
                    ),
                },
            });
            continue;
        }

        let children = build_level(
            &entry.children,
            Some(id),
            &format!("{path}.children"),
            seen_ids,
            issues,
        );

        nodes.push(CategoryNode {
            id,
            name,
            parent_id: entry.parent_id,
            is_parent_type: entry.is_parent_type,
            is_active: entry.is_active,
            created_at: entry.created_at,
            children,
        });
    }

    nodes
}
