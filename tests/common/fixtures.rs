#![allow(dead_code)]

use catalog_client::infrastructure::catalog_api::CategoryPayload;
use uuid::Uuid;

pub fn payload(id: Uuid, name: &str, parent_id: Option<Uuid>) -> CategoryPayload {
    CategoryPayload {
        id: Some(id),
        name: Some(name.to_string()),
        parent_id,
        is_parent_type: false,
        is_active: true,
        created_at: None,
        children: Vec::new(),
    }
}

pub fn container(id: Uuid, name: &str, parent_id: Option<Uuid>) -> CategoryPayload {
    CategoryPayload {
        is_parent_type: true,
        ..payload(id, name, parent_id)
    }
}

pub struct SampleTree {
    pub tree: Vec<CategoryPayload>,
    pub audio: Uuid,
    pub microphones: Uuid,
    pub mixers: Uuid,
    pub lighting: Uuid,
}

/// Audio (container) with children Microphones and Mixers; sibling root
/// Lighting (container, inactive).
pub fn sample_tree() -> SampleTree {
    let audio = Uuid::new_v4();
    let microphones = Uuid::new_v4();
    let mixers = Uuid::new_v4();
    let lighting = Uuid::new_v4();

    let mut root = container(audio, "Audio", None);
    root.children = vec![
        payload(microphones, "Microphones", Some(audio)),
        payload(mixers, "Mixers", Some(audio)),
    ];

    let mut other = container(lighting, "Lighting", None);
    other.is_active = false;

    SampleTree {
        tree: vec![root, other],
        audio,
        microphones,
        mixers,
        lighting,
    }
}
