use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

/// Request body for POST /categories
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    pub is_parent_type: bool,
    pub is_active: bool,
}

impl CreateCategoryRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_id: None,
            is_parent_type: false,
            is_active: true,
        }
    }

    pub fn with_parent(mut self, parent_id: Uuid) -> Self {
        self.parent_id = Some(parent_id);
        self
    }

    pub fn as_parent_type(mut self) -> Self {
        self.is_parent_type = true;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}

/// Request body for PUT /categories/{id}
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,
    pub parent_id: Option<Uuid>,
    pub is_parent_type: bool,
    pub is_active: bool,
}

/// Request body for PATCH /categories/{id}/active
#[derive(Debug, Clone, Serialize)]
pub struct SetActiveRequest {
    pub is_active: bool,
}
