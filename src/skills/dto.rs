use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::skills::repo::Skill;

/// Request body for creating or updating a skill. `name`/`category` default
/// to empty and `level` to absent so missing keys fail validation instead of
/// deserialization.
#[derive(Debug, Deserialize)]
pub struct SkillPayload {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub level: Option<i32>,
    pub description: Option<String>,
}

/// Validated skill fields ready for the store.
#[derive(Debug)]
pub struct SkillDraft {
    pub name: String,
    pub category: String,
    pub level: i32,
    pub description: Option<String>,
}

impl SkillPayload {
    pub fn validate(self) -> Result<SkillDraft, ApiError> {
        let name = self.name.trim().to_string();
        let category = self.category.trim().to_string();
        let level = self
            .level
            .ok_or_else(|| ApiError::validation("All fields are required"))?;
        if name.is_empty() || category.is_empty() {
            return Err(ApiError::validation("All fields are required"));
        }
        Ok(SkillDraft {
            name,
            category,
            level,
            description: self.description,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct SkillEnvelope {
    pub message: String,
    pub skill: Skill,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
