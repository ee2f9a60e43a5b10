use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::skills::dto::{DeleteResponse, SkillEnvelope, SkillPayload};
use crate::skills::repo::Skill;
use crate::state::AppState;

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/skills", get(list_skills))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/add-skill", post(add_skill))
        .route("/update-skill/:id", put(update_skill))
        .route("/delete-skill/:id", delete(delete_skill))
}

#[instrument(skip(state))]
pub async fn list_skills(State(state): State<AppState>) -> Result<Json<Vec<Skill>>, ApiError> {
    let skills = Skill::list(&state.db).await?;
    Ok(Json(skills))
}

#[instrument(skip(state, payload))]
pub async fn add_skill(
    State(state): State<AppState>,
    Json(payload): Json<SkillPayload>,
) -> Result<(StatusCode, Json<SkillEnvelope>), ApiError> {
    let draft = payload.validate()?;
    let skill = Skill::create(&state.db, &draft).await?;

    info!(skill_id = %skill.id, name = %skill.name, "skill added");
    Ok((
        StatusCode::CREATED,
        Json(SkillEnvelope {
            message: "Skill added successfully".into(),
            skill,
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn update_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SkillPayload>,
) -> Result<Json<SkillEnvelope>, ApiError> {
    let draft = payload.validate()?;
    let skill = Skill::update(&state.db, id, &draft)
        .await?
        .ok_or_else(|| ApiError::not_found("Skill not found"))?;

    info!(skill_id = %skill.id, "skill updated");
    Ok(Json(SkillEnvelope {
        message: "Skill updated successfully".into(),
        skill,
    }))
}

#[instrument(skip(state))]
pub async fn delete_skill(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !Skill::delete(&state.db, id).await? {
        return Err(ApiError::not_found("Skill not found"));
    }

    info!(skill_id = %id, "skill deleted");
    Ok(Json(DeleteResponse {
        message: "Skill deleted successfully".into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn test_skill_envelope_serialization() {
        let envelope = SkillEnvelope {
            message: "Skill added successfully".into(),
            skill: Skill {
                id: Uuid::new_v4(),
                name: "Rust".into(),
                category: "Programming".into(),
                level: 4,
                description: Some("Systems language".into()),
                last_updated: OffsetDateTime::now_utc(),
            },
        };

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["message"], "Skill added successfully");
        assert_eq!(json["skill"]["name"], "Rust");
        assert_eq!(json["skill"]["level"], 4);
        assert!(json["skill"]["last_updated"].is_string());
    }

    #[test]
    fn test_skill_without_description_serializes_null() {
        let skill = Skill {
            id: Uuid::new_v4(),
            name: "Kayaking".into(),
            category: "Outdoors".into(),
            level: 2,
            description: None,
            last_updated: OffsetDateTime::now_utc(),
        };

        let json = serde_json::to_value(&skill).unwrap();
        assert!(json["description"].is_null());
    }
}
