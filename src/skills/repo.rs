use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::ApiError;
use crate::skills::dto::SkillDraft;

/// Skill record in the database. The catalog is shared, not per-user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub level: i32,
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}

impl Skill {
    pub async fn list(db: &PgPool) -> Result<Vec<Skill>, ApiError> {
        let rows = sqlx::query_as::<_, Skill>(
            r#"
            SELECT id, name, category, level, description, last_updated
            FROM skills
            ORDER BY last_updated DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(db: &PgPool, draft: &SkillDraft) -> Result<Skill, ApiError> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (name, category, level, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, category, level, description, last_updated
            "#,
        )
        .bind(&draft.name)
        .bind(&draft.category)
        .bind(draft.level)
        .bind(&draft.description)
        .fetch_one(db)
        .await?;
        Ok(skill)
    }

    /// Full-record update, refreshing `last_updated`. Last write wins; there
    /// is no version check. Returns None when the id matches nothing.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        draft: &SkillDraft,
    ) -> Result<Option<Skill>, ApiError> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            UPDATE skills
            SET name = $2, category = $3, level = $4, description = $5, last_updated = now()
            WHERE id = $1
            RETURNING id, name, category, level, description, last_updated
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.category)
        .bind(draft.level)
        .bind(&draft.description)
        .fetch_optional(db)
        .await?;
        Ok(skill)
    }

    /// Returns false when the id matches nothing.
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, ApiError> {
        let deleted = sqlx::query_scalar::<_, Uuid>(
            r#"
            DELETE FROM skills
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(deleted.is_some())
    }
}
