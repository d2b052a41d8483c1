//! Repository for the `tutorials` table.

use linework_core::types::TutorialId;
use sqlx::PgPool;

use crate::models::tutorial::{CreateTutorial, Tutorial};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, input_type, subject, original_image_url, \
                       tutorial_image_url, prompt, steps, created_at, updated_at";

/// Provides insert and lookup operations for tutorials.
pub struct TutorialRepo;

impl TutorialRepo {
    /// Insert a new tutorial, returning the created row.
    pub async fn insert(pool: &PgPool, input: &CreateTutorial) -> Result<Tutorial, sqlx::Error> {
        let query = format!(
            "INSERT INTO tutorials (id, user_id, input_type, subject, original_image_url,
                                    tutorial_image_url, prompt, steps, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tutorial>(&query)
            .bind(input.id)
            .bind(&input.user_id)
            .bind(&input.input_type)
            .bind(&input.subject)
            .bind(&input.original_image_url)
            .bind(&input.tutorial_image_url)
            .bind(&input.prompt)
            .bind(&input.steps)
            .bind(input.created_at)
            .fetch_one(pool)
            .await
    }

    /// Find a tutorial by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: TutorialId,
    ) -> Result<Option<Tutorial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tutorials WHERE id = $1");
        sqlx::query_as::<_, Tutorial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of tutorials, newest first.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Tutorial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tutorials
             ORDER BY created_at DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Tutorial>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of stored tutorials.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tutorials")
            .fetch_one(pool)
            .await
    }
}
