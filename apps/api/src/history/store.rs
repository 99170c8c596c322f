use serde::Serialize;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::generation::{GenerationKind, GenerationRow};

/// Most rows returned by a history listing.
pub const HISTORY_LIMIT: i64 = 50;

/// Stores one generation. Failures are logged and swallowed: a broken history
/// table must not cost the user the result they just paid tokens for.
pub async fn record_generation<I, O>(
    pool: &PgPool,
    user_id: &str,
    kind: GenerationKind,
    input: &I,
    output: &O,
) where
    I: Serialize + ?Sized,
    O: Serialize + ?Sized,
{
    let (input_data, output_data) = match (serde_json::to_value(input), serde_json::to_value(output))
    {
        (Ok(i), Ok(o)) => (i, o),
        (Err(e), _) | (_, Err(e)) => {
            warn!("Skipping {} history record for {user_id}: {e}", kind.as_str());
            return;
        }
    };

    let result = sqlx::query(
        "INSERT INTO generations (user_id, kind, input_data, output_data) VALUES ($1, $2, $3, $4)",
    )
    .bind(user_id)
    .bind(kind.as_str())
    .bind(&input_data)
    .bind(&output_data)
    .execute(pool)
    .await;

    match result {
        Ok(_) => info!("Recorded {} generation for user {user_id}", kind.as_str()),
        Err(e) => warn!("Failed to record {} generation for {user_id}: {e}", kind.as_str()),
    }
}

/// Returns the user's most recent generations, newest first.
pub async fn list_generations(pool: &PgPool, user_id: &str) -> sqlx::Result<Vec<GenerationRow>> {
    sqlx::query_as::<_, GenerationRow>(
        r#"
        SELECT id, user_id, kind, input_data, output_data, created_at
        FROM generations
        WHERE user_id = $1
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(user_id)
    .bind(HISTORY_LIMIT)
    .fetch_all(pool)
    .await
}

/// Deletes a generation owned by `user_id`. Returns whether a row was removed.
pub async fn delete_generation(pool: &PgPool, id: Uuid, user_id: &str) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM generations WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
