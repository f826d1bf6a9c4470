// src/db/settings_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::settings::{UpdateSettingsRequest, UserSettings},
};

#[derive(Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_for_user(&self, user_id: Uuid) -> Result<Option<UserSettings>, AppError> {
        sqlx::query_as::<_, UserSettings>("SELECT * FROM user_settings WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    // Lazy default creation on first read: hourlyRate 75, USD, goal 6000.
    pub async fn get_or_create_defaults(&self, user_id: Uuid) -> Result<UserSettings, AppError> {
        if let Some(settings) = self.find_for_user(user_id).await? {
            return Ok(settings);
        }
        sqlx::query_as::<_, UserSettings>(
            "INSERT INTO user_settings (user_id) VALUES ($1) \
             ON CONFLICT (user_id) DO UPDATE SET updated_at = NOW() \
             RETURNING *",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    // Partial upsert keyed by user id: absent fields keep their current
    // (or default) values.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        input: UpdateSettingsRequest,
    ) -> Result<UserSettings, AppError> {
        sqlx::query_as::<_, UserSettings>(
            r#"
            INSERT INTO user_settings (
                user_id, hourly_rate, currency, monthly_goal,
                stripe_secret_key, stripe_publishable_key, sender_email
            )
            VALUES ($1, COALESCE($2, 75), COALESCE($3, 'USD'), COALESCE($4, 6000), $5, $6, $7)
            ON CONFLICT (user_id)
            DO UPDATE SET
                hourly_rate = COALESCE($2, user_settings.hourly_rate),
                currency = COALESCE($3, user_settings.currency),
                monthly_goal = COALESCE($4, user_settings.monthly_goal),
                stripe_secret_key = COALESCE($5, user_settings.stripe_secret_key),
                stripe_publishable_key = COALESCE($6, user_settings.stripe_publishable_key),
                sender_email = COALESCE($7, user_settings.sender_email),
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(input.hourly_rate)
        .bind(input.currency)
        .bind(input.monthly_goal)
        .bind(input.stripe_secret_key)
        .bind(input.stripe_publishable_key)
        .bind(input.sender_email)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }
}
