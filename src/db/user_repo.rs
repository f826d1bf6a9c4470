// src/db/user_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::user::{DEMO_USER_EMAIL, User},
};

// All interactions with the 'users' table.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    // Resolves the owning user for a write: the caller-supplied id wins,
    // otherwise we fall back to the demo user. There is no real
    // multi-tenant isolation behind this.
    pub async fn resolve_or_demo(&self, user_id: Option<Uuid>) -> Result<Uuid, AppError> {
        if let Some(id) = user_id {
            return Ok(id);
        }
        let user = self.find_by_email(DEMO_USER_EMAIL).await?;
        user.map(|u| u.id).ok_or(AppError::UserNotFound)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from)
    }

    // Partial update: absent fields keep their stored values. There is no
    // way to clear a field back to NULL through this path.
    pub async fn update_profile(
        &self,
        id: Uuid,
        name: Option<&str>,
        company: Option<&str>,
    ) -> Result<User, AppError> {
        let current = self.find_by_id(id).await?.ok_or(AppError::UserNotFound)?;
        let (name, company) = merged_profile(current, name, company);

        sqlx::query_as::<_, User>(
            "UPDATE users SET name = $2, company = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .bind(company)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }

    // Startup bootstrap: make sure the demo user exists so that writes with
    // no explicit owner have somewhere to land.
    pub async fn ensure_demo_user(&self) -> Result<User, AppError> {
        if let Some(user) = self.find_by_email(DEMO_USER_EMAIL).await? {
            return Ok(user);
        }
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, name, company) VALUES ($1, $2, $3) \
             ON CONFLICT (email) DO UPDATE SET updated_at = NOW() \
             RETURNING *",
        )
        .bind(DEMO_USER_EMAIL)
        .bind("Demo User")
        .bind("Freelance Guard")
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)
    }
}

// Merges a partial profile payload over the stored record: a provided field
// wins, an omitted one keeps its current value.
fn merged_profile(
    current: User,
    name: Option<&str>,
    company: Option<&str>,
) -> (Option<String>, Option<String>) {
    (
        name.map(str::to_string).or(current.name),
        company.map(str::to_string).or(current.company),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(name: Option<&str>, company: Option<&str>) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            email: DEMO_USER_EMAIL.to_string(),
            name: name.map(str::to_string),
            company: company.map(str::to_string),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn omitted_company_keeps_the_stored_value() {
        let current = user(Some("Demo User"), Some("Freelance Guard"));
        let (name, company) = merged_profile(current, Some("New Name"), None);
        assert_eq!(name.as_deref(), Some("New Name"));
        assert_eq!(company.as_deref(), Some("Freelance Guard"));
    }

    #[test]
    fn omitted_name_keeps_the_stored_value() {
        let current = user(Some("Demo User"), Some("Freelance Guard"));
        let (name, company) = merged_profile(current, None, Some("New Co"));
        assert_eq!(name.as_deref(), Some("Demo User"));
        assert_eq!(company.as_deref(), Some("New Co"));
    }

    #[test]
    fn provided_fields_override_stored_values() {
        let current = user(Some("Old"), Some("Old Co"));
        let (name, company) = merged_profile(current, Some("New"), Some("New Co"));
        assert_eq!(name.as_deref(), Some("New"));
        assert_eq!(company.as_deref(), Some("New Co"));
    }

    #[test]
    fn empty_payload_changes_nothing() {
        let current = user(Some("Demo User"), None);
        let (name, company) = merged_profile(current, None, None);
        assert_eq!(name.as_deref(), Some("Demo User"));
        assert_eq!(company, None);
    }
}
