// src/handlers/projects.rs

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    handlers::ListParams,
    models::project::{ProjectStatus, ProjectType, ProjectWithClient},
    services::{
        project_service::{ClientSelector, ProjectDraft},
        search::any_field_matches,
    },
};

// GET /api/projects
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "Projects",
    params(ListParams),
    responses(
        (status = 200, description = "Projects newest first, with expanded client", body = Vec<ProjectWithClient>)
    )
)]
pub async fn list_projects(
    State(app_state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let projects = app_state.project_repo.list_with_client().await?;

    let filtered: Vec<ProjectWithClient> = projects
        .into_iter()
        .filter(|p| {
            params
                .status
                .as_deref()
                .is_none_or(|s| p.project.status.as_str() == s)
        })
        .filter(|p| {
            params.q.as_deref().is_none_or(|q| {
                any_field_matches(
                    &[
                        &p.project.name,
                        &p.client.name,
                        p.client.company.as_deref().unwrap_or(""),
                    ],
                    q,
                )
            })
        })
        .collect();

    Ok((StatusCode::OK, Json(filtered)))
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InlineClientPayload {
    #[schema(example = "Sarah Johnson")]
    pub name: Option<String>,

    #[validate(email(message = "invalid_email"))]
    #[schema(example = "sarah@startupxyz.com")]
    pub email: Option<String>,

    pub company: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectPayload {
    // Either an existing client id or an inline find-or-create payload.
    pub client_id: Option<Uuid>,
    #[validate(nested)]
    pub client: Option<InlineClientPayload>,

    #[validate(length(min = 1, message = "required"))]
    #[schema(example = "Mobile App Development")]
    pub name: String,
    pub description: Option<String>,

    pub status: Option<ProjectStatus>,
    #[serde(rename = "type")]
    pub project_type: Option<ProjectType>,

    #[schema(value_type = Option<f64>, example = 75.0)]
    pub hourly_rate: Option<Decimal>,
    #[schema(value_type = Option<f64>, example = 5000.0)]
    pub fixed_price: Option<Decimal>,

    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub estimated_hours: Option<f64>,

    pub user_id: Option<Uuid>,
}

fn client_selector(payload: &CreateProjectPayload) -> Result<ClientSelector, AppError> {
    if let Some(id) = payload.client_id {
        return Ok(ClientSelector::Existing(id));
    }
    if let Some(inline) = &payload.client {
        let (Some(name), Some(email)) = (inline.name.clone(), inline.email.clone()) else {
            return Err(AppError::MissingField("client name and email are required"));
        };
        return Ok(ClientSelector::Inline {
            name,
            email,
            company: inline.company.clone(),
        });
    }
    Err(AppError::MissingField("clientId is required"))
}

fn draft_from(payload: CreateProjectPayload, now: DateTime<Utc>) -> ProjectDraft {
    ProjectDraft {
        user_id: payload.user_id,
        name: payload.name,
        description: payload.description,
        status: payload.status.unwrap_or(ProjectStatus::Active),
        project_type: payload.project_type.unwrap_or(ProjectType::Hourly),
        hourly_rate: payload.hourly_rate,
        fixed_price: payload.fixed_price,
        start_date: payload.start_date.unwrap_or(now),
        end_date: payload.end_date,
        estimated_hours: payload.estimated_hours,
    }
}

// POST /api/projects
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "Projects",
    request_body = CreateProjectPayload,
    responses(
        (status = 201, description = "Project created", body = ProjectWithClient),
        (status = 400, description = "No client reference, or demo user unresolvable")
    )
)]
pub async fn create_project(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateProjectPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let selector = client_selector(&payload)?;
    let draft = draft_from(payload, Utc::now());

    let project = app_state
        .project_service
        .create_project(&app_state.db_pool, selector, draft)
        .await?;

    Ok((StatusCode::CREATED, Json(project)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str) -> CreateProjectPayload {
        CreateProjectPayload {
            client_id: None,
            client: None,
            name: name.to_string(),
            description: None,
            status: None,
            project_type: None,
            hourly_rate: None,
            fixed_price: None,
            start_date: None,
            end_date: None,
            estimated_hours: None,
            user_id: None,
        }
    }

    #[test]
    fn rejects_payload_without_any_client_reference() {
        let err = client_selector(&payload("P")).unwrap_err();
        assert!(matches!(err, AppError::MissingField("clientId is required")));
    }

    #[test]
    fn existing_client_id_wins_over_inline_client() {
        let id = Uuid::new_v4();
        let mut p = payload("P");
        p.client_id = Some(id);
        p.client = Some(InlineClientPayload {
            name: Some("X".to_string()),
            email: Some("x@y.z".to_string()),
            company: None,
        });
        assert!(matches!(
            client_selector(&p).unwrap(),
            ClientSelector::Existing(found) if found == id
        ));
    }

    #[test]
    fn inline_client_requires_name_and_email() {
        let mut p = payload("P");
        p.client = Some(InlineClientPayload {
            name: Some("X".to_string()),
            email: None,
            company: None,
        });
        assert!(client_selector(&p).is_err());
    }

    #[test]
    fn missing_fields_get_defaulted() {
        let now = Utc::now();
        let draft = draft_from(payload("P"), now);
        assert_eq!(draft.status, ProjectStatus::Active);
        assert_eq!(draft.project_type, ProjectType::Hourly);
        assert_eq!(draft.start_date, now);
    }

    #[test]
    fn explicit_fields_survive_defaulting() {
        let mut p = payload("P");
        p.status = Some(ProjectStatus::Paused);
        p.project_type = Some(ProjectType::Fixed);
        let draft = draft_from(p, Utc::now());
        assert_eq!(draft.status, ProjectStatus::Paused);
        assert_eq!(draft.project_type, ProjectType::Fixed);
    }
}
