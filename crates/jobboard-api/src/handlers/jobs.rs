//! Job listing, submission and edit handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Form, Json};
use uuid::Uuid;

use jobboard_core::error::AppError;
use jobboard_entity::{FieldErrors, Job, NewJob};

use crate::dto::response::{ApiResponse, CreatedJobResponse, EditJobResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Validation failure carrying every field error and the submitted form.
fn invalid_form(errors: FieldErrors, form: &NewJob) -> ApiError {
    AppError::validation("Job submission is invalid")
        .with_details(serde_json::json!({
            "errors": errors,
            "form": form,
        }))
        .into()
}

/// GET /
pub async fn list_jobs(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Job>>>, ApiError> {
    let jobs = state.jobs.list_jobs().await?;
    Ok(Json(ApiResponse::ok(jobs)))
}

/// GET /new
pub async fn new_job_form() -> Json<ApiResponse<NewJob>> {
    Json(ApiResponse::ok(NewJob::default()))
}

/// POST /jobs
pub async fn create_job(
    State(state): State<AppState>,
    Form(form): Form<NewJob>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedJobResponse>>), ApiError> {
    let errors = form.validate(false);
    if !errors.is_empty() {
        return Err(invalid_form(errors, &form));
    }

    // User first: a failed upsert must not leave a job nobody can edit.
    let user = state.users.get_or_create_user(form.email.trim()).await?;

    let job = state.jobs.create_job(&form).await?;
    tracing::info!(job_id = %job.id, "Job created");

    if !user.verified {
        let verify_url = state.links.signed_url(&user, Some("verify"));
        if let Err(e) = state.mailer.send_verification(&user, &verify_url).await {
            tracing::warn!(user_id = %user.id, error = %e, "Failed to send verification link");
        }
    }

    let edit_url = state.links.signed_url(&job, Some("edit"));
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(CreatedJobResponse { job, edit_url })),
    ))
}

/// GET /jobs/{id}
pub async fn view_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Job>>, ApiError> {
    let job = state
        .jobs
        .find_job(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Job {id} not found")))?;
    Ok(Json(ApiResponse::ok(job)))
}

/// GET /jobs/{id}/edit (signed)
pub async fn edit_job(
    State(state): State<AppState>,
    Extension(job): Extension<Job>,
) -> Json<ApiResponse<EditJobResponse>> {
    let update_url = state.links.signed_url(&job, None);
    let form = NewJob::from(&job);
    Json(ApiResponse::ok(EditJobResponse {
        job,
        form,
        update_url,
    }))
}

/// POST /jobs/{id} (signed)
pub async fn update_job(
    State(state): State<AppState>,
    Extension(mut job): Extension<Job>,
    Form(form): Form<NewJob>,
) -> Result<Json<ApiResponse<Job>>, ApiError> {
    let errors = form.validate(true);
    if !errors.is_empty() {
        return Err(invalid_form(errors, &form));
    }

    job.apply_update(&form);
    state.jobs.save_job(&job).await?;
    tracing::info!(job_id = %job.id, "Job updated");

    Ok(Json(ApiResponse::ok(job)))
}
