//! Dashboard orchestration endpoint.

use actix_web::{get, web, HttpResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// Wizard completion state for a user, recomputed from store + wallet.
#[get("/api/dashboard/{user_id}")]
pub async fn status(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let status = state.dashboard_service.status(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(status))
}
