//! Linked-account endpoints: link, verify, list, unlink.

use actix_web::{delete, get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};

use passport_core::types::{LinkRequest, VerifyRequest};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LinkResponse {
    success: bool,
    verification_code: String,
    account_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyResponse {
    success: bool,
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnlinkQuery {
    user_id: String,
}

/// Link a League account: resolve the Riot ID and create/refresh the
/// pending row. Returns the challenge icon number.
#[post("/api/accounts/link")]
pub async fn link(
    state: web::Data<AppState>,
    body: web::Json<LinkRequest>,
) -> Result<HttpResponse, ApiError> {
    let outcome = state.link_service.link(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(LinkResponse {
        success: true,
        verification_code: outcome.verification_code,
        account_id: outcome.account_id,
    }))
}

/// Verify a linked account against its challenge icon.
///
/// A mismatch is a 200 with `success: false`: the operation ran correctly
/// and found a user-correctable condition.
#[post("/api/accounts/verify")]
pub async fn verify(
    state: web::Data<AppState>,
    body: web::Json<VerifyRequest>,
) -> Result<HttpResponse, ApiError> {
    let outcome = state.verify_service.verify(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(VerifyResponse {
        success: outcome.success(),
        message: outcome.message(),
    }))
}

/// List a user's linked accounts (dashboard entry check).
#[get("/api/accounts/{user_id}")]
pub async fn list(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let accounts = state.link_service.list(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(accounts))
}

/// User-initiated unlink; removes the row outright.
#[delete("/api/accounts/{account_id}")]
pub async fn unlink(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<UnlinkQuery>,
) -> Result<HttpResponse, ApiError> {
    state
        .link_service
        .unlink(&path.into_inner(), &query.user_id)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
