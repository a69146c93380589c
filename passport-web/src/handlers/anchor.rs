//! Credential anchoring endpoint.

use actix_web::{post, web, HttpResponse};
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnchorBody {
    user_id: String,
}

/// Anchor the caller's verified accounts on-chain.
///
/// A `networkSwitched` outcome is a 200 telling the caller to re-invoke
/// once the wallet has settled on the target chain.
#[post("/api/anchor")]
pub async fn anchor(
    state: web::Data<AppState>,
    body: web::Json<AnchorBody>,
) -> Result<HttpResponse, ApiError> {
    let outcome = state.anchor_service.anchor(&body.user_id).await?;
    Ok(HttpResponse::Ok().json(outcome))
}
