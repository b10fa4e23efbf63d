use crate::error::{ServerError, ServerResult};
use crate::middleware::RequestId;
use crate::state::ServerState;
use auction::{AdView, UserProfile};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Bid request body.
///
/// Both fields are required; a body missing either one, or carrying a
/// non-string value, is rejected before the auction runs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BidRequest {
    #[serde(alias = "Country")]
    pub country: String,
    #[serde(alias = "Category")]
    pub category: String,
}

impl From<BidRequest> for UserProfile {
    fn from(request: BidRequest) -> Self {
        UserProfile::new(request.country, request.category)
    }
}

/// Run the auction for the posted user profile.
///
/// Responds with the redacted winning advertisement, `404 NO_MATCH` when no
/// advertisement targets the profile, or `400 BAD_REQUEST` for a missing or
/// malformed body.
pub async fn place_bid(
    State(state): State<Arc<ServerState>>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<BidRequest>, JsonRejection>,
) -> ServerResult<Json<AdView>> {
    tracing::info!(request_id = %request_id, "Received bid request");

    let Json(request) = payload.map_err(|rejection| {
        tracing::error!(
            request_id = %request_id,
            reason = %rejection.body_text(),
            "User information is missing or malformed"
        );
        ServerError::from(rejection)
    })?;

    let profile = UserProfile::from(request);
    tracing::info!(
        request_id = %request_id,
        country = %profile.country,
        category = %profile.category,
        "User information received"
    );

    match state.engine.run_auction(&profile) {
        Ok(view) => {
            tracing::info!(
                request_id = %request_id,
                country = %view.country,
                category = %view.category,
                price = ?view.price,
                reach = ?view.reach,
                "Winning advertisement found"
            );
            Ok(Json(view))
        }
        Err(err) => {
            tracing::info!(request_id = %request_id, "No matching advertisements found");
            Err(err.into())
        }
    }
}
