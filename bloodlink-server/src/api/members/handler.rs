//! Member API Handlers
//!
//! The profile access layer: create, own-profile, completion, recipient
//! listing, location update and the gating endpoint. Reads degrade to
//! null/false for anonymous callers instead of failing.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::{CurrentUser, OptionalUser};
use crate::core::ServerState;
use crate::db::repository::member;
use crate::events::ProfileEventKind;
use crate::gating;
use crate::utils::validation::{MAX_BIO_LEN, MAX_LOCATION_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::{Member, MemberLocationUpdate, MemberProfileCreate, RecipientWithUser};

/// POST /api/members - create the caller's member profile
///
/// Exactly one profile per user: a second attempt fails with 409 and leaves
/// the store unchanged. The payload is re-validated server-side; the form's
/// client checks are not trusted.
pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<MemberProfileCreate>,
) -> AppResult<Json<Member>> {
    payload.validate()?;
    validate_required_text(&payload.location, "location", MAX_LOCATION_LEN)?;
    validate_optional_text(&payload.bio, "bio", MAX_BIO_LEN)?;
    if !payload.location_permission_granted {
        return Err(AppError::validation(
            "You must grant location permission to continue",
        ));
    }

    if member::find_by_user_id(&state.pool, current_user.id)
        .await?
        .is_some()
    {
        return Err(AppError::conflict("Profile already exists for this user"));
    }

    // The unique index on user_id backstops the check above under
    // concurrent submissions; a losing insert maps to the same 409.
    let created = member::create(&state.pool, current_user.id, payload).await?;

    tracing::info!(
        user_id = current_user.id,
        member_id = created.id,
        role = ?created.role,
        "Member profile created"
    );

    state.notify_profile_changed(current_user.id, ProfileEventKind::Created);

    Ok(Json(created))
}

/// GET /api/members/me - the caller's profile, or null
///
/// Never fails: anonymous callers and missing profiles both yield null.
pub async fn me(
    State(state): State<ServerState>,
    OptionalUser(current_user): OptionalUser,
) -> AppResult<Json<Option<Member>>> {
    let Some(user) = current_user else {
        return Ok(Json(None));
    };
    let profile = member::find_by_user_id(&state.pool, user.id).await?;
    Ok(Json(profile))
}

/// GET /api/members/completion - has the caller completed their profile?
pub async fn completion(
    State(state): State<ServerState>,
    OptionalUser(current_user): OptionalUser,
) -> AppResult<Json<bool>> {
    let Some(user) = current_user else {
        return Ok(Json(false));
    };
    let completed = member::find_by_user_id(&state.pool, user.id)
        .await?
        .map(|m| m.profile_completed)
        .unwrap_or(false);
    Ok(Json(completed))
}

/// GET /api/members/recipients - all recipients with their user info
pub async fn recipients(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<RecipientWithUser>>> {
    let recipients = member::find_recipients(&state.pool).await?;
    Ok(Json(recipients))
}

/// PUT /api/members/me/location - set the caller's coordinates
pub async fn update_location(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<MemberLocationUpdate>,
) -> AppResult<Json<Member>> {
    payload.validate()?;

    let updated = member::update_location(
        &state.pool,
        current_user.id,
        payload.latitude,
        payload.longitude,
    )
    .await?;

    tracing::info!(user_id = current_user.id, "Member location updated");

    state.notify_profile_changed(current_user.id, ProfileEventKind::LocationUpdated);

    Ok(Json(updated))
}

#[derive(Deserialize)]
pub struct GateQuery {
    /// Page the client is currently on
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GateResponse {
    /// Where to navigate, or null to stay put
    pub target: Option<String>,
}

/// GET /api/members/gate?path=/donor - the gating decision for a page
pub async fn gate(
    State(state): State<ServerState>,
    OptionalUser(current_user): OptionalUser,
    Query(query): Query<GateQuery>,
) -> AppResult<Json<GateResponse>> {
    let profile = match &current_user {
        Some(user) => member::find_by_user_id(&state.pool, user.id).await?,
        None => None,
    };
    let target = gating::route_for(profile.as_ref(), &query.path).map(String::from);
    Ok(Json(GateResponse { target }))
}
