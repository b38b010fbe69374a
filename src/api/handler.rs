use super::dto::*;
use super::error::*;
use crate::application_port::{LookupOutcome, LookupService};
use std::sync::Arc;
use warp::reject;

pub async fn check_user(
    body: CheckUserRequest,
    lookup_service: Arc<dyn LookupService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let outcome = lookup_service
        .check_user(&body.username)
        .await
        .map_err(ApiErrorCode::from)
        .map_err(reject::custom)?;

    let response = match outcome {
        LookupOutcome::Found { destination } => CheckUserResponse::found(destination),
        LookupOutcome::NotFound => CheckUserResponse::not_found(),
    };

    Ok(warp::reply::json(&response))
}
