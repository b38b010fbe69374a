use super::error::recover_error;
use super::handler;
use crate::application_port::LookupService;
use std::convert::Infallible;
use std::sync::Arc;
use url::Url;
use warp::Filter;

const MAX_BODY_BYTES: u64 = 4 * 1024;

pub fn routes(
    lookup_service: Arc<dyn LookupService>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    // `/verify-user` is kept for clients built against the older path.
    warp::post()
        .and(warp::path("check_user").or(warp::path("verify-user")).unify())
        .and(warp::path::end())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(with(lookup_service))
        .and_then(handler::check_user)
}

/// Routes plus error recovery, CORS and request tracing: everything the
/// listener serves.
pub fn service(
    lookup_service: Arc<dyn LookupService>,
    cors: warp::cors::Builder,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    routes(lookup_service)
        .recover(recover_error)
        .with(cors)
        .with(warp::trace::request())
}

/// An empty origin list allows any origin.
pub fn cors(origins: &[String]) -> anyhow::Result<warp::cors::Builder> {
    let builder = warp::cors()
        .allow_methods(vec!["POST"])
        .allow_headers(vec!["content-type"]);

    if origins.is_empty() {
        return Ok(builder.allow_any_origin());
    }

    let origins = origins
        .iter()
        .map(|o| normalize_origin(o))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(builder.allow_origins(origins.iter().map(String::as_str)))
}

fn normalize_origin(origin: &str) -> anyhow::Result<String> {
    let url =
        Url::parse(origin).map_err(|e| anyhow::anyhow!("invalid CORS origin {origin:?}: {e}"))?;
    if url.host_str().is_none() || url.path() != "/" || url.query().is_some() {
        return Err(anyhow::anyhow!(
            "invalid CORS origin {origin:?}: expected scheme://host[:port]"
        ));
    }
    Ok(url.origin().ascii_serialization())
}

fn with<ServiceType>(
    service: Arc<ServiceType>,
) -> impl Filter<Extract = (Arc<ServiceType>,), Error = Infallible> + Clone
where
    ServiceType: Send + Sync + ?Sized,
{
    warp::any().map(move || service.clone())
}
