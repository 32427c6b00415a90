//! Cross-origin policy for browser clients of the API.
//!
//! The allow-list is exact: an origin that is not listed gets no
//! `Access-Control-Allow-Origin` header back, so the browser blocks the call.

use actix_cors::Cors;

use crate::configuration::CorsSettings;

#[derive(Debug, thiserror::Error)]
pub enum CorsError {
    #[error("the wildcard origin cannot be combined with credentials")]
    WildcardWithCredentials,
    #[error("invalid origin `{0}`, expected scheme://host[:port]")]
    InvalidOrigin(String),
    #[error("invalid HTTP method `{0}`")]
    InvalidMethod(String),
    #[error("invalid header name `{0}`")]
    InvalidHeader(String),
}

/// Builds the middleware from settings already checked by
/// [`CorsSettings::validate`].
pub fn build(settings: &CorsSettings) -> Cors {
    let mut cors = settings
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| match origin.as_str() {
            "*" => cors.allow_any_origin(),
            origin => cors.allowed_origin(origin),
        })
        .allowed_methods(settings.allowed_methods.iter().map(String::as_str))
        .allowed_headers(settings.allowed_headers.iter().map(String::as_str))
        .expose_headers(settings.expose_headers.iter().map(String::as_str))
        .max_age(settings.max_age_secs)
        // unlisted origins are still served, just without the allow headers
        .block_on_origin_mismatch(false);

    if settings.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
