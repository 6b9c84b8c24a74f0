use crate::config::CorsConfig;
use axum::body::Body;
use axum::http::{header, HeaderName, HeaderValue, Method, Request, Response};
use axum::middleware::Next;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

pub fn security_headers<B>(mut response: Response<B>) -> Response<B> {
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );

    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));

    headers.insert(
        header::X_XSS_PROTECTION,
        HeaderValue::from_static("1; mode=block"),
    );

    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'self'; script-src 'self' 'unsafe-inline'; style-src 'self' 'unsafe-inline' fonts.googleapis.com; font-src 'self' fonts.gstatic.com; img-src 'self' data: https:; connect-src 'self'"),
    );

    response
}

/// Advertises the accessibility features the frontend relies on.
pub fn accessibility_headers<B>(mut response: Response<B>, path: &str) -> Response<B> {
    let headers = response.headers_mut();

    for (name, value) in [
        ("x-ua-compatible", "IE=edge"),
        ("x-accessibility-compliant", "WCAG-2.2-AA"),
        ("x-screen-reader-optimized", "true"),
        ("x-keyboard-navigation", "enabled"),
        ("x-high-contrast-support", "available"),
        ("x-reduced-motion-support", "available"),
    ] {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }

    if path.ends_with("/accessibility") {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        );
    }

    response
}

pub async fn apply_security_headers(request: Request<Body>, next: Next) -> Response<Body> {
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    accessibility_headers(security_headers(response), &path)
}

pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(_) if origin.trim() == "*" => {
                tracing::warn!("Ignoring wildcard CORS origin; credentials require explicit origins");
                None
            }
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers([
            header::CONTENT_LENGTH,
            HeaderName::from_static("x-total-count"),
        ])
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}
