use warp::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE, HeaderMap, HeaderValue, VARY,
};
use warp::http::Method;
use warp::{Filter, Rejection, Reply};

use crate::constants::{
    CORS_ALLOW_CREDENTIALS, CORS_ALLOW_METHODS, CORS_MAX_AGE_SECONDS, CORS_PREFLIGHT_BODY,
};

/// Answers CORS preflights on any path. Everything else, plain `OPTIONS`
/// included, is rejected as not found.
pub fn preflight_route() -> impl Filter<Extract = (warp::reply::Response,), Error = Rejection> + Clone
{
    warp::method()
        .and(warp::header::optional::<String>("origin"))
        .and(warp::header::optional::<String>(
            "access-control-request-method",
        ))
        .and(warp::header::optional::<String>(
            "access-control-request-headers",
        ))
        .and_then(
            |method: Method,
             origin: Option<String>,
             request_method: Option<String>,
             request_headers: Option<String>| async move {
                match (method, origin, request_method) {
                    (method, Some(origin), Some(_)) if method == Method::OPTIONS => {
                        Ok(preflight_response(&origin, request_headers.as_deref()))
                    }
                    _ => Err(warp::reject::not_found()),
                }
            },
        )
}

pub fn preflight_response(origin: &str, request_headers: Option<&str>) -> warp::reply::Response {
    let mut response = warp::reply::Response::new(CORS_PREFLIGHT_BODY.into());
    let headers = response.headers_mut();

    insert_origin_headers(headers, origin);
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(CORS_ALLOW_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from(CORS_MAX_AGE_SECONDS),
    );
    if let Some(value) = request_headers.and_then(|h| HeaderValue::from_str(h).ok()) {
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, value);
    }
    response
}

/// Reflects the caller's origin onto a response that does not carry CORS
/// headers yet.
pub fn with_cors_headers<R: Reply>(reply: R, origin: Option<&str>) -> warp::reply::Response {
    let mut response = reply.into_response();
    if let Some(origin) = origin {
        let headers = response.headers_mut();
        if !headers.contains_key(ACCESS_CONTROL_ALLOW_ORIGIN) {
            insert_origin_headers(headers, origin);
        }
    }
    response
}

fn insert_origin_headers(headers: &mut HeaderMap, origin: &str) {
    let Ok(origin_value) = HeaderValue::from_str(origin) else {
        log::warn!("ignoring unrepresentable origin header");
        return;
    };
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin_value);
    headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static(CORS_ALLOW_CREDENTIALS),
    );
    headers.append(VARY, HeaderValue::from_static("Origin"));
}

#[cfg(test)]
mod tests {
    use warp::http::StatusCode;

    use super::*;

    #[test]
    fn preflight_mirrors_origin_and_requested_headers() {
        let response = preflight_response("https://app.example", Some("x-custom, content-type"));
        let headers = response.headers();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_ORIGIN], "https://app.example");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_HEADERS], "x-custom, content-type");
        assert_eq!(headers[ACCESS_CONTROL_ALLOW_METHODS], CORS_ALLOW_METHODS);
        assert_eq!(headers[ACCESS_CONTROL_MAX_AGE], "600");
        assert_eq!(headers[VARY], "Origin");
    }

    #[test]
    fn without_origin_response_is_untouched() {
        let response = with_cors_headers(warp::reply(), None);
        assert!(!response.headers().contains_key(ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[test]
    fn existing_cors_headers_are_kept() {
        let preflight = preflight_response("https://a.example", None);
        let response = with_cors_headers(preflight, Some("https://b.example"));
        assert_eq!(
            response.headers()[ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://a.example"
        );
        assert_eq!(response.headers().get_all(VARY).iter().count(), 1);
    }
}
