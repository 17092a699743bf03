use serde_json::Value;
use warp::http::StatusCode;

use crate::constants::{CONTENT_TYPE_JSON, HEADER_CACHE_CONTROL};

pub fn json_response(status: StatusCode, value: &Value) -> warp::reply::Response {
    let json_string = serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string());
    let content_length = json_string.len();

    let mut response = warp::reply::Response::new(json_string.into());
    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.insert(
        warp::http::header::CONTENT_TYPE,
        warp::http::HeaderValue::from_static(CONTENT_TYPE_JSON),
    );
    headers.insert(
        warp::http::header::CONTENT_LENGTH,
        warp::http::HeaderValue::from(content_length),
    );
    headers.insert(
        warp::http::header::CACHE_CONTROL,
        warp::http::HeaderValue::from_static(HEADER_CACHE_CONTROL),
    );
    response
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use warp::http::StatusCode;

    use super::json_response;

    #[test]
    fn sets_status_and_json_headers() {
        let response = json_response(StatusCode::NOT_FOUND, &json!({"error": "nope"}));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            "application/json; charset=utf-8"
        );
        assert_eq!(response.headers()["content-length"], "16");
    }
}
