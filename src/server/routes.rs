use bytes::Bytes;
use tokio_util::sync::CancellationToken;
use warp::Filter;

use crate::constants::MAX_JSON_BODY_SIZE_BYTES;
use crate::handlers;
use crate::http::collect_body;
use crate::server::cors::{preflight_route, with_cors_headers};
use crate::server::handle_rejection;

pub fn create_routes(
    shutdown: CancellationToken,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let with_shutdown_token = warp::any().map(move || shutdown.child_token());

    let chat_completions_route = warp::path!("v2" / "chat" / "completions")
        .and(warp::post())
        .and(raw_json_body())
        .and(with_shutdown_token)
        .and_then(|body: Bytes, token: CancellationToken| async move {
            handlers::handle_chat_completions(body, token)
                .await
                .map_err(warp::reject::custom)
        });

    let api = preflight_route()
        .or(chat_completions_route)
        .recover(handle_rejection);

    warp::header::optional::<String>("origin")
        .and(api)
        .map(|origin: Option<String>, reply| with_cors_headers(reply, origin.as_deref()))
}

/// Body bytes are validated by the handler so that malformed JSON and a
/// missing content type produce the same structured error as bad fields.
/// Chunked bodies without a `Content-Length` are accepted; the size cap is
/// enforced while reading.
fn raw_json_body() -> impl Filter<Extract = (Bytes,), Error = warp::Rejection> + Clone {
    warp::body::stream().and_then(|stream| async move {
        collect_body(stream, MAX_JSON_BODY_SIZE_BYTES)
            .await
            .map_err(warp::reject::custom)
    })
}
