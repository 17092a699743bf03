use bytes::Bytes;
use tokio_util::sync::CancellationToken;

use crate::constants::CHAT_COMPLETIONS_PATH;
use crate::error::ServerError;
use crate::logging::{log_request, log_request_body};
use crate::model::parse_chat_request;
use crate::streaming::stream_reply;

/// `POST /v2/chat/completions`
///
/// Validation failures are returned before any byte is streamed. Once the
/// body is valid the reply always streams, whatever `stream` says.
pub async fn handle_chat_completions(
    body: Bytes,
    cancellation_token: CancellationToken,
) -> Result<warp::reply::Response, ServerError> {
    log_request_body(CHAT_COMPLETIONS_PATH, &body);

    let request = parse_chat_request(&body)?;
    log_request("POST", CHAT_COMPLETIONS_PATH, Some(&request.model));
    log::debug!(
        "{} messages, stream flag {}",
        request.messages.len(),
        request.stream
    );

    stream_reply(request, cancellation_token)
}
