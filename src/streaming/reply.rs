use std::time::Instant;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::constants::{
    ERROR_PREFIX, LOG_PREFIX_CONN, LOG_PREFIX_WARNING, REPLY_PREFIX, STREAM_CHANNEL_CAPACITY,
};
use crate::error::ServerError;
use crate::logging::{log_timed, sanitize_log_message};
use crate::model::ChatRequest;
use crate::streaming::response::{StreamItem, create_streaming_response};
use crate::streaming::sse::SseEvent;

/// Result of composing the synthetic reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyOutcome {
    Success(String),
    Failure(String),
}

impl ReplyOutcome {
    /// Both branches end with the sentinel.
    pub fn into_events(self) -> [SseEvent; 2] {
        let content = match self {
            ReplyOutcome::Success(reply) => reply,
            ReplyOutcome::Failure(description) => format!("{}{}", ERROR_PREFIX, description),
        };
        [SseEvent::Content(content), SseEvent::Done]
    }
}

pub fn compose_reply(request: &ChatRequest) -> ReplyOutcome {
    match request.last_message() {
        Ok(message) => {
            log::info!("{}", sanitize_log_message(message.content));
            ReplyOutcome::Success(format!("{}{}", REPLY_PREFIX, message.content))
        }
        Err(err) => {
            log::error!("reply failed: {}", err);
            ReplyOutcome::Failure(err.to_string())
        }
    }
}

/// Opens the event channel and returns the SSE response fed by it.
pub fn stream_reply(
    request: ChatRequest,
    cancellation_token: CancellationToken,
) -> Result<warp::reply::Response, ServerError> {
    let (tx, rx) = mpsc::channel::<StreamItem>(STREAM_CHANNEL_CAPACITY);
    spawn_reply_task(request, tx, cancellation_token);
    create_streaming_response(rx)
}

/// Sends the reply events into `tx`, stopping early once the token is
/// cancelled or the receiver is gone. Resolves to the number of events sent.
pub fn spawn_reply_task(
    request: ChatRequest,
    tx: mpsc::Sender<StreamItem>,
    cancellation_token: CancellationToken,
) -> JoinHandle<usize> {
    tokio::spawn(async move {
        let start_time = Instant::now();
        let events = compose_reply(&request).into_events();
        let mut sent = 0usize;

        for event in &events {
            let delivered = tokio::select! {
                biased;
                _ = cancellation_token.cancelled() => false,
                result = tx.send(Ok(event.encode())) => result.is_ok(),
            };
            if !delivered {
                log_timed(
                    LOG_PREFIX_WARNING,
                    &format!("stream closed early | {} of {} events", sent, events.len()),
                    start_time,
                );
                return sent;
            }
            sent += 1;
        }

        log_timed(
            LOG_PREFIX_CONN,
            &format!("stream completed | {} events", sent),
            start_time,
        );
        sent
    })
}
