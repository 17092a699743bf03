use bytes::Bytes;
use futures_util::StreamExt;
use http_body_util::StreamBody;
use tokio::sync::mpsc;

use crate::constants::{CONTENT_TYPE_SSE, ERROR_STREAM_BUILD, HEADER_CACHE_CONTROL, HEADER_CONNECTION};
use crate::error::ServerError;

pub type StreamItem = Result<Bytes, std::io::Error>;

/// Wraps the receiving end of an event channel into a chunked SSE response.
pub fn create_streaming_response(
    rx: mpsc::Receiver<StreamItem>,
) -> Result<warp::reply::Response, ServerError> {
    let stream = tokio_stream::wrappers::ReceiverStream::new(rx);
    // Create a body using the same pattern as warp's internal wrap_stream
    let mapped_stream = stream.map(|item: StreamItem| {
        item.map(warp::hyper::body::Frame::data)
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
    });

    let body_impl = StreamBody::new(mapped_stream);
    let boxed_body = http_body_util::BodyExt::boxed(body_impl);

    let temp_response = warp::http::Response::builder()
        .status(warp::http::StatusCode::OK)
        .header("content-type", CONTENT_TYPE_SSE)
        .header("cache-control", HEADER_CACHE_CONTROL)
        .header("connection", HEADER_CONNECTION)
        .body(boxed_body)
        .map_err(|_| ServerError::internal_server_error(ERROR_STREAM_BUILD))?;

    // warp's body is a newtype over this exact boxed body type
    Ok(unsafe {
        std::mem::transmute::<
            warp::http::Response<
                http_body_util::combinators::BoxBody<
                    Bytes,
                    Box<dyn std::error::Error + Send + Sync>,
                >,
            >,
            warp::reply::Response,
        >(temp_response)
    })
}
