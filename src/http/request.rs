use std::fmt::Display;

use bytes::{Buf, BufMut, Bytes, BytesMut};
use futures_util::{Stream, StreamExt, pin_mut};

use crate::error::ServerError;

/// Reads a request body chunk by chunk, whether or not it announced a
/// length, and gives up as soon as it grows past `limit` bytes.
pub async fn collect_body<S, B, E>(stream: S, limit: u64) -> Result<Bytes, ServerError>
where
    S: Stream<Item = Result<B, E>>,
    B: Buf,
    E: Display,
{
    pin_mut!(stream);
    let mut body = BytesMut::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| {
            log::warn!("request body read failed: {}", e);
            ServerError::bad_request()
        })?;
        if (body.len() + chunk.remaining()) as u64 > limit {
            return Err(ServerError::payload_too_large());
        }
        body.put(chunk);
    }

    Ok(body.freeze())
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use futures_util::stream;

    use super::collect_body;

    #[tokio::test]
    async fn joins_chunks_without_a_declared_length() {
        let chunks = stream::iter(vec![
            Ok::<_, std::io::Error>(Bytes::from_static(b"{\"messages\": ")),
            Ok(Bytes::from_static(b"[{\"content\": ")),
            Ok(Bytes::from_static(b"\"hello\"}]}")),
        ]);

        let body = collect_body(chunks, 1024).await.unwrap();
        assert_eq!(&body[..], br#"{"messages": [{"content": "hello"}]}"#);
    }

    #[tokio::test]
    async fn stops_once_limit_is_exceeded() {
        let chunks = stream::iter(vec![
            Ok::<_, std::io::Error>(Bytes::from_static(b"12345")),
            Ok(Bytes::from_static(b"678")),
        ]);

        let err = collect_body(chunks, 7).await.unwrap_err();
        assert_eq!(err.status_code, 413);
    }

    #[tokio::test]
    async fn body_at_limit_is_accepted() {
        let chunks = stream::iter(vec![Ok::<_, std::io::Error>(Bytes::from_static(b"1234567"))]);
        assert_eq!(collect_body(chunks, 7).await.unwrap().len(), 7);
    }

    #[tokio::test]
    async fn read_error_is_a_bad_request() {
        let chunks = stream::iter(vec![
            Ok(Bytes::from_static(b"{")),
            Err(std::io::Error::other("connection reset")),
        ]);

        let err = collect_body(chunks, 1024).await.unwrap_err();
        assert_eq!(err.status_code, 400);
    }
}
