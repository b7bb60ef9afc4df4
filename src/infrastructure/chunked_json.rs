// Chunked event streaming: length-prefixed JSON frames
use crate::domain::snapshot::TerminalEvent;
use crate::infrastructure::http_response::brotli;
use axum::body::Body;
use axum::http::{Response, StatusCode, header};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use futures::StreamExt;
use futures::stream::Stream;

pub const FRAME_CONTENT_TYPE: &str = "application/x-terminal-frames";

/// Create a chunked streaming response, one frame per event
pub fn chunked_json_stream<S>(stream: S, compress: bool) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = TerminalEvent> + Send + 'static,
{
    let byte_stream = stream.then(move |event| async move { encode_frame(&event, compress).await });

    // Frames are compressed one by one, so no Content-Encoding on the response itself
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, FRAME_CONTENT_TYPE)
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from_stream(byte_stream))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// `u32` big-endian payload length followed by the (optionally Brotli) JSON payload
pub async fn encode_frame(event: &TerminalEvent, compress: bool) -> Result<Bytes, std::io::Error> {
    let json = serde_json::to_vec(event).map_err(std::io::Error::other)?;

    let payload = if compress { brotli(&json).await? } else { json };

    let length = u32::try_from(payload.len()).map_err(std::io::Error::other)?;
    let mut frame = BytesMut::with_capacity(4 + payload.len());
    frame.put_u32(length);
    frame.put_slice(&payload);

    Ok(frame.freeze())
}

/// Helper to create a streaming response from an event stream
pub fn stream_events<S>(events: S, compress: bool) -> impl IntoResponse
where
    S: Stream<Item = TerminalEvent> + Send + 'static,
{
    match chunked_json_stream(events, compress) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
