//! Streamed response bodies.
//!
//! [`ByteStream`] yields the chunks of a response body as they arrive. It is
//! single pass and forward only.
//!
//! # Cancellation
//!
//! Dropping a [`ByteStream`] before it is exhausted closes the underlying
//! connection instead of returning it to the pool half read.

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use futures::{Stream, StreamExt};
use http_body::Body;
use hyper::body::Incoming;

use crate::SupervisorError;

/// A lazy stream of response body chunks backed by the live connection.
///
/// # Example
///
/// ```ignore
/// use futures::StreamExt;
///
/// let mut stream = client.backups().download_backup("7fed74c8", None).await?;
/// while let Some(chunk) = stream.next().await {
///     file.write_all(&chunk?).await?;
/// }
/// ```
pub struct ByteStream {
    body: Incoming,
    content_length: Option<u64>,
    done: bool,
}

impl ByteStream {
    pub(crate) fn new(body: Incoming, content_length: Option<u64>) -> Self {
        Self {
            body,
            content_length,
            done: false,
        }
    }

    /// The `Content-Length` announced by the Supervisor, if any.
    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Read the remaining chunks into one buffer.
    pub async fn collect_bytes(mut self) -> Result<Bytes, SupervisorError> {
        let mut buf = BytesMut::new();
        while let Some(chunk) = self.next().await {
            buf.extend_from_slice(&chunk?);
        }
        Ok(buf.freeze())
    }
}

impl Stream for ByteStream {
    type Item = Result<Bytes, SupervisorError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            if self.done {
                return Poll::Ready(None);
            }
            match Pin::new(&mut self.body).poll_frame(cx) {
                Poll::Ready(Some(Ok(frame))) => match frame.into_data() {
                    Ok(data) if !data.is_empty() => return Poll::Ready(Some(Ok(data))),
                    // Empty chunks and trailers carry nothing for the caller
                    _ => continue,
                },
                Poll::Ready(Some(Err(e))) => {
                    self.done = true;
                    return Poll::Ready(Some(Err(SupervisorError::Connection(format!(
                        "stream error: {e}"
                    )))));
                }
                Poll::Ready(None) => {
                    self.done = true;
                    return Poll::Ready(None);
                }
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

impl std::fmt::Debug for ByteStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteStream")
            .field("content_length", &self.content_length)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
