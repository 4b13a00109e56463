//! Request bodies handed to hyper.
//!
//! Supervisor calls send nothing, a payload already in memory (JSON or raw
//! bytes), or a backup archive framed as `multipart/form-data`. Uploads are
//! never buffered; their frames are pulled from the caller's stream as hyper
//! asks for them.

use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use http_body::{Body, Frame, SizeHint};

use super::multipart::{MultipartUpload, UploadFrames};
use crate::SupervisorError;

/// Body of one Supervisor request.
pub enum TransportBody {
    Empty,
    /// A JSON or raw payload, sent as a single frame.
    Buffered(Option<Bytes>),
    /// A multipart backup upload.
    Upload(UploadFrames),
}

impl TransportBody {
    pub fn empty() -> Self {
        TransportBody::Empty
    }

    pub fn buffered(data: impl Into<Bytes>) -> Self {
        TransportBody::Buffered(Some(data.into()))
    }
}

impl From<MultipartUpload> for TransportBody {
    fn from(upload: MultipartUpload) -> Self {
        TransportBody::Upload(upload.into_frames())
    }
}

impl Body for TransportBody {
    type Data = Bytes;
    type Error = SupervisorError;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Bytes>, SupervisorError>>> {
        match self.get_mut() {
            TransportBody::Empty => Poll::Ready(None),
            TransportBody::Buffered(data) => Poll::Ready(data.take().map(|d| Ok(Frame::data(d)))),
            TransportBody::Upload(frames) => frames
                .poll_chunk(cx)
                .map(|chunk| chunk.map(|r| r.map(Frame::data))),
        }
    }

    fn is_end_stream(&self) -> bool {
        match self {
            TransportBody::Empty => true,
            TransportBody::Buffered(data) => data.is_none(),
            TransportBody::Upload(frames) => frames.is_done(),
        }
    }

    fn size_hint(&self) -> SizeHint {
        match self {
            TransportBody::Empty => SizeHint::with_exact(0),
            TransportBody::Buffered(data) => {
                SizeHint::with_exact(data.as_ref().map_or(0, |d| d.len() as u64))
            }
            TransportBody::Upload(frames) => frames.size_hint(),
        }
    }
}

impl std::fmt::Debug for TransportBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportBody::Empty => f.write_str("Empty"),
            TransportBody::Buffered(data) => f
                .debug_tuple("Buffered")
                .field(&data.as_ref().map(Bytes::len))
                .finish(),
            TransportBody::Upload(frames) => f.debug_tuple("Upload").field(frames).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_empty_body() {
        let body = TransportBody::empty();
        assert!(body.is_end_stream());
        assert_eq!(body.size_hint().exact(), Some(0));
        assert!(body.collect().await.unwrap().to_bytes().is_empty());
    }

    #[tokio::test]
    async fn test_buffered_body_is_one_frame() {
        let data = Bytes::from_static(br#"{"protected":true}"#);
        let mut body = TransportBody::buffered(data.clone());
        assert_eq!(body.size_hint().exact(), Some(data.len() as u64));

        let frame = body.frame().await.unwrap().unwrap();
        assert_eq!(frame.into_data().unwrap(), data);
        assert!(body.is_end_stream());
        assert!(body.frame().await.is_none());
    }

    #[tokio::test]
    async fn test_upload_body_ends_after_closing_boundary() {
        let mut body = TransportBody::from(MultipartUpload::from_bytes("tar"));
        assert!(!body.is_end_stream());

        let mut frames = 0;
        while let Some(frame) = body.frame().await {
            frame.unwrap();
            frames += 1;
        }
        assert_eq!(frames, 3);
        assert!(body.is_end_stream());
        assert_eq!(body.size_hint().exact(), Some(0));
    }

    #[test]
    fn test_debug_hides_payload() {
        let body = TransportBody::buffered("secret-password");
        assert_eq!(format!("{body:?}"), "Buffered(Some(15))");
    }
}
