//! Streaming `multipart/form-data` bodies.
//!
//! Backup uploads send a single `file` part whose content is streamed from
//! the caller without buffering the archive in memory.

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use bytes::Bytes;
use futures::{Stream, stream};
use http_body::SizeHint;

use crate::SupervisorError;

const DEFAULT_FILENAME: &str = "backup.tar";

type FileStream = Pin<Box<dyn Stream<Item = io::Result<Bytes>> + Send>>;

/// A single-file multipart upload.
///
/// Turned into a request body with `TransportBody::from`.
pub struct MultipartUpload {
    boundary: String,
    field: String,
    filename: String,
    file_content_type: String,
    file: FileStream,
    file_len: Option<u64>,
}

impl MultipartUpload {
    /// Upload the given byte stream as the `file` field.
    pub fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = io::Result<Bytes>> + Send + 'static,
    {
        Self {
            boundary: format!("hasupervisor-{}", uuid::Uuid::new_v4().simple()),
            field: "file".to_owned(),
            filename: DEFAULT_FILENAME.to_owned(),
            file_content_type: "application/x-tar".to_owned(),
            file: Box::pin(stream),
            file_len: None,
        }
    }

    /// Upload an in-memory buffer. The request carries a `Content-Length`.
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        let data = data.into();
        let len = data.len() as u64;
        let mut upload = Self::new(stream::iter([Ok(data)]));
        upload.file_len = Some(len);
        upload
    }

    pub fn filename<S: Into<String>>(mut self, filename: S) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn field<S: Into<String>>(mut self, field: S) -> Self {
        self.field = field.into();
        self
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value for the request `Content-Type` header.
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    pub(crate) fn into_frames(self) -> UploadFrames {
        let head = format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
            self.boundary,
            escape_quoted(&self.field),
            escape_quoted(&self.filename),
            self.file_content_type,
        );
        UploadFrames {
            head: Some(Bytes::from(head)),
            file: Some(self.file),
            file_remaining: self.file_len,
            tail: Some(Bytes::from(format!("\r\n--{}--\r\n", self.boundary))),
        }
    }
}

fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

impl std::fmt::Debug for MultipartUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultipartUpload")
            .field("boundary", &self.boundary)
            .field("field", &self.field)
            .field("filename", &self.filename)
            .field("file_len", &self.file_len)
            .finish_non_exhaustive()
    }
}

/// Wire frames of an upload, from the part head to the closing boundary.
pub struct UploadFrames {
    head: Option<Bytes>,
    file: Option<FileStream>,
    /// Bytes the file has yet to yield, when known up front.
    file_remaining: Option<u64>,
    tail: Option<Bytes>,
}

impl UploadFrames {
    pub(crate) fn poll_chunk(
        &mut self,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Bytes, SupervisorError>>> {
        if let Some(head) = self.head.take() {
            return Poll::Ready(Some(Ok(head)));
        }
        while let Some(file) = self.file.as_mut() {
            match ready!(file.as_mut().poll_next(cx)) {
                Some(Ok(chunk)) if chunk.is_empty() => {}
                Some(Ok(chunk)) => {
                    self.file_remaining = self
                        .file_remaining
                        .map(|n| n.saturating_sub(chunk.len() as u64));
                    return Poll::Ready(Some(Ok(chunk)));
                }
                Some(Err(e)) => {
                    // The part can't be closed cleanly; end the body on the error.
                    self.file = None;
                    self.tail = None;
                    return Poll::Ready(Some(Err(SupervisorError::Encode(format!(
                        "reading upload failed: {e}"
                    )))));
                }
                None => self.file = None,
            }
        }
        Poll::Ready(self.tail.take().map(Ok))
    }

    pub(crate) fn is_done(&self) -> bool {
        self.head.is_none() && self.file.is_none() && self.tail.is_none()
    }

    pub(crate) fn size_hint(&self) -> SizeHint {
        let framing = [&self.head, &self.tail]
            .into_iter()
            .flatten()
            .map(|b| b.len() as u64)
            .sum::<u64>();
        match (&self.file, self.file_remaining) {
            (None, _) => SizeHint::with_exact(framing),
            (Some(_), Some(remaining)) => SizeHint::with_exact(framing + remaining),
            (Some(_), None) => {
                let mut hint = SizeHint::new();
                hint.set_lower(framing);
                hint
            }
        }
    }
}

impl std::fmt::Debug for UploadFrames {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFrames")
            .field("file_remaining", &self.file_remaining)
            .field("done", &self.is_done())
            .finish_non_exhaustive()
    }
}
