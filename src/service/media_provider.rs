use async_trait::async_trait;
use thiserror::Error;

use crate::services::composition::{media_kind, MediaKind};

/// A binary blob headed for the third-party media host.
#[derive(Debug, Clone)]
pub struct MediaPayload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl MediaPayload {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_video(&self) -> bool {
        self.content_type.starts_with("video/") || media_kind(&self.filename) == MediaKind::Video
    }
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("payload of {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },

    #[error("media upload failed: {0}")]
    Upload(String),

    #[error("media host unavailable: {0}")]
    Unavailable(String),
}

/// The third-party media host. Uploads return a stable public URL; video
/// uploads can run to hundreds of MB and minutes, and failures are
/// surfaced to the caller with no automatic retry.
#[async_trait]
pub trait MediaProvider {
    async fn upload(&self, payload: &MediaPayload) -> Result<String, MediaError>;

    async fn delete(&self, reference: &str) -> Result<(), MediaError>;
}

/// Size gate run before any bytes leave the process, so an oversized
/// payload is rejected with a signal distinct from upstream failure.
pub fn enforce_ceiling(payload: &MediaPayload, limit: usize) -> Result<(), MediaError> {
    if payload.size() > limit {
        return Err(MediaError::TooLarge {
            size: payload.size(),
            limit,
        });
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Recording fake for the media host. Uploads yield predictable URLs;
    /// `fail_uploads` simulates the host being down.
    #[derive(Debug, Default)]
    pub struct MockMediaProvider {
        pub uploads: Mutex<Vec<String>>,
        pub deletes: Mutex<Vec<String>>,
        pub fail_uploads: bool,
    }

    impl MockMediaProvider {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn failing() -> Self {
            Self {
                fail_uploads: true,
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl MediaProvider for MockMediaProvider {
        async fn upload(&self, payload: &MediaPayload) -> Result<String, MediaError> {
            if self.fail_uploads {
                return Err(MediaError::Upload("host rejected the upload".to_string()));
            }
            let url = format!("https://media.test/{}", payload.filename);
            self.uploads.lock().unwrap().push(url.clone());
            Ok(url)
        }

        async fn delete(&self, reference: &str) -> Result<(), MediaError> {
            self.deletes.lock().unwrap().push(reference.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(filename: &str, content_type: &str, len: usize) -> MediaPayload {
        MediaPayload {
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            bytes: vec![0; len],
        }
    }

    #[test]
    fn test_ceiling_enforced() {
        let small = payload("a.jpg", "image/jpeg", 10);
        assert!(enforce_ceiling(&small, 100).is_ok());

        let big = payload("b.jpg", "image/jpeg", 101);
        match enforce_ceiling(&big, 100) {
            Err(MediaError::TooLarge { size, limit }) => {
                assert_eq!(size, 101);
                assert_eq!(limit, 100);
            }
            other => panic!("expected TooLarge, got {other:?}"),
        }
    }

    #[test]
    fn test_video_detection() {
        assert!(payload("clip.mp4", "application/octet-stream", 1).is_video());
        assert!(payload("clip.bin", "video/mp4", 1).is_video());
        assert!(!payload("photo.jpg", "image/jpeg", 1).is_video());
    }
}
