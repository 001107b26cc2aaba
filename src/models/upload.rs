use std::borrow::Cow;
use std::path::PathBuf;

/// Where the bytes of an uploaded photo live.
#[derive(Debug, Clone)]
pub enum PhotoSource {
    /// Already persisted to disk by the upload layer.
    Path(PathBuf),
    /// Held in memory.
    Buffer(Vec<u8>),
}

/// A photo submitted to FaceX.
///
/// `original_name` is the client-side filename and is only used for
/// diagnostics and upload error reporting.
#[derive(Debug, Clone)]
pub struct UploadTarget {
    pub source: PhotoSource,
    pub original_name: String,
}

impl UploadTarget {
    pub fn from_path(path: impl Into<PathBuf>, original_name: impl Into<String>) -> Self {
        Self {
            source: PhotoSource::Path(path.into()),
            original_name: original_name.into(),
        }
    }

    pub fn from_buffer(data: impl Into<Vec<u8>>, original_name: impl Into<String>) -> Self {
        Self {
            source: PhotoSource::Buffer(data.into()),
            original_name: original_name.into(),
        }
    }

    /// Load the photo bytes, reading from disk when the source is a path.
    pub async fn read_bytes(&self) -> std::io::Result<Cow<'_, [u8]>> {
        match &self.source {
            PhotoSource::Path(path) => Ok(Cow::Owned(tokio::fs::read(path).await?)),
            PhotoSource::Buffer(data) => Ok(Cow::Borrowed(data.as_slice())),
        }
    }
}
