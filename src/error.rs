use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read source image {}: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("unsupported source image {}: {source}", .path.display())]
    UnsupportedFormat {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode {size}x{size} icon: {source}")]
    EncodeFailed {
        size: u32,
        #[source]
        source: ::png::EncodingError,
    },
    #[error("failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write manifest {}: {source}", .path.display())]
    ManifestWriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Sorts a decoder error into the two source-side kinds. Only a format
    /// the decoder cannot handle at all is unsupported; corrupt or truncated
    /// data in a known format counts as unreadable.
    pub fn from_decode(path: PathBuf, source: image::ImageError) -> Self {
        match source {
            image::ImageError::Unsupported(_) => Error::UnsupportedFormat { path, source },
            _ => Error::SourceUnreadable { path, source },
        }
    }
}
