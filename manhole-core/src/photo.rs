//! Photo Intake: validates a selected file and derives its preview.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

use crate::config::FormConfig;
use crate::error::PhotoError;

/// A user-selected file as the platform file picker supplies it.
pub trait PhotoFile: Clone {
    fn name(&self) -> String;
    fn media_type(&self) -> String;
    fn size(&self) -> u64;
}

/// Failure while reading a staged file for its preview.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to read {name}: {reason}")]
pub struct PreviewError {
    pub name: String,
    pub reason: String,
}

/// The asynchronous file-to-data-URI reader.
#[allow(async_fn_in_trait)]
pub trait PreviewReader<F: PhotoFile> {
    async fn read_data_uri(&self, file: &F) -> Result<String, PreviewError>;
}

impl<F: PhotoFile, R: PreviewReader<F>> PreviewReader<F> for &R {
    async fn read_data_uri(&self, file: &F) -> Result<String, PreviewError> {
        (**self).read_data_uri(file).await
    }
}

/// Check a file against the accepted media type and size limit.
///
/// The media type is checked first, so an oversized text file reports
/// `InvalidFileType`.
pub fn validate<F: PhotoFile>(file: &F, config: &FormConfig) -> Result<(), PhotoError> {
    let media_type = file.media_type();
    if !media_type.starts_with(config.image_media_type_prefix) {
        return Err(PhotoError::InvalidFileType { media_type });
    }
    let size = file.size();
    if size > config.max_photo_bytes {
        return Err(PhotoError::FileTooLarge { size });
    }
    Ok(())
}

/// Encode raw bytes as a `data:` URI.
pub fn data_uri(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakePhoto;

    #[test]
    fn test_rejects_non_image() {
        let file = FakePhoto::new("notes.txt", "text/plain", 120);
        let err = validate(&file, &FormConfig::default()).unwrap_err();
        assert_eq!(err.kind(), "InvalidFileType");
        assert_eq!(err.to_string(), "Please upload an image file.");
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let config = FormConfig::default();
        let at_limit = FakePhoto::new("a.jpg", "image/jpeg", 5_242_880);
        let over_limit = FakePhoto::new("b.jpg", "image/jpeg", 5_242_881);

        assert!(validate(&at_limit, &config).is_ok());
        assert_eq!(
            validate(&over_limit, &config),
            Err(PhotoError::FileTooLarge { size: 5_242_881 })
        );
    }

    #[test]
    fn test_media_type_checked_before_size() {
        let file = FakePhoto::new("dump.bin", "application/octet-stream", 10_000_000);
        let err = validate(&file, &FormConfig::default()).unwrap_err();
        assert_eq!(err.kind(), "InvalidFileType");
    }

    #[test]
    fn test_data_uri() {
        assert_eq!(data_uri("image/png", b"hi"), "data:image/png;base64,aGk=");
        assert_eq!(data_uri("image/gif", b""), "data:image/gif;base64,");
    }
}
