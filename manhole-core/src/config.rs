//! Behavioural constants for the report form.

use crate::location::PositionOptions;

/// Largest photo accepted by Photo Intake (5 MiB).
pub const MAX_PHOTO_BYTES: u64 = 5 * 1024 * 1024;

/// Media types accepted for the photo must start with this prefix.
pub const IMAGE_MEDIA_TYPE_PREFIX: &str = "image/";

/// Geolocation timeout in milliseconds.
pub const LOCATION_TIMEOUT_MS: u32 = 10_000;

/// Cached fixes are never accepted.
pub const LOCATION_MAXIMUM_AGE_MS: u32 = 0;

/// Tunables for one form instance.
#[derive(Debug, Clone, PartialEq)]
pub struct FormConfig {
    pub max_photo_bytes: u64,
    pub image_media_type_prefix: &'static str,
    pub position_options: PositionOptions,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            max_photo_bytes: MAX_PHOTO_BYTES,
            image_media_type_prefix: IMAGE_MEDIA_TYPE_PREFIX,
            position_options: PositionOptions::default(),
        }
    }
}
