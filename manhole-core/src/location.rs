//! Location Acquirer: one high-accuracy fix from the positioning capability,
//! mapped onto [`LocationError`] on failure.

use crate::browser::Browser;
use crate::config::{FormConfig, LOCATION_MAXIMUM_AGE_MS, LOCATION_TIMEOUT_MS};
use crate::coordinate::{Coordinate, Fix};
use crate::error::LocationError;

/// Options passed with every position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    pub timeout_ms: u32,
    pub maximum_age_ms: u32,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout_ms: LOCATION_TIMEOUT_MS,
            maximum_age_ms: LOCATION_MAXIMUM_AGE_MS,
        }
    }
}

/// A failure as the platform reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionFailure {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Other(String),
}

impl PositionFailure {
    /// Map a W3C `GeolocationPositionError.code` (1, 2, 3) to a failure.
    pub fn from_code(code: u16, message: impl Into<String>) -> Self {
        match code {
            1 => PositionFailure::PermissionDenied,
            2 => PositionFailure::PositionUnavailable,
            3 => PositionFailure::Timeout,
            _ => PositionFailure::Other(message.into()),
        }
    }
}

/// The device positioning capability.
///
/// Implementations run on the single UI thread, so the returned futures are not
/// required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait Positioning {
    /// Whether the host exposes a positioning capability at all.
    fn is_supported(&self) -> bool;

    /// Request a single fix.
    async fn current_position(&self, options: PositionOptions) -> Result<Fix, PositionFailure>;
}

impl<P: Positioning> Positioning for &P {
    fn is_supported(&self) -> bool {
        (**self).is_supported()
    }

    async fn current_position(&self, options: PositionOptions) -> Result<Fix, PositionFailure> {
        (**self).current_position(options).await
    }
}

/// Wraps a [`Positioning`] capability with the form's request options and
/// failure messages.
#[derive(Debug, Clone)]
pub struct LocationAcquirer<P> {
    positioning: P,
    options: PositionOptions,
    browser: Browser,
}

impl<P: Positioning> LocationAcquirer<P> {
    pub fn new(positioning: P) -> Self {
        Self {
            positioning,
            options: PositionOptions::default(),
            browser: Browser::Other,
        }
    }

    /// Build an acquirer that requests fixes with `config`'s position options.
    pub fn from_config(positioning: P, config: &FormConfig) -> Self {
        Self::new(positioning).with_options(config.position_options)
    }

    pub fn with_options(mut self, options: PositionOptions) -> Self {
        self.options = options;
        self
    }

    /// Select which browser's help text accompanies a permission failure.
    pub fn with_browser(mut self, browser: Browser) -> Self {
        self.browser = browser;
        self
    }

    pub fn options(&self) -> PositionOptions {
        self.options
    }

    /// Request one fix. Does not retry.
    pub async fn acquire(&self) -> Result<Coordinate, LocationError> {
        self.acquire_with(self.options).await
    }

    /// Request one fix with `options` instead of the acquirer's own.
    pub async fn acquire_with(&self, options: PositionOptions) -> Result<Coordinate, LocationError> {
        if !self.positioning.is_supported() {
            log::warn!("[Manhole] location: positioning capability unavailable");
            return Err(LocationError::UnsupportedEnvironment);
        }

        match self.positioning.current_position(options).await {
            Ok(fix) => {
                log::info!(
                    "[Manhole] location: fix {:.6}, {:.6} (accuracy {:?} m)",
                    fix.latitude,
                    fix.longitude,
                    fix.accuracy
                );
                Ok(fix.into())
            }
            Err(failure) => {
                let err = self.classify(failure);
                log::warn!("[Manhole] location: request failed with {}", err.kind());
                Err(err)
            }
        }
    }

    fn classify(&self, failure: PositionFailure) -> LocationError {
        match failure {
            PositionFailure::PermissionDenied => LocationError::PermissionDenied {
                help: self.browser.location_help(),
            },
            PositionFailure::PositionUnavailable => LocationError::PositionUnavailable,
            PositionFailure::Timeout => LocationError::Timeout,
            PositionFailure::Other(message) => {
                log::debug!("[Manhole] location: unclassified failure: {message}");
                LocationError::Unknown
            }
        }
    }
}
