//! Error taxonomy for the report form.
//!
//! Every variant is recoverable. The `Display` text is the message shown to the
//! user, and [`FormError`] is the single error the form holds at a time.

use thiserror::Error;

/// Failures while acquiring the device location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Geolocation is not supported by your browser. Please enter the address manually.")]
    UnsupportedEnvironment,
    #[error("Location access was denied. Please allow location access in your browser settings. {help}")]
    PermissionDenied { help: &'static str },
    #[error("Location information is unavailable. Please check your GPS and internet connection.")]
    PositionUnavailable,
    #[error("The location request timed out. Please check your internet connection and try again.")]
    Timeout,
    #[error("An unknown error occurred while getting your location. Please try again or enter the address manually.")]
    Unknown,
}

impl LocationError {
    pub fn kind(&self) -> &'static str {
        match self {
            LocationError::UnsupportedEnvironment => "UnsupportedEnvironment",
            LocationError::PermissionDenied { .. } => "PermissionDenied",
            LocationError::PositionUnavailable => "PositionUnavailable",
            LocationError::Timeout => "Timeout",
            LocationError::Unknown => "Unknown",
        }
    }
}

/// Reasons a selected file cannot be staged as the photo.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoError {
    #[error("Please upload an image file.")]
    InvalidFileType { media_type: String },
    #[error("Image size should be less than 5MB.")]
    FileTooLarge { size: u64 },
}

impl PhotoError {
    pub fn kind(&self) -> &'static str {
        match self {
            PhotoError::InvalidFileType { .. } => "InvalidFileType",
            PhotoError::FileTooLarge { .. } => "FileTooLarge",
        }
    }
}

/// The first rule a draft breaks when it is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Please upload a photo.")]
    MissingPhoto,
    #[error("Please get your current location.")]
    MissingLocation,
    #[error("Please select an issue type.")]
    MissingIssueType,
    #[error("Please enter a reference address.")]
    MissingAddress,
}

impl SubmissionError {
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionError::MissingPhoto => "MissingPhoto",
            SubmissionError::MissingLocation => "MissingLocation",
            SubmissionError::MissingIssueType => "MissingIssueType",
            SubmissionError::MissingAddress => "MissingAddress",
        }
    }
}

/// The error currently shown on the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error(transparent)]
    Photo(#[from] PhotoError),
    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl FormError {
    pub fn kind(&self) -> &'static str {
        match self {
            FormError::Location(err) => err.kind(),
            FormError::Photo(err) => err.kind(),
            FormError::Submission(err) => err.kind(),
        }
    }
}
