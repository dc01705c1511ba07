//! Deterministic stand-ins for the platform capabilities.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::coordinate::Fix;
use crate::location::{PositionFailure, PositionOptions, Positioning};
use crate::photo::{self, PhotoFile, PreviewError, PreviewReader};
use crate::report::{Report, ReportSink};

/// Positioning that replays scripted responses in order.
#[derive(Debug, Default)]
pub struct FakePositioning {
    supported: bool,
    responses: RefCell<VecDeque<Result<Fix, PositionFailure>>>,
    requests: RefCell<Vec<PositionOptions>>,
}

impl FakePositioning {
    pub fn new() -> Self {
        Self {
            supported: true,
            ..Self::default()
        }
    }

    /// A host with no positioning capability.
    pub fn unsupported() -> Self {
        Self::default()
    }

    /// Queue the outcome of the next request.
    pub fn respond(&self, response: Result<Fix, PositionFailure>) {
        self.responses.borrow_mut().push_back(response);
    }

    /// Options of every request made so far.
    pub fn requests(&self) -> Vec<PositionOptions> {
        self.requests.borrow().clone()
    }
}

impl Positioning for FakePositioning {
    fn is_supported(&self) -> bool {
        self.supported
    }

    async fn current_position(&self, options: PositionOptions) -> Result<Fix, PositionFailure> {
        self.requests.borrow_mut().push(options);
        let next = self.responses.borrow_mut().pop_front();
        next.unwrap_or_else(|| Err(PositionFailure::Other("no scripted response".to_string())))
    }
}

/// An in-memory file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakePhoto {
    pub name: String,
    pub media_type: String,
    pub size: u64,
    pub bytes: Vec<u8>,
}

impl FakePhoto {
    /// A file that reports `size` bytes without carrying them.
    pub fn new(name: &str, media_type: &str, size: u64) -> Self {
        Self {
            name: name.to_string(),
            media_type: media_type.to_string(),
            size,
            bytes: Vec::new(),
        }
    }

    pub fn with_bytes(mut self, bytes: Vec<u8>) -> Self {
        self.bytes = bytes;
        self
    }
}

impl PhotoFile for FakePhoto {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }
}

/// Encodes a [`FakePhoto`]'s bytes immediately. A photo named `unreadable*`
/// fails to read.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakePreviewReader;

impl PreviewReader<FakePhoto> for FakePreviewReader {
    async fn read_data_uri(&self, file: &FakePhoto) -> Result<String, PreviewError> {
        if file.name.starts_with("unreadable") {
            return Err(PreviewError {
                name: file.name.clone(),
                reason: "simulated read failure".to_string(),
            });
        }
        Ok(photo::data_uri(&file.media_type, &file.bytes))
    }
}

/// Keeps every submitted report.
#[derive(Debug)]
pub struct RecordingSink<P> {
    reports: RefCell<Vec<Report<P>>>,
}

impl<P> Default for RecordingSink<P> {
    fn default() -> Self {
        Self {
            reports: RefCell::new(Vec::new()),
        }
    }
}

impl<P: Clone> RecordingSink<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<Report<P>> {
        self.reports.borrow().clone()
    }
}

impl<P: Clone> ReportSink<P> for RecordingSink<P> {
    fn submit(&self, report: &Report<P>) {
        self.reports.borrow_mut().push(report.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unscripted_request_fails() {
        let positioning = FakePositioning::new();
        let result = positioning.current_position(PositionOptions::default()).await;
        assert!(matches!(result, Err(PositionFailure::Other(_))));
        assert_eq!(positioning.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_unreadable_photo() {
        let file = FakePhoto::new("unreadable.jpg", "image/jpeg", 3);
        let err = FakePreviewReader.read_data_uri(&file).await.unwrap_err();
        assert_eq!(err.name, "unreadable.jpg");
    }
}
