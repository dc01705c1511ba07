//! The record emitted by a successful submit, and where it goes.

use chrono::NaiveDate;
use serde::Serialize;

use crate::coordinate::Coordinate;
use crate::issue::IssueCategory;
use crate::photo::PhotoFile;

/// Snapshot of a complete draft.
#[derive(Debug, Clone, PartialEq)]
pub struct Report<P> {
    pub photo: P,
    pub coordinate: Coordinate,
    pub issue_category: IssueCategory,
    pub reference_address: String,
    pub report_date: NaiveDate,
}

/// Serialisable view of a [`Report`], with the photo reduced to its metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub photo_name: String,
    pub photo_media_type: String,
    pub photo_size: u64,
    pub coordinate: Coordinate,
    pub issue_category: IssueCategory,
    pub reference_address: String,
    pub report_date: NaiveDate,
}

impl<P: PhotoFile> Report<P> {
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            photo_name: self.photo.name(),
            photo_media_type: self.photo.media_type(),
            photo_size: self.photo.size(),
            coordinate: self.coordinate,
            issue_category: self.issue_category,
            reference_address: self.reference_address.clone(),
            report_date: self.report_date,
        }
    }
}

/// Receives each completed report.
pub trait ReportSink<P> {
    fn submit(&self, report: &Report<P>);
}

impl<P, S: ReportSink<P>> ReportSink<P> for &S {
    fn submit(&self, report: &Report<P>) {
        (**self).submit(report)
    }
}

/// Logs the report summary as JSON. Stands in for a real backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl<P: PhotoFile> ReportSink<P> for LogSink {
    fn submit(&self, report: &Report<P>) {
        match serde_json::to_string(&report.summary()) {
            Ok(json) => log::info!("[Manhole] report submitted: {json}"),
            Err(e) => log::warn!("[Manhole] report submitted but could not be serialized: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakePhoto;

    fn sample() -> Report<FakePhoto> {
        Report {
            photo: FakePhoto::new("cover.jpg", "image/jpeg", 2048),
            coordinate: Coordinate::new(40.7128, -74.006),
            issue_category: IssueCategory::MissingCover,
            reference_address: "12 Main St".to_string(),
            report_date: NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
        }
    }

    #[test]
    fn test_summary_json_shape() {
        let json = serde_json::to_value(sample().summary()).unwrap();
        assert_eq!(json["photo_name"], "cover.jpg");
        assert_eq!(json["photo_size"], 2048);
        assert_eq!(json["coordinate"]["latitude"], 40.7128);
        assert_eq!(json["issue_category"], "Missing Manhole");
        assert_eq!(json["reference_address"], "12 Main St");
        assert_eq!(json["report_date"], "2024-05-17");
    }

    #[test]
    fn test_log_sink_accepts_report() {
        LogSink.submit(&sample());
    }
}
