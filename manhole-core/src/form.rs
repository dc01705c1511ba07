//! Report Form Controller.
//!
//! [`ReportForm`] is the one state record behind the page: the draft fields
//! plus the error and loading flags. Every user action is a method on it.

use chrono::{Local, NaiveDate};
use std::ops::{Deref, DerefMut};

use crate::config::FormConfig;
use crate::coordinate::Coordinate;
use crate::error::{FormError, LocationError, PhotoError, SubmissionError};
use crate::issue::IssueCategory;
use crate::location::{LocationAcquirer, Positioning};
use crate::photo::{self, PhotoFile, PreviewError, PreviewReader};
use crate::report::{Report, ReportSink};

/// Today's local calendar date.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Where the last submit attempt left the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Success,
    Rejected,
}

/// Identifies the photo a pending preview belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTicket(u64);

/// The draft report plus the error and loading flags shown with it.
#[derive(Debug, Clone)]
pub struct ReportForm<P> {
    /// Photo limits and geolocation request options
    config: FormConfig,
    /// Source of "today" for the default report date
    clock: fn() -> NaiveDate,
    /// Last acquired location (None until a fix arrives)
    coordinate: Option<Coordinate>,
    /// Free-text address near the defect
    reference_address: String,
    /// Selected defect kind
    issue_category: Option<IssueCategory>,
    /// Staged photo handle
    photo: Option<P>,
    /// Data URI of the staged photo, once derived
    photo_preview: Option<String>,
    /// Bumped whenever the staged photo changes or is removed.
    photo_generation: u64,
    /// Date carried by the report, defaults to today
    report_date: NaiveDate,
    /// The single error currently shown
    error: Option<FormError>,
    /// Whether a location request or submit is in flight
    loading: bool,
    /// Outcome of the last submit attempt
    submission: SubmissionState,
}

impl<P: PhotoFile> Default for ReportForm<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PhotoFile> ReportForm<P> {
    pub fn new() -> Self {
        Self::with_clock(local_today)
    }

    /// Build an empty form whose "today" comes from `clock`.
    pub fn with_clock(clock: fn() -> NaiveDate) -> Self {
        Self {
            config: FormConfig::default(),
            clock,
            coordinate: None,
            reference_address: String::new(),
            issue_category: None,
            photo: None,
            photo_preview: None,
            photo_generation: 0,
            report_date: clock(),
            error: None,
            loading: false,
            submission: SubmissionState::Idle,
        }
    }

    pub fn with_config(mut self, config: FormConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    pub fn reference_address(&self) -> &str {
        &self.reference_address
    }

    pub fn issue_category(&self) -> Option<IssueCategory> {
        self.issue_category
    }

    pub fn photo(&self) -> Option<&P> {
        self.photo.as_ref()
    }

    pub fn photo_preview(&self) -> Option<&str> {
        self.photo_preview.as_deref()
    }

    pub fn report_date(&self) -> NaiveDate {
        self.report_date
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.submission
    }

    pub fn set_reference_address(&mut self, address: impl Into<String>) {
        self.reference_address = address.into();
    }

    pub fn set_issue_category(&mut self, category: Option<IssueCategory>) {
        self.issue_category = category;
    }

    /// Select the category whose label is `label`. Labels outside the two
    /// admissible values are logged and leave the selection unchanged.
    pub fn select_issue_label(&mut self, label: &str) {
        if label.is_empty() {
            self.issue_category = None;
            return;
        }
        match label.parse::<IssueCategory>() {
            Ok(category) => self.issue_category = Some(category),
            Err(e) => log::warn!("[Manhole] form: {e}"),
        }
    }

    pub fn set_report_date(&mut self, date: NaiveDate) {
        self.report_date = date;
    }

    // ─── Location ───

    /// Mark a location request as in flight.
    pub fn begin_location_request(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the outcome of a location request. When requests overlap, the
    /// last call wins.
    pub fn finish_location_request(&mut self, result: Result<Coordinate, LocationError>) {
        match result {
            Ok(coordinate) => {
                self.coordinate = Some(coordinate);
                self.error = None;
            }
            Err(err) => self.error = Some(err.into()),
        }
        self.loading = false;
    }

    /// Acquire the current location with this form's position options and
    /// store it on the form.
    pub async fn locate<L: Positioning>(
        &mut self,
        acquirer: &LocationAcquirer<L>,
    ) -> Result<Coordinate, LocationError> {
        let options = self.config.position_options;
        // The guard only matters when this future is dropped before the fix arrives.
        let mut form = InFlight::enter(self);
        form.begin_location_request();
        let result = acquirer.acquire_with(options).await;
        form.finish_location_request(result.clone());
        result
    }

    // ─── Photo ───

    /// Validate `file` and stage it, replacing any previous photo and preview.
    ///
    /// On rejection the staged photo is left untouched and the error is shown.
    pub fn stage_photo(&mut self, file: P) -> Result<PreviewTicket, PhotoError> {
        if let Err(err) = photo::validate(&file, &self.config) {
            log::warn!(
                "[Manhole] photo: rejected {} ({}, {} bytes): {}",
                file.name(),
                file.media_type(),
                file.size(),
                err.kind()
            );
            self.error = Some(err.clone().into());
            return Err(err);
        }

        log::info!("[Manhole] photo: staged {} ({} bytes)", file.name(), file.size());
        self.photo = Some(file);
        self.photo_preview = None;
        self.photo_generation += 1;
        self.error = None;
        Ok(PreviewTicket(self.photo_generation))
    }

    /// Store a derived preview. Returns `false` and drops the preview if the
    /// photo it was derived from is no longer staged.
    pub fn finish_preview(
        &mut self,
        ticket: PreviewTicket,
        preview: Result<String, PreviewError>,
    ) -> bool {
        if ticket.0 != self.photo_generation || self.photo.is_none() {
            log::debug!("[Manhole] photo: discarding preview for a replaced photo");
            return false;
        }
        match preview {
            Ok(uri) => {
                self.photo_preview = Some(uri);
                true
            }
            Err(e) => {
                log::warn!("[Manhole] photo: preview unavailable: {e}");
                false
            }
        }
    }

    /// Stage `file` and wait for its preview.
    pub async fn stage_photo_with_preview<R: PreviewReader<P>>(
        &mut self,
        file: P,
        reader: R,
    ) -> Result<(), PhotoError> {
        let ticket = self.stage_photo(file.clone())?;
        let preview = reader.read_data_uri(&file).await;
        self.finish_preview(ticket, preview);
        Ok(())
    }

    pub fn remove_photo(&mut self) {
        self.photo = None;
        self.photo_preview = None;
        self.photo_generation += 1;
    }

    // ─── Submission ───

    pub fn is_submittable(&self) -> bool {
        self.snapshot().is_ok()
    }

    /// Check the draft in the fixed order photo, location, issue type, address.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        self.snapshot().map(|_| ())
    }

    fn snapshot(&self) -> Result<Report<P>, SubmissionError> {
        let photo = self.photo.clone().ok_or(SubmissionError::MissingPhoto)?;
        let coordinate = self.coordinate.ok_or(SubmissionError::MissingLocation)?;
        let issue_category = self.issue_category.ok_or(SubmissionError::MissingIssueType)?;
        if self.reference_address.trim().is_empty() {
            return Err(SubmissionError::MissingAddress);
        }
        Ok(Report {
            photo,
            coordinate,
            issue_category,
            reference_address: self.reference_address.clone(),
            report_date: self.report_date,
        })
    }

    /// Validate the draft and, if complete, hand the report to `sink` and
    /// reset the form.
    ///
    /// The loading flag is raised for the duration and cleared on every exit,
    /// including a panicking sink.
    pub fn submit<S: ReportSink<P>>(&mut self, sink: S) -> Result<Report<P>, SubmissionError> {
        let mut form = InFlight::enter(self);
        form.error = None;
        form.submission = SubmissionState::Validating;

        let report = match form.snapshot() {
            Ok(report) => report,
            Err(err) => {
                log::debug!("[Manhole] submit: rejected with {}", err.kind());
                form.error = Some(err.into());
                form.submission = SubmissionState::Rejected;
                return Err(err);
            }
        };

        log::debug!("[Manhole] submit: draft complete");
        sink.submit(&report);
        form.reset();
        form.submission = SubmissionState::Success;
        Ok(report)
    }

    /// Return every field to its initial value; the date becomes today.
    pub fn reset(&mut self) {
        self.coordinate = None;
        self.reference_address.clear();
        self.issue_category = None;
        self.remove_photo();
        self.report_date = (self.clock)();
        self.error = None;
        self.submission = SubmissionState::Idle;
    }
}

/// Holds the loading flag up while borrowed; releases it when dropped.
struct InFlight<'a, P> {
    form: &'a mut ReportForm<P>,
}

impl<'a, P> InFlight<'a, P> {
    fn enter(form: &'a mut ReportForm<P>) -> Self {
        form.loading = true;
        Self { form }
    }
}

impl<P> Drop for InFlight<'_, P> {
    fn drop(&mut self) {
        self.form.loading = false;
    }
}

impl<P> Deref for InFlight<'_, P> {
    type Target = ReportForm<P>;

    fn deref(&self) -> &Self::Target {
        &*self.form
    }
}

impl<P> DerefMut for InFlight<'_, P> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.form
    }
}
