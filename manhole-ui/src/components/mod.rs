//! Reusable Dioxus RSX components for the report form.

mod address_input;
mod busy_indicator;
mod error_display;
mod form_header;
mod issue_type_selector;
mod location_panel;
mod photo_picker;
mod report_date_picker;
mod submit_bar;
mod submitted_notice;

pub use address_input::AddressInput;
pub use busy_indicator::BusyIndicator;
pub use error_display::ErrorDisplay;
pub use form_header::FormHeader;
pub use issue_type_selector::IssueTypeSelector;
pub use location_panel::LocationPanel;
pub use photo_picker::PhotoPicker;
pub use report_date_picker::ReportDatePicker;
pub use submit_bar::SubmitBar;
pub use submitted_notice::SubmittedNotice;
