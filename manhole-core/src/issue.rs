//! Issue categories a report can carry.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The two admissible defect kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueCategory {
    #[serde(rename = "Missing Manhole")]
    MissingCover,
    #[serde(rename = "Damaged Manhole")]
    DamagedCover,
}

impl IssueCategory {
    pub const ALL: [IssueCategory; 2] = [IssueCategory::MissingCover, IssueCategory::DamagedCover];

    /// Label shown in the selector and carried in the emitted record.
    pub fn label(&self) -> &'static str {
        match self {
            IssueCategory::MissingCover => "Missing Manhole",
            IssueCategory::DamagedCover => "Damaged Manhole",
        }
    }
}

impl std::fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a selector hands back a label outside [`IssueCategory::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown issue category label: {0:?}")]
pub struct UnknownIssueCategory(pub String);

impl FromStr for IssueCategory {
    type Err = UnknownIssueCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IssueCategory::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| UnknownIssueCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_parse_back() {
        for category in IssueCategory::ALL {
            assert_eq!(category.label().parse::<IssueCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let err = "Overflowing Drain".parse::<IssueCategory>().unwrap_err();
        assert_eq!(err, UnknownIssueCategory("Overflowing Drain".to_string()));
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&IssueCategory::DamagedCover).unwrap();
        assert_eq!(json, "\"Damaged Manhole\"");
    }
}
