//! Listing comparison state: scan inventory, two-way selection, result.
//!
//! DESIGN
//! ======
//! The compare action is enabled only for two distinct non-empty scan ids.
//! The ids sent are remembered until the response lands so the result header
//! names the scans that were actually compared, even if the selectors moved.
//! Failures leave the selectors and question untouched.

#[cfg(test)]
#[path = "compare_test.rs"]
mod compare_test;

use crate::net::error::ApiError;
use crate::net::types::{CompareRequest, CompareResponse, ComparisonResult, Scan};
use crate::state::notify::Feedback;
use crate::state::profile::OpStatus;
use crate::state::validation::ValidationError;

pub const SCANS_FAILED: &str = "Failed to load scans";
pub const COMPARE_FAILED: &str = "Failed to compare listings";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompareState {
    pub scans: Vec<Scan>,
    pub scans_status: OpStatus,
    pub first: String,
    pub second: String,
    pub question: String,
    pub status: OpStatus,
    pub result: Option<ComparisonResult>,
    pending: Option<(String, String)>,
}

/// Validate a pair of selector values.
///
/// # Errors
///
/// Returns `ScanSelectionIncomplete` if either id is blank and
/// `SameScanSelected` if both name the same scan.
pub fn validate_selection(first: &str, second: &str) -> Result<(String, String), ValidationError> {
    let (first, second) = (first.trim(), second.trim());
    if first.is_empty() || second.is_empty() {
        return Err(ValidationError::ScanSelectionIncomplete);
    }
    if first == second {
        return Err(ValidationError::SameScanSelected);
    }
    Ok((first.to_owned(), second.to_owned()))
}

/// Trimmed question, or `None` when blank.
#[must_use]
pub fn normalize_question(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

impl CompareState {
    pub fn begin_load_scans(&mut self) {
        self.scans_status = OpStatus::InFlight;
    }

    /// Apply the `GET /my-scans` result.
    ///
    /// # Errors
    ///
    /// Returns the error notification when the list could not be loaded.
    pub fn finish_load_scans(
        &mut self,
        result: Result<Vec<Scan>, ApiError>,
    ) -> Result<(), Feedback> {
        match result {
            Ok(scans) => {
                self.scans = scans;
                self.scans_status = OpStatus::Idle;
                Ok(())
            }
            Err(err) => {
                let msg = err.user_message(SCANS_FAILED);
                self.scans_status = OpStatus::Failed(msg.clone());
                Err(Feedback::error(msg))
            }
        }
    }

    /// Whether the compare control should be enabled.
    #[must_use]
    pub fn can_compare(&self) -> bool {
        !self.status.is_in_flight() && validate_selection(&self.first, &self.second).is_ok()
    }

    /// Build the request and mark the comparison in flight.
    ///
    /// # Errors
    ///
    /// Returns the selection problem; state is unchanged.
    pub fn begin_compare(&mut self) -> Result<CompareRequest, ValidationError> {
        let (first, second) = validate_selection(&self.first, &self.second)?;
        self.pending = Some((first.clone(), second.clone()));
        self.status = OpStatus::InFlight;
        Ok(CompareRequest {
            scan_id_1: first,
            scan_id_2: second,
            question: normalize_question(&self.question),
        })
    }

    /// Apply the comparison response.
    pub fn finish_compare(&mut self, result: Result<CompareResponse, ApiError>) -> Feedback {
        let (first, second) = self
            .pending
            .take()
            .unwrap_or_else(|| (self.first.clone(), self.second.clone()));
        match result {
            Ok(resp) => {
                self.result = Some(ComparisonResult {
                    scan1: self.scan_or_placeholder(&first),
                    scan2: self.scan_or_placeholder(&second),
                    content: resp.comparison,
                    chat_id: resp.chat_id,
                });
                self.status = OpStatus::Idle;
                Feedback::success("Comparison ready")
            }
            Err(err) => {
                let msg = err.user_message(COMPARE_FAILED);
                self.status = OpStatus::Failed(msg.clone());
                Feedback::error(msg)
            }
        }
    }

    #[must_use]
    pub fn find_scan(&self, id: &str) -> Option<&Scan> {
        self.scans.iter().find(|s| s.id == id)
    }

    fn scan_or_placeholder(&self, id: &str) -> Scan {
        self.find_scan(id).cloned().unwrap_or_else(|| Scan {
            id: id.to_owned(),
            listing_url: id.to_owned(),
            listing_title: None,
            location: None,
        })
    }
}
