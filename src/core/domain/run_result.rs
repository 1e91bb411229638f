//! Caller-facing run result.

use serde::Serialize;

use super::SyncReport;
use crate::error::Error;

/// Single structured result handed back to the caller.
///
/// On success `variables` lists the written keys. On failure it lists the
/// keys that still need retrying, or a single reason when the run never got
/// to process secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    pub success: bool,
    pub variables: Vec<String>,
    #[serde(skip)]
    status: u16,
}

impl RunResult {
    /// HTTP-style status: 200 on success, 404 when the resource was not
    /// accessible, 500 otherwise.
    pub fn status(&self) -> u16 {
        self.status
    }
}

impl From<&SyncReport> for RunResult {
    fn from(report: &SyncReport) -> Self {
        if report.overall_success() {
            Self {
                success: true,
                variables: report.succeeded_keys().to_vec(),
                status: 200,
            }
        } else {
            Self {
                success: false,
                variables: report
                    .failed_keys()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                status: 500,
            }
        }
    }
}

impl From<&Error> for RunResult {
    fn from(err: &Error) -> Self {
        let status = match err {
            Error::ResourceAccess { .. } => 404,
            _ => 500,
        };
        Self {
            success: false,
            variables: vec![err.to_string()],
            status,
        }
    }
}
