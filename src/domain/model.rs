use serde::{Deserialize, Serialize};

use crate::utils::error::{PeakError, Result};

/// Minutes since midnight. Signed because lenient parsing can produce
/// negative values from input such as `-1:00`.
pub type Minutes = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    pub entry: Minutes,
    pub exit: Minutes,
}

impl Visit {
    pub fn new(entry: Minutes, exit: Minutes) -> Self {
        Self { entry, exit }
    }
}

/// Visits in input order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitorDataset {
    visits: Vec<Visit>,
}

impl VisitorDataset {
    pub fn new(visits: Vec<Visit>) -> Result<Self> {
        if visits.is_empty() {
            return Err(PeakError::EmptyDatasetError);
        }
        Ok(Self { visits })
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    /// A dataset is never empty.
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}

impl TryFrom<Vec<Visit>> for VisitorDataset {
    type Error = PeakError;

    fn try_from(visits: Vec<Visit>) -> Result<Self> {
        Self::new(visits)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakResult {
    pub window_start: Minutes,
    pub window_end: Minutes,
    pub peak_count: usize,
}
