use crate::domain::model::VisitorDataset;
use crate::utils::error::Result;

/// Anything that can materialize a full visitor dataset.
pub trait VisitSource {
    fn load(&self) -> Result<VisitorDataset>;

    /// Human readable origin used in log lines.
    fn describe(&self) -> String;
}
