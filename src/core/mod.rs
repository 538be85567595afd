pub mod engine;
pub mod loader;
pub mod peak;
pub mod report;
pub mod time;

pub use crate::domain::model::{Minutes, PeakResult, Visit, VisitorDataset};
pub use crate::domain::ports::VisitSource;
pub use crate::utils::error::Result;
