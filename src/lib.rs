pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{AppSettings, CliConfig};
pub use crate::core::{
    engine::PeakEngine,
    loader::{load_visits, FileSource, ReaderSource},
    peak::find_peak,
    report::{ReportFormat, Reporter, TimeStyle},
    time::ParseMode,
};
pub use crate::domain::model::{Minutes, PeakResult, Visit, VisitorDataset};
pub use crate::utils::error::{PeakError, Result};
