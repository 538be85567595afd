use crate::core::peak::find_peak;
use crate::domain::model::PeakResult;
use crate::domain::ports::VisitSource;
use crate::utils::error::Result;

pub struct PeakEngine<S: VisitSource> {
    source: S,
}

impl<S: VisitSource> PeakEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn run(&self) -> Result<PeakResult> {
        tracing::info!("Loading visits from {}", self.source.describe());
        let dataset = self.source.load()?;
        tracing::info!("Loaded {} visits", dataset.len());

        let result = find_peak(&dataset);
        tracing::info!(
            "Peak occupancy {} ({}..{})",
            result.peak_count,
            result.window_start,
            result.window_end
        );

        Ok(result)
    }
}
