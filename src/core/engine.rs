use crate::core::Pipeline;
use crate::utils::error::Result;

/// Runs the extract → collate → persist flow and reports each outcome.
pub struct TallyEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TallyEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Returns the output path on success, or `None` when the tallies were
    /// computed but could not be persisted. A write failure is logged and
    /// never aborts the run; the aggregate was already reported by then.
    pub async fn run(&self) -> Result<Option<String>> {
        let makes = self.pipeline.extract().await?;
        tracing::info!("Fetched {} car makes", makes.len());

        let result = self.pipeline.transform(makes).await?;
        if result.verified {
            tracing::info!(
                "Car make data was successfully collated into counts of each \
                 country's common and uncommon makes ({} countries)",
                result.tallies.len()
            );
        } else {
            tracing::warn!("Collated country make data doesn't match general car make data");
        }

        match self.pipeline.load(result).await {
            Ok(output_path) => Ok(Some(output_path)),
            Err(e) => {
                tracing::error!("Failed to persist make counts: {}", e);
                Ok(None)
            }
        }
    }
}
