use crate::core::{
    collate, verify, CarMake, ConfigProvider, MakesResponse, Pipeline, Storage, TallyResult,
};
use crate::utils::envelope::trim_envelope;
use crate::utils::error::Result;
use reqwest::Client;

pub const OUTPUT_FILE_NAME: &str = "makeCounts.json";

pub struct MakesPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> MakesPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for MakesPipeline<S, C> {
    /// Fetches the makes feed. Transport failures and non-success statuses
    /// are logged and yield an empty record list; downstream stages treat
    /// that as "no data". A payload that cannot be decoded is an error.
    async fn extract(&self) -> Result<Vec<CarMake>> {
        tracing::debug!("Requesting makes feed from: {}", self.config.api_endpoint());

        let response = match self.client.get(self.config.api_endpoint()).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Fetch failed, continuing with no data: {}", e);
                return Ok(Vec::new());
            }
        };

        tracing::debug!("Feed response status: {}", response.status());
        if !response.status().is_success() {
            tracing::warn!(
                "Server error (HTTP {}), continuing with no data",
                response.status()
            );
            return Ok(Vec::new());
        }

        let raw = match response.text().await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Reading response body failed, continuing with no data: {}", e);
                return Ok(Vec::new());
            }
        };
        // The feed wraps its JSON in callback padding; strip it first.
        let json = trim_envelope(&raw)?;
        let decoded: MakesResponse = serde_json::from_str(json)?;

        tracing::debug!("Decoded {} makes", decoded.makes.len());
        Ok(decoded.makes)
    }

    /// Collates the makes into per-country tallies, then re-derives the
    /// aggregate from the same input and compares to catch drift. A failed
    /// check is recorded in the result, not an error; the engine owns
    /// reporting it.
    async fn transform(&self, makes: Vec<CarMake>) -> Result<TallyResult> {
        let tallies = collate(&makes);
        let verified = verify(&makes, &tallies);
        Ok(TallyResult { tallies, verified })
    }

    async fn load(&self, result: TallyResult) -> Result<String> {
        let json = serde_json::to_string_pretty(&result.sorted_rows())?;
        self.storage
            .write_file(OUTPUT_FILE_NAME, json.as_bytes())
            .await?;

        let output_path = format!("{}/{}", self.config.output_path(), OUTPUT_FILE_NAME);
        tracing::debug!("Tallies written to {}", output_path);
        Ok(output_path)
    }
}
