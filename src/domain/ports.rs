use crate::domain::model::{CarMake, TallyResult};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Sink for the persisted tally document. This tool only ever writes.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<CarMake>>;
    async fn transform(&self, makes: Vec<CarMake>) -> Result<TallyResult>;
    async fn load(&self, result: TallyResult) -> Result<String>;
}
