pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;

pub const DEFAULT_MAKES_URL: &str = "http://www.carqueryapi.com/api/0.3/?callback=?&cmd=getMakes";

/// Closest Unix analog of the original's Documents folder. Falls back to
/// the working directory when HOME is unset.
fn default_output_path() -> String {
    std::env::var("HOME").unwrap_or_else(|_| ".".to_string())
}

#[derive(Debug, Clone, Parser)]
#[command(name = "make-tabulator")]
#[command(about = "Tabulates common and uncommon car makes per country of origin")]
pub struct CliConfig {
    /// Remote makes feed to fetch.
    #[arg(long, default_value = DEFAULT_MAKES_URL)]
    pub api_endpoint: String,

    /// Directory the makeCounts.json output is written into.
    #[arg(long, default_value_t = default_output_path())]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
