pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::TallyEngine, pipeline::MakesPipeline};
pub use utils::error::{Result, TallyError};
