pub mod collate;
pub mod engine;
pub mod pipeline;

pub use crate::core::collate::{collate, verify};
pub use crate::domain::model::{CarMake, CountryTally, MakesResponse, TallyResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
