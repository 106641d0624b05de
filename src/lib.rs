//! Phishing ML - признаки URL и MinMax масштабирование

pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod preprocessing;
pub mod report;
pub mod types;

pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use pipeline::Pipeline;
pub use preprocessing::*;
pub use types::*;
