pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod providers;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::SqliteSink;
pub use config::ProvidersConfig;
pub use core::engine::CrawlEngine;
pub use domain::model::{CrawlRecord, RunStatistics, Unit};
pub use domain::ports::{Provider, UnitSink};
pub use providers::ProviderSpec;
pub use utils::error::{CrawlError, Result};
