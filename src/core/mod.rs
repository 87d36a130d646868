pub mod engine;

pub use crate::domain::model::{CrawlRecord, RunStatistics, Unit};
pub use crate::domain::ports::{Provider, UnitSink};
pub use crate::utils::error::Result;
