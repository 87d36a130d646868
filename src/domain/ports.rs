use crate::domain::model::{CrawlRecord, Unit};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 一個上游來源的實例
///
/// `units` 每次呼叫都重新抓取，不做快取；要嘛回傳完整結果，要嘛回傳錯誤。
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &str;
    async fn units(&self) -> Result<Vec<Unit>>;
}

/// 只能追加的爬取紀錄儲存
pub trait UnitSink {
    /// Appends one provider's batch, returning the number of rows written.
    fn append(&self, records: &[CrawlRecord]) -> Result<usize>;
}
