use crate::domain::model::{format_crawl_date, CrawlRecord, RunStatistics};
use crate::domain::ports::{Provider, UnitSink};
use chrono::{DateTime, Utc};

/// 依序執行所有 provider，並把結果寫入 sink
///
/// 單一 provider 的抓取或寫入失敗只會記錄並計數，不會中止整次執行。
pub struct CrawlEngine<S: UnitSink> {
    providers: Vec<Box<dyn Provider>>,
    sink: S,
}

impl<S: UnitSink> CrawlEngine<S> {
    pub fn new(providers: Vec<Box<dyn Provider>>, sink: S) -> Self {
        Self { providers, sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// 執行一次爬取；所有紀錄共用同一個 `crawl_date`
    pub async fn run(&self, crawl_date: DateTime<Utc>) -> RunStatistics {
        let date = format_crawl_date(crawl_date);
        let mut stats = RunStatistics::new(date.clone(), self.providers.len());

        tracing::info!(
            "🚀 Starting crawl {} over {} providers",
            date,
            self.providers.len()
        );

        for provider in &self.providers {
            let name = provider.name();

            let units = match provider.units().await {
                Ok(units) => units,
                Err(e) => {
                    tracing::error!("❌ failed {}: {}", name, e);
                    stats.record_failure();
                    continue;
                }
            };

            let records: Vec<CrawlRecord> = units
                .into_iter()
                .map(|unit| CrawlRecord::new(&date, name, unit))
                .collect();

            match self.sink.append(&records) {
                Ok(inserted) => {
                    tracing::info!("✅ {}: stored {} units", name, inserted);
                    stats.record_success(records.len());
                }
                Err(e) => {
                    tracing::error!("❌ failed to insert units for {}: {}", name, e);
                    stats.record_failure();
                }
            }
        }

        tracing::info!(
            "📊 Crawl finished: {} succeeded, {} failed, {} units stored",
            stats.total_providers_success,
            stats.total_providers_error,
            stats.total_units
        );

        stats
    }
}
