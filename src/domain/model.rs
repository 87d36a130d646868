use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// 單一戶型／單位的標準化快照
///
/// 各欄位互相獨立，上游若回報 max < min 也原樣保留。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub bedroom_min: f64,
    pub bedroom_max: f64,
    pub bathroom_min: f64,
    pub bathroom_max: f64,
    pub sqft_min: f64,
    pub sqft_max: f64,
    pub price_min: f64,
    pub price_max: f64,
}

impl Unit {
    /// 來源沒有範圍概念時，min 與 max 取同一個值
    pub fn fixed(bedrooms: f64, bathrooms: f64, sqft: f64, price: f64) -> Self {
        Self {
            bedroom_min: bedrooms,
            bedroom_max: bedrooms,
            bathroom_min: bathrooms,
            bathroom_max: bathrooms,
            sqft_min: sqft,
            sqft_max: sqft,
            price_min: price,
            price_max: price,
        }
    }
}

/// 寫入資料庫的一列：Unit 加上本次爬取時間與 provider 名稱
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrawlRecord {
    pub crawl_date: String,
    pub name: String,
    pub unit: Unit,
}

impl CrawlRecord {
    pub fn new(crawl_date: &str, name: &str, unit: Unit) -> Self {
        Self {
            crawl_date: crawl_date.to_string(),
            name: name.to_string(),
            unit,
        }
    }
}

/// RFC 3339, UTC, to the second (`2024-05-01T06:00:00Z`).
pub fn format_crawl_date(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// 執行摘要，欄位名稱與既有的 stderr 輸出格式一致
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RunStatistics {
    pub date: String,
    pub total_providers: usize,
    pub total_providers_success: usize,
    pub total_providers_error: usize,
    pub total_units: usize,
}

impl RunStatistics {
    pub fn new(date: String, total_providers: usize) -> Self {
        Self {
            date,
            total_providers,
            ..Default::default()
        }
    }

    pub fn record_success(&mut self, units: usize) {
        self.total_providers_success += 1;
        self.total_units += units;
    }

    pub fn record_failure(&mut self) {
        self.total_providers_error += 1;
    }
}
