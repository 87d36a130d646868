use crate::utils::error::{CrawlError, Result};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

/// 送出請求並把回應解碼成 `T`
///
/// 只接受 200；其他狀態碼連同原始回應內容一起回報。
pub async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T> {
    let response = request.send().await?;
    let status = response.status();
    tracing::debug!("Upstream response status: {} ({})", status, response.url());

    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(CrawlError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        });
    }

    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
