use crate::adapters::http::fetch_json;
use crate::domain::model::Unit;
use crate::domain::ports::Provider;
use crate::providers::null_as_default;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

pub const HOLLAND_CONTENT_ENDPOINT: &str = "https://www.hollandresidential.com/api/v1/content";

/// Holland Residential 物業，以 `saas_id` 查詢單位清單
#[derive(Debug, Clone)]
pub struct Holland {
    name: String,
    saas_id: String,
    endpoint: String,
    client: Client,
}

impl Holland {
    pub fn new(client: Client, name: impl Into<String>, saas_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            saas_id: saas_id.into(),
            endpoint: HOLLAND_CONTENT_ENDPOINT.to_string(),
            client,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Debug, Default, Deserialize)]
struct HollandResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    units: Vec<HollandUnit>,
}

#[derive(Debug, Default, Deserialize)]
struct HollandUnit {
    #[serde(default, deserialize_with = "null_as_default")]
    beds: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    baths: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    sqft: Range,
    #[serde(default, deserialize_with = "null_as_default")]
    rent: Range,
}

#[derive(Debug, Default, Deserialize)]
struct Range {
    #[serde(default, deserialize_with = "null_as_default")]
    min: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    max: f64,
}

impl From<HollandUnit> for Unit {
    fn from(u: HollandUnit) -> Self {
        Unit {
            bedroom_min: u.beds,
            bedroom_max: u.beds,
            bathroom_min: u.baths,
            bathroom_max: u.baths,
            sqft_min: u.sqft.min,
            sqft_max: u.sqft.max,
            price_min: u.rent.min,
            price_max: u.rent.max,
        }
    }
}

#[async_trait]
impl Provider for Holland {
    fn name(&self) -> &str {
        &self.name
    }

    async fn units(&self) -> Result<Vec<Unit>> {
        let url = Url::parse_with_params(&self.endpoint, &[("saas_id", self.saas_id.as_str())])?;

        tracing::debug!("Fetching Holland units for {} from {}", self.name, url);
        let response: HollandResponse = fetch_json(self.client.get(url)).await?;

        Ok(response.units.into_iter().map(Unit::from).collect())
    }
}
