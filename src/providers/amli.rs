use crate::adapters::http::fetch_json;
use crate::domain::model::Unit;
use crate::domain::ports::Provider;
use crate::providers::null_as_default;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub const AMLI_GRAPHQL_ENDPOINT: &str = "https://prodeastgraph.amli.com/graphql";

const FLOORPLANS_QUERY: &str = r#"query Properties($amliPropertyId: ID!, $propertyId: ID!) {
    propertyFloorplansSummary(amliPropertyId: $amliPropertyId, propertyId: $propertyId) {
      bathroomMin
      bathroomMax
      bedroomMin
      bedroomMax
      priceMin
      priceMax
      sqftMin
      sqFtMax
    }
  }
"#;

/// AMLI 物業，透過 GraphQL 取得每個戶型的摘要
#[derive(Debug, Clone)]
pub struct Amli {
    name: String,
    property_id: String,
    amli_property_id: String,
    endpoint: String,
    client: Client,
}

impl Amli {
    pub fn new(
        client: Client,
        name: impl Into<String>,
        property_id: impl Into<String>,
        amli_property_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            property_id: property_id.into(),
            amli_property_id: amli_property_id.into(),
            endpoint: AMLI_GRAPHQL_ENDPOINT.to_string(),
            client,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphQlRequest<'a> {
    query: &'a str,
    operation_name: &'a str,
    variables: Variables<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Variables<'a> {
    property_id: &'a str,
    amli_property_id: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct AmliResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    data: AmliData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AmliData {
    #[serde(default, deserialize_with = "null_as_default")]
    property_floorplans_summary: Vec<FloorplanSummary>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FloorplanSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    bathroom_min: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    bathroom_max: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    bedroom_min: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    bedroom_max: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    sqft_min: f64,
    // 查詢字串裡寫的是 sqFtMax
    #[serde(rename = "sqFtMax", alias = "sqftMax", default, deserialize_with = "null_as_default")]
    sqft_max: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    price_min: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    price_max: f64,
}

impl From<FloorplanSummary> for Unit {
    fn from(f: FloorplanSummary) -> Self {
        Unit {
            bedroom_min: f.bedroom_min,
            bedroom_max: f.bedroom_max,
            bathroom_min: f.bathroom_min,
            bathroom_max: f.bathroom_max,
            sqft_min: f.sqft_min,
            sqft_max: f.sqft_max,
            price_min: f.price_min,
            price_max: f.price_max,
        }
    }
}

#[async_trait]
impl Provider for Amli {
    fn name(&self) -> &str {
        &self.name
    }

    async fn units(&self) -> Result<Vec<Unit>> {
        let body = GraphQlRequest {
            query: FLOORPLANS_QUERY,
            operation_name: "Properties",
            variables: Variables {
                property_id: &self.property_id,
                amli_property_id: &self.amli_property_id,
            },
        };

        tracing::debug!(
            "Querying AMLI floorplans for {} (propertyId={}, amliPropertyId={})",
            self.name,
            self.property_id,
            self.amli_property_id
        );
        let request = self.client.post(&self.endpoint).json(&body);
        let response: AmliResponse = fetch_json(request).await?;

        Ok(response
            .data
            .property_floorplans_summary
            .into_iter()
            .map(Unit::from)
            .collect())
    }
}
